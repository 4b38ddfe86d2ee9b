use eyre::Result;
use itertools::iproduct;

use seqdp_alignment_rs::distance::{coefficient, damerau, hamming};
use seqdp_alignment_rs::scoring::equiv::Equality;
use seqdp_alignment_rs::scoring::Costs;
use seqdp_alignment_rs::{affix, Error};

const WORDS: &[&[u8]] = &[
    b"",
    b"a",
    b"ca",
    b"ac",
    b"abc",
    b"kitten",
    b"sitting",
    b"sittng",
    b"flaw",
    b"lawn",
    b"abcdef",
    b"badcfe",
    b"aaaaaa",
];

#[test]
fn test_metric_properties() {
    for (a, b) in iproduct!(WORDS, WORDS) {
        let d = damerau::distance(*a, *b);
        assert_eq!(d, damerau::distance(*b, *a), "{a:?} vs {b:?}");
        assert_eq!(d == 0, a == b);
        assert!(d >= a.len().abs_diff(b.len()));
        assert!(d <= a.len().max(b.len()));
    }

    for (a, b, c) in iproduct!(WORDS, WORDS, WORDS) {
        let (ab, bc, ac) = (
            damerau::distance(*a, *b),
            damerau::distance(*b, *c),
            damerau::distance(*a, *c),
        );
        assert!(ac <= ab + bc, "{a:?}, {b:?}, {c:?}");
    }
}

#[test]
fn test_classic_values() {
    assert_eq!(damerau::distance(b"kitten", b"sitting"), 3);
    assert_eq!(damerau::distance(b"kitten", b"sittng"), 3);
    assert_eq!(damerau::distance(b"sitting", b"sittng"), 1);
    // kitten -> sitting -> sittng
    assert!(
        damerau::distance(b"kitten", b"sittng")
            <= damerau::distance(b"kitten", b"sitting") + damerau::distance(b"sitting", b"sittng")
    );
    assert_eq!(damerau::distance(b"ca", b"ac"), 1);
}

#[test]
fn test_affix_invariance() {
    let (prefix, suffix) = (b"shared-prefix:".to_vec(), b":shared-suffix".to_vec());
    for (a, b) in iproduct!(WORDS, WORDS) {
        let wrap = |core: &[u8]| [&prefix[..], &b"#"[..], core, &b"#"[..], &suffix[..]].concat();
        let (wa, wb) = (wrap(a), wrap(b));

        let trimmed = affix::trim(&wa, &wb, &Equality);
        assert!(trimmed.affix().total() >= prefix.len() + suffix.len() + 2);
        assert_eq!(damerau::distance(&wa, &wb), damerau::distance(*a, *b));

        let full = damerau::matrix(&wa, &wb, &Costs::<usize>::unit(), &Equality);
        assert_eq!(full.last(), Some(&damerau::distance(*a, *b)));
    }
}

#[test]
fn test_weighted_scaling() -> Result<()> {
    let costs = Costs::new(1.0, 2.0, 2.5, 1.5);
    let doubled = Costs::new(2.0, 4.0, 5.0, 3.0);
    for (a, b) in iproduct!(WORDS, WORDS) {
        let single = damerau::weighted(*a, *b, &costs, &Equality)?;
        assert_eq!(damerau::weighted(*a, *b, &doubled, &Equality)?, 2.0 * single);
    }
    Ok(())
}

#[test]
fn test_weighted_unit_costs() -> Result<()> {
    for (a, b) in iproduct!(WORDS, WORDS) {
        let unit = damerau::weighted(*a, *b, &Costs::<u32>::unit(), &Equality)?;
        assert_eq!(unit as usize, damerau::distance(*a, *b));
    }
    Ok(())
}

#[test]
fn test_rejected_costs() {
    for costs in [
        Costs::new(-0.5, 1.0, 1.0, 1.0),
        Costs::new(1.0, f64::NAN, 1.0, 1.0),
        Costs::new(1.0, 1.0, 1.0, -1.0),
    ] {
        let err = damerau::weighted(b"abc", b"abd", &costs, &Equality).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidConfiguration { .. })
        ));
    }
}

#[test]
fn test_coefficients() {
    for (a, b) in iproduct!(WORDS, WORDS) {
        let distance = damerau::simple_matching_distance(*a, *b);
        let coefficient = damerau::simple_matching_coefficient(*a, *b);
        assert!((0.0..=1.0).contains(&distance));
        assert!((distance + coefficient - 1.0).abs() < 1e-12);
        assert_eq!(
            distance,
            coefficient::simple_matching_distance(damerau::distance(*a, *b), a.len(), b.len())
        );
    }
}

#[test]
fn test_hamming() -> Result<()> {
    assert_eq!(hamming::distance(b"karolin", b"kerstin")?, 3);
    assert_eq!(hamming::distance(b"2173896", b"2233796")?, 3);

    for (a, b) in iproduct!(WORDS, WORDS) {
        match hamming::distance(*a, *b) {
            Ok(d) => {
                assert_eq!(a.len(), b.len());
                assert!(damerau::distance(*a, *b) <= d);
            }
            Err(err) => assert_eq!(
                err.downcast_ref::<Error>(),
                Some(&Error::LengthMismatch {
                    seq1: a.len(),
                    seq2: b.len()
                })
            ),
        }
    }
    Ok(())
}

#[test]
fn test_determinism() {
    for (a, b) in iproduct!(WORDS, WORDS) {
        assert_eq!(damerau::distance(*a, *b), damerau::distance(*a, *b));
    }
}
