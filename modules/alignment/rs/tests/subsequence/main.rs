use itertools::iproduct;

use seqdp_alignment_rs::distance::damerau;
use seqdp_alignment_rs::scoring::equiv::Equality;
use seqdp_alignment_rs::subsequence::{lcs, scs};

const SEQUENCES: &[&[u8]] = &[
    b"",
    b"A",
    b"ABCBDAB",
    b"BDCABA",
    b"AGGTAB",
    b"GXTXAYB",
    b"XMJYAUZ",
    b"MZJAWXU",
    b"prefix-ABC-suffix",
    b"prefix-CBA-suffix",
];

fn is_subsequence(sub: &[u8], seq: &[u8]) -> bool {
    let mut rest = seq.iter();
    sub.iter().all(|x| rest.any(|y| y == x))
}

#[test]
fn test_classic_values() {
    assert_eq!(lcs::length(b"ABCBDAB", b"BDCABA"), 4);
    assert_eq!(scs::length(b"ABCBDAB", b"BDCABA"), 9);
    assert_eq!(lcs::subsequence(b"XMJYAUZ", b"MZJAWXU"), b"MJAU".to_vec());
}

#[test]
fn test_lcs_reconstruction() {
    for (a, b) in iproduct!(SEQUENCES, SEQUENCES) {
        let sub = lcs::subsequence(*a, *b);
        assert!(is_subsequence(&sub, a), "{a:?} vs {b:?}");
        assert!(is_subsequence(&sub, b), "{a:?} vs {b:?}");
        assert_eq!(sub.len(), lcs::length(*a, *b));
        assert_eq!(lcs::length(*a, *b), lcs::length(*b, *a));
    }
}

#[test]
fn test_scs_reconstruction() {
    for (a, b) in iproduct!(SEQUENCES, SEQUENCES) {
        let sup = scs::supersequence(*a, *b);
        assert!(is_subsequence(a, &sup), "{a:?} vs {b:?}");
        assert!(is_subsequence(b, &sup), "{a:?} vs {b:?}");
        assert_eq!(sup.len(), scs::length(*a, *b));
    }
}

#[test]
fn test_lengths_are_consistent() {
    for (a, b) in iproduct!(SEQUENCES, SEQUENCES) {
        let (lcs, scs) = (lcs::length(*a, *b), scs::length(*a, *b));
        assert_eq!(lcs + scs, a.len() + b.len());

        // Untrimmed matrices agree with the trimmed entry points
        let full = lcs::matrix(*a, *b, &Equality);
        assert_eq!(full.last(), Some(&lcs));
    }
}

#[test]
fn test_edit_distances() {
    for (a, b) in iproduct!(SEQUENCES, SEQUENCES) {
        let indel = lcs::edit_distance(*a, *b);
        assert!(damerau::distance(*a, *b) <= indel);
        assert_eq!(indel % 2, (a.len() + b.len()) % 2);

        let scs = scs::edit_distance(*a, *b);
        assert!(scs <= 0);
        assert_eq!(scs == 0, a == b);
        assert_eq!(scs, -(indel as isize));
    }
}

#[test]
fn test_similarity() {
    for (a, b) in iproduct!(SEQUENCES, SEQUENCES) {
        let similarity = lcs::similarity(*a, *b);
        assert!((0.0..=1.0).contains(&similarity));
        assert_eq!(similarity == 1.0, a == b);
    }
}
