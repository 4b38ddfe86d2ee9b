use itertools::iproduct;

use seqdp_alignment_rs::pairwise::alignment::Aligned;
use seqdp_alignment_rs::pairwise::global;
use seqdp_alignment_rs::scoring::equiv::Equality;
use seqdp_alignment_rs::scoring::{symbols, Scheme};

use super::*;

type Scoring = Scheme<symbols::Equality<Score>, Score>;

struct Workload<'a> {
    seq1: &'a [u8],
    seq2: &'a [u8],
    score: Score,
    rle: &'a str,
}

fn ensure(scheme: &Scoring, w: Workload<'_>) {
    let invrle = invrle(w.rle);

    for (seq1, seq2, rle) in [(w.seq1, w.seq2, w.rle), (w.seq2, w.seq1, invrle.as_str())] {
        let result = global::align(seq1, seq2, scheme);
        assert_eq!(*result.score(), w.score);
        assert_eq!(result.rle(&Equality), rle);
        assert_eq!(global::score(seq1, seq2, scheme), w.score);
    }
}

#[test]
fn test_unique_alignments() {
    let scheme = Scoring::default();
    for w in [
        Workload {
            seq1: b"GATTACA",
            seq2: b"GATTACA",
            score: 7,
            rle: "7=",
        },
        Workload {
            seq1: b"ACGT",
            seq2: b"AGT",
            score: 2,
            rle: "1=1^2=",
        },
        Workload {
            seq1: b"",
            seq2: b"ABC",
            score: -3,
            rle: "3v",
        },
        Workload {
            seq1: b"",
            seq2: b"",
            score: 0,
            rle: "",
        },
    ] {
        ensure(&scheme, w);
    }

    let scheme = Scheme::new(symbols::Equality::new(2, -1, Equality), -2);
    ensure(
        &scheme,
        Workload {
            seq1: b"ACGT",
            seq2: b"ACCT",
            score: 5,
            rle: "2=1X1=",
        },
    );
}

#[test]
fn test_alignment_covers_inputs() {
    let scheme = Scoring::default();
    for (seq1, seq2) in iproduct!(SEQUENCES, SEQUENCES) {
        let aln = global::align(*seq1, *seq2, &scheme);
        assert_eq!(aln.aligned1().len(), aln.aligned2().len());
        assert_eq!(*aln.seq1(), 0..seq1.len());
        assert_eq!(*aln.seq2(), 0..seq2.len());
        assert_eq!(strip(aln.aligned1()), seq1.to_vec());
        assert_eq!(strip(aln.aligned2()), seq2.to_vec());
        assert!(aln.columns().all(|(a, b)| !(a.is_gap() && b.is_gap())));
    }
}

#[test]
fn test_score_matches_columns() {
    let scheme = Scoring::default();
    for (seq1, seq2) in iproduct!(SEQUENCES, SEQUENCES) {
        let aln = global::align(*seq1, *seq2, &scheme);
        let total: Score = aln
            .columns()
            .map(|column| match column {
                (Aligned::Symbol(a), Aligned::Symbol(b)) if a == b => 1,
                _ => -1,
            })
            .sum();
        assert_eq!(total, *aln.score());
    }
}

#[test]
fn test_monotonic_in_gap_penalty() {
    let gaps = [2, 1, 0, -1, -2, -3, -5, -10];
    for (seq1, seq2) in iproduct!(SEQUENCES, SEQUENCES) {
        let scores = gaps
            .iter()
            .map(|gap| global::score(*seq1, *seq2, &Scoring::default().with_gap(*gap)))
            .collect::<Vec<_>>();
        assert!(
            scores.windows(2).all(|x| x[0] >= x[1]),
            "{seq1:?} vs {seq2:?}: {scores:?}"
        );
    }
}

#[test]
fn test_determinism() {
    let scheme = Scoring::default();
    for (seq1, seq2) in iproduct!(SEQUENCES, SEQUENCES) {
        assert_eq!(
            global::align(*seq1, *seq2, &scheme),
            global::align(*seq1, *seq2, &scheme)
        );
    }
}
