//! Needleman–Wunsch global alignment.

use crate::matrix::Matrix;
use crate::scoring::symbols::Scorer;
use crate::scoring::Scheme;
use crate::{traceback, Alignable, Score};

use super::alignment::Alignment;

/// Fills the `(m+1)x(n+1)` global alignment matrix: `M[i, 0] = i * gap`, `M[0, j] = j * gap` and
/// `M[i, j] = max(diagonal + score, up + gap, left + gap)`.
pub fn matrix<S1, S2, Sc, S>(seq1: &S1, seq2: &S2, scheme: &Scheme<Sc, S>) -> Matrix<S>
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    Sc: Scorer<S1::Symbol, Score = S>,
    S: Score,
{
    let (len1, len2) = (seq1.len(), seq2.len());
    let mut matrix = Matrix::new(len1 + 1, len2 + 1, S::zero());
    for i in 1..=len1 {
        matrix[(i, 0)] = matrix[(i - 1, 0)] + scheme.gap;
    }
    for j in 1..=len2 {
        matrix[(0, j)] = matrix[(0, j - 1)] + scheme.gap;
    }

    for i in 1..=len1 {
        let s1 = seq1.at(i - 1);
        for j in 1..=len2 {
            let diagonal = matrix[(i - 1, j - 1)] + scheme.scorer.score(s1, seq2.at(j - 1));
            let up = matrix[(i - 1, j)] + scheme.gap;
            let left = matrix[(i, j - 1)] + scheme.gap;
            matrix[(i, j)] = diagonal.max(up).max(left);
        }
    }
    matrix
}

/// Optimal global alignment score, i.e. `M[m, n]`. Might be negative.
pub fn score<S1, S2, Sc, S>(seq1: &S1, seq2: &S2, scheme: &Scheme<Sc, S>) -> S
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    Sc: Scorer<S1::Symbol, Score = S>,
    S: Score,
{
    matrix(seq1, seq2, scheme)[(seq1.len(), seq2.len())]
}

/// Optimal global alignment of the full sequences.
///
/// Ties are resolved in a fixed order while walking back from `[m, n]`: diagonal, then a gap in
/// the second sequence, then a gap in the first one.
///
/// ```
/// use seqdp_alignment_rs::pairwise::global;
/// use seqdp_alignment_rs::scoring::Scheme;
///
/// let scheme = Scheme::<_, i32>::default();
/// let alignment = global::align(b"GATTACA", b"GCATGCA", &scheme);
/// assert_eq!(*alignment.score(), 2);
/// assert_eq!(alignment.aligned1().len(), alignment.aligned2().len());
/// ```
pub fn align<S1, S2, Sc, S>(
    seq1: &S1,
    seq2: &S2,
    scheme: &Scheme<Sc, S>,
) -> Alignment<S1::Symbol, S>
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    S1::Symbol: Clone,
    Sc: Scorer<S1::Symbol, Score = S>,
    S: Score,
{
    let matrix = matrix(seq1, seq2, scheme);
    traceback::global(&matrix, seq1, seq2, scheme)
}
