//! Smith–Waterman local alignment.

use crate::matrix::Matrix;
use crate::scoring::symbols::Scorer;
use crate::scoring::Scheme;
use crate::{traceback, Alignable, Score};

use super::alignment::Alignment;

/// Fills the `(m+1)x(n+1)` local alignment matrix: zero borders and
/// `M[i, j] = max(diagonal + score, up + gap, left + gap, 0)`.
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
        let s1 = seq1.at(i - 1);
        for j in 1..=len2 {
            let diagonal = matrix[(i - 1, j - 1)] + scheme.scorer.score(s1, seq2.at(j - 1));
            let up = matrix[(i - 1, j)] + scheme.gap;
            let left = matrix[(i, j - 1)] + scheme.gap;
            matrix[(i, j)] = diagonal.max(up).max(left).max(S::zero());
        }
    }
    matrix
}

// First cell holding the maximum in row-major order.
fn best<S: Score>(matrix: &Matrix<S>) -> ((usize, usize), S) {
    let mut best = ((0, 0), S::zero());
    for row in 0..*matrix.rows() {
        for (col, score) in matrix.row(row).iter().enumerate() {
            if *score > best.1 {
                best = ((row, col), *score);
            }
        }
    }
    best
}

/// Optimal local alignment score, the maximum of the matrix. Never negative.
pub fn score<S1, S2, Sc, S>(seq1: &S1, seq2: &S2, scheme: &Scheme<Sc, S>) -> S
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    Sc: Scorer<S1::Symbol, Score = S>,
    S: Score,
{
    best(&matrix(seq1, seq2, scheme)).1
}

/// Optimal local alignment.
///
/// The traceback starts at the first maximum in row-major order and stops at the first cell with
/// a zero score. If no pair of symbols scores above zero, the alignment is empty.
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
    let (cell, score) = best(&matrix);
    log::trace!("Best local alignment score {score:?} at {cell:?}");
    traceback::local(&matrix, seq1, seq2, scheme, cell)
}
