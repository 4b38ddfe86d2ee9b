// Reconstructions from filled DP matrices. Every walk is an explicit loop that pushes from the end
// of the sequences and reverses once at the end.

use crate::matrix::Matrix;
use crate::pairwise::alignment::{Aligned, Alignment};
use crate::scoring::equiv::Identical;
use crate::scoring::symbols::Scorer;
use crate::scoring::Scheme;
use crate::{Alignable, Score};

type Columns<T> = (Vec<Aligned<T>>, Vec<Aligned<T>>);

// Walks back from `start` until `stop` holds, re-evaluating which predecessor produced each cell.
// Priority: diagonal, then up (gap in the second sequence), then left (gap in the first one).
fn walk<S1, S2, Sc, S>(
    matrix: &Matrix<S>,
    seq1: &S1,
    seq2: &S2,
    scheme: &Scheme<Sc, S>,
    start: (usize, usize),
    stop: impl Fn(usize, usize) -> bool,
) -> (Columns<S1::Symbol>, (usize, usize))
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    S1::Symbol: Clone,
    Sc: Scorer<S1::Symbol, Score = S>,
    S: Score,
{
    let (mut i, mut j) = start;
    let mut aligned1 = Vec::with_capacity(i + j);
    let mut aligned2 = Vec::with_capacity(i + j);

    while !stop(i, j) {
        let current = matrix[(i, j)];
        let diagonal = i > 0 && j > 0 && {
            let score = scheme.scorer.score(seq1.at(i - 1), seq2.at(j - 1));
            current == matrix[(i - 1, j - 1)] + score
        };

        if diagonal {
            aligned1.push(Aligned::Symbol(seq1.at(i - 1).clone()));
            aligned2.push(Aligned::Symbol(seq2.at(j - 1).clone()));
            i -= 1;
            j -= 1;
        } else if i > 0 && current == matrix[(i - 1, j)] + scheme.gap {
            aligned1.push(Aligned::Symbol(seq1.at(i - 1).clone()));
            aligned2.push(Aligned::Gap);
            i -= 1;
        } else {
            debug_assert!(
                j > 0 && current == matrix[(i, j - 1)] + scheme.gap,
                "No predecessor produced the cell ({i}, {j})"
            );
            aligned1.push(Aligned::Gap);
            aligned2.push(Aligned::Symbol(seq2.at(j - 1).clone()));
            j -= 1;
        }
    }

    aligned1.reverse();
    aligned2.reverse();
    ((aligned1, aligned2), (i, j))
}

/// Global traceback: from `[m, n]` to `[0, 0]`.
pub(crate) fn global<S1, S2, Sc, S>(
    matrix: &Matrix<S>,
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
    let (len1, len2) = (seq1.len(), seq2.len());
    let ((aligned1, aligned2), _) = walk(matrix, seq1, seq2, scheme, (len1, len2), |i, j| {
        i == 0 && j == 0
    });
    Alignment::new(matrix[(len1, len2)], aligned1, aligned2, 0..len1, 0..len2)
}

/// Local traceback: from the given (best) cell to the first cell with a zero score.
pub(crate) fn local<S1, S2, Sc, S>(
    matrix: &Matrix<S>,
    seq1: &S1,
    seq2: &S2,
    scheme: &Scheme<Sc, S>,
    best: (usize, usize),
) -> Alignment<S1::Symbol, S>
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    S1::Symbol: Clone,
    Sc: Scorer<S1::Symbol, Score = S>,
    S: Score,
{
    let ((aligned1, aligned2), (start1, start2)) =
        walk(matrix, seq1, seq2, scheme, best, |i, j| matrix[(i, j)].is_zero());
    Alignment::new(
        matrix[best],
        aligned1,
        aligned2,
        start1..best.0,
        start2..best.1,
    )
}

/// LCS traceback from `[m, n]`. On a mismatch the walk steps up (discarding a symbol of the first
/// sequence) only when the upper neighbor is strictly larger. Ties discard a symbol of the second
/// sequence, i.e. the walk steps left.
pub(crate) fn lcs<S1, S2, E>(
    matrix: &Matrix<usize>,
    seq1: &S1,
    seq2: &S2,
    equiv: &E,
) -> Vec<S1::Symbol>
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    S1::Symbol: Clone,
    E: Identical<S1::Symbol>,
{
    let (mut i, mut j) = (seq1.len(), seq2.len());
    let mut result = Vec::with_capacity(matrix[(i, j)]);

    while i > 0 && j > 0 {
        if equiv.identical(seq1.at(i - 1), seq2.at(j - 1)) {
            result.push(seq1.at(i - 1).clone());
            i -= 1;
            j -= 1;
        } else if matrix[(i - 1, j)] > matrix[(i, j - 1)] {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    debug_assert_eq!(result.len(), matrix[(seq1.len(), seq2.len())]);
    result.reverse();
    result
}

/// SCS traceback from `[m, n]`. Matched symbols are emitted once (taken from the first sequence),
/// otherwise the symbol of the smaller neighbor is emitted, ties emit the second sequence symbol.
pub(crate) fn scs<S1, S2, E>(
    matrix: &Matrix<usize>,
    seq1: &S1,
    seq2: &S2,
    equiv: &E,
) -> Vec<S1::Symbol>
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    S1::Symbol: Clone,
    E: Identical<S1::Symbol>,
{
    let (mut i, mut j) = (seq1.len(), seq2.len());
    let mut result = Vec::with_capacity(matrix[(i, j)]);

    while i > 0 && j > 0 {
        if equiv.identical(seq1.at(i - 1), seq2.at(j - 1)) {
            result.push(seq1.at(i - 1).clone());
            i -= 1;
            j -= 1;
        } else if matrix[(i - 1, j)] < matrix[(i, j - 1)] {
            result.push(seq1.at(i - 1).clone());
            i -= 1;
        } else {
            result.push(seq2.at(j - 1).clone());
            j -= 1;
        }
    }
    while i > 0 {
        result.push(seq1.at(i - 1).clone());
        i -= 1;
    }
    while j > 0 {
        result.push(seq2.at(j - 1).clone());
        j -= 1;
    }

    debug_assert_eq!(result.len(), matrix[(seq1.len(), seq2.len())]);
    result.reverse();
    result
}
