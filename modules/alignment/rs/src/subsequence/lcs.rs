use crate::affix;
use crate::distance::coefficient;
use crate::matrix::Matrix;
use crate::scoring::equiv::{Equality, Identical};
use crate::{traceback, Alignable};

use super::reattach;

/// Fills the `(m+1)x(n+1)` LCS matrix, `L[i, j]` is the LCS length of the `i` and `j` prefixes.
pub fn matrix<S1, S2, E>(seq1: &S1, seq2: &S2, equiv: &E) -> Matrix<usize>
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    E: Identical<S1::Symbol>,
{
    let (len1, len2) = (seq1.len(), seq2.len());
    let mut matrix = Matrix::new(len1 + 1, len2 + 1, 0);
    for i in 0..len1 {
        for j in 0..len2 {
            matrix[(i + 1, j + 1)] = if equiv.identical(seq1.at(i), seq2.at(j)) {
                matrix[(i, j)] + 1
            } else {
                matrix[(i, j + 1)].max(matrix[(i + 1, j)])
            };
        }
    }
    matrix
}

pub fn length<S1, S2>(seq1: &S1, seq2: &S2) -> usize
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    S1::Symbol: PartialEq,
{
    length_by(seq1, seq2, &Equality)
}

pub fn length_by<S1, S2, E>(seq1: &S1, seq2: &S2, equiv: &E) -> usize
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    E: Identical<S1::Symbol>,
{
    let (core1, core2, affix) = affix::trim(seq1, seq2, equiv).dissolve();
    affix.total() + matrix(&core1, &core2, equiv)[(core1.len(), core2.len())]
}

/// One of the longest common subsequences, symbols are taken from the first sequence.
///
/// When several subsequences are optimal, the traceback discards symbols of the second sequence
/// first, so `subsequence(b"AB", b"BA")` is `B`.
///
/// ```
/// use seqdp_alignment_rs::subsequence::lcs;
///
/// assert_eq!(lcs::subsequence(b"ABCBDAB", b"BDCABA").len(), 4);
/// assert_eq!(lcs::subsequence(b"AGGTAB", b"GXTXAYB"), b"GTAB".to_vec());
/// ```
pub fn subsequence<S1, S2>(seq1: &S1, seq2: &S2) -> Vec<S1::Symbol>
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    S1::Symbol: PartialEq + Clone,
{
    subsequence_by(seq1, seq2, &Equality)
}

pub fn subsequence_by<S1, S2, E>(seq1: &S1, seq2: &S2, equiv: &E) -> Vec<S1::Symbol>
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    S1::Symbol: Clone,
    E: Identical<S1::Symbol>,
{
    let (core1, core2, affix) = affix::trim(seq1, seq2, equiv).dissolve();
    let matrix = matrix(&core1, &core2, equiv);
    reattach(seq1, &affix, traceback::lcs(&matrix, &core1, &core2, equiv))
}

/// Insertion/deletion-only edit distance: `m + n - 2 * LCS`.
pub fn edit_distance<S1, S2>(seq1: &S1, seq2: &S2) -> usize
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    S1::Symbol: PartialEq,
{
    edit_distance_by(seq1, seq2, &Equality)
}

pub fn edit_distance_by<S1, S2, E>(seq1: &S1, seq2: &S2, equiv: &E) -> usize
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    E: Identical<S1::Symbol>,
{
    seq1.len() + seq2.len() - 2 * length_by(seq1, seq2, equiv)
}

/// LCS length normalized by the length of the longest sequence.
pub fn similarity<S1, S2>(seq1: &S1, seq2: &S2) -> f64
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    S1::Symbol: PartialEq,
{
    coefficient::normalized_similarity(length(seq1, seq2), seq1.len(), seq2.len())
}
