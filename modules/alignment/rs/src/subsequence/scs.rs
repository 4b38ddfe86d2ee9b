use crate::affix;
use crate::matrix::Matrix;
use crate::scoring::equiv::{Equality, Identical};
use crate::{traceback, Alignable};

use super::reattach;

/// Fills the `(m+1)x(n+1)` SCS matrix, `S[i, j]` is the SCS length of the `i` and `j` prefixes.
pub fn matrix<S1, S2, E>(seq1: &S1, seq2: &S2, equiv: &E) -> Matrix<usize>
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    E: Identical<S1::Symbol>,
{
    let (len1, len2) = (seq1.len(), seq2.len());
    let mut matrix = Matrix::new(len1 + 1, len2 + 1, 0);
    for i in 0..=len1 {
        matrix[(i, 0)] = i;
    }
    for j in 0..=len2 {
        matrix[(0, j)] = j;
    }

    for i in 0..len1 {
        for j in 0..len2 {
            matrix[(i + 1, j + 1)] = if equiv.identical(seq1.at(i), seq2.at(j)) {
                matrix[(i, j)] + 1
            } else {
                matrix[(i, j + 1)].min(matrix[(i + 1, j)]) + 1
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

/// One of the shortest sequences that contain both inputs as subsequences. Matched symbols are
/// taken from the first sequence.
///
/// ```
/// use seqdp_alignment_rs::subsequence::scs;
///
/// let scs = scs::supersequence(b"ABCBDAB", b"BDCABA");
/// assert_eq!(scs.len(), 9);
/// ```
pub fn supersequence<S1, S2>(seq1: &S1, seq2: &S2) -> Vec<S1::Symbol>
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    S1::Symbol: PartialEq + Clone,
{
    supersequence_by(seq1, seq2, &Equality)
}

pub fn supersequence_by<S1, S2, E>(seq1: &S1, seq2: &S2, equiv: &E) -> Vec<S1::Symbol>
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    S1::Symbol: Clone,
    E: Identical<S1::Symbol>,
{
    let (core1, core2, affix) = affix::trim(seq1, seq2, equiv).dissolve();
    let matrix = matrix(&core1, &core2, equiv);
    reattach(seq1, &affix, traceback::scs(&matrix, &core1, &core2, equiv))
}

/// `m + n - 2 * SCS`.
///
/// Mirrors the LCS identity, but the SCS is never shorter than the longest input, so the value is
/// zero for identical inputs and negative otherwise. The insertion/deletion distance is
/// [`lcs::edit_distance`](super::lcs::edit_distance).
pub fn edit_distance<S1, S2>(seq1: &S1, seq2: &S2) -> isize
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    S1::Symbol: PartialEq,
{
    edit_distance_by(seq1, seq2, &Equality)
}

pub fn edit_distance_by<S1, S2, E>(seq1: &S1, seq2: &S2, equiv: &E) -> isize
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    E: Identical<S1::Symbol>,
{
    let total = (seq1.len() + seq2.len()) as isize;
    total - 2 * length_by(seq1, seq2, equiv) as isize
}
