use eyre::Result;

use crate::affix;
use crate::matrix::Matrix;
use crate::scoring::equiv::{Equality, Identical};
use crate::scoring::Costs;
use crate::{Alignable, Cost};

use super::coefficient;

// Dense class ids for the symbols of both sequences: two symbols share an id iff they are
// identical. Replaces a symbol->index map when symbols are only comparable via `Identical`.
struct Alphabet {
    seq1: Vec<usize>,
    seq2: Vec<usize>,
    size: usize,
}

impl Alphabet {
    fn new<S1, S2, E>(seq1: &S1, seq2: &S2, equiv: &E) -> Self
    where
        S1: Alignable + ?Sized,
        S2: Alignable<Symbol = S1::Symbol> + ?Sized,
        E: Identical<S1::Symbol>,
    {
        let mut representatives: Vec<&S1::Symbol> = Vec::new();
        let mut classify = |symbol| match representatives
            .iter()
            .position(|x| equiv.identical(x, symbol))
        {
            Some(class) => class,
            None => {
                representatives.push(symbol);
                representatives.len() - 1
            }
        };

        let seq1 = (0..seq1.len()).map(|i| classify(seq1.at(i))).collect();
        let seq2 = (0..seq2.len()).map(|j| classify(seq2.at(j))).collect();
        Self {
            seq1,
            seq2,
            size: representatives.len(),
        }
    }
}

#[inline(always)]
fn least<C: Cost>(a: C, b: C) -> C {
    if b < a {
        b
    } else {
        a
    }
}

/// Builds the full `(m+2)x(n+2)` Damerau–Levenshtein matrix (Lowrance–Wagner recurrence).
///
/// Row/column 0 hold a sentinel that is never cheaper than a real path, row/column 1 hold the
/// plain deletion/insertion accumulation. The distance is stored in the bottom-right cell.
///
/// The matrix is built as is: costs are not validated and common affixes are not trimmed.
///
/// Symbols are first grouped into classes of identical symbols by a linear scan over the classes
/// seen so far. That costs `O((m + n) * k)` equality checks for `k` distinct symbols, on top of
/// the `O(m * n)` fill, and dominates for token sequences with mostly distinct symbols.
pub fn matrix<S1, S2, C, E>(seq1: &S1, seq2: &S2, costs: &Costs<C>, equiv: &E) -> Matrix<C>
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    C: Cost,
    E: Identical<S1::Symbol>,
{
    let (len1, len2) = (seq1.len(), seq2.len());
    let sentinel = C::from_count(len1 + len2) * costs.max_indel();

    let mut matrix = Matrix::new(len1 + 2, len2 + 2, C::zero());
    matrix[(0, 0)] = sentinel;
    for i in 0..=len1 {
        matrix[(i + 1, 0)] = sentinel;
        matrix[(i + 1, 1)] = C::from_count(i) * costs.delete;
    }
    for j in 0..=len2 {
        matrix[(0, j + 1)] = sentinel;
        matrix[(1, j + 1)] = C::from_count(j) * costs.insert;
    }

    let alphabet = Alphabet::new(seq1, seq2, equiv);
    // Last row (1-based, 0 = never) where each symbol class occurred in seq1
    let mut last_row = vec![0usize; alphabet.size];

    for i in 1..=len1 {
        let class1 = alphabet.seq1[i - 1];
        // Last column (1-based, 0 = never) of a match in the current row
        let mut last_col = 0;

        for j in 1..=len2 {
            let class2 = alphabet.seq2[j - 1];
            let (row, col) = (last_row[class2], last_col);

            let substitution = if class1 == class2 {
                last_col = j;
                C::zero()
            } else {
                costs.substitute
            };

            let transposition = matrix[(row, col)]
                + C::from_count(i - row - 1) * costs.delete
                + costs.transpose
                + C::from_count(j - col - 1) * costs.insert;

            matrix[(i + 1, j + 1)] = least(
                least(
                    matrix[(i, j)] + substitution,
                    matrix[(i + 1, j)] + costs.insert,
                ),
                least(matrix[(i, j + 1)] + costs.delete, transposition),
            );
        }
        last_row[class1] = i;
    }
    matrix
}

fn trimmed<S1, S2, C, E>(seq1: &S1, seq2: &S2, costs: &Costs<C>, equiv: &E) -> C
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    C: Cost,
    E: Identical<S1::Symbol>,
{
    let (core1, core2, _) = affix::trim(seq1, seq2, equiv).dissolve();
    if core1.is_empty() {
        return C::from_count(core2.len()) * costs.insert;
    }
    if core2.is_empty() {
        return C::from_count(core1.len()) * costs.delete;
    }
    matrix(&core1, &core2, costs, equiv)[(core1.len() + 1, core2.len() + 1)]
}

/// Unit-cost Damerau–Levenshtein distance with true (unrestricted) adjacent transpositions.
///
/// ```
/// use seqdp_alignment_rs::distance::damerau;
///
/// assert_eq!(damerau::distance(b"kitten", b"sitting"), 3);
/// assert_eq!(damerau::distance(b"ca", b"ac"), 1);
/// ```
pub fn distance<S1, S2>(seq1: &S1, seq2: &S2) -> usize
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    S1::Symbol: PartialEq,
{
    distance_by(seq1, seq2, &Equality)
}

/// Unit-cost Damerau–Levenshtein distance under a custom equality.
///
/// Same costs as [`matrix`], including the `O((m + n) * k)` symbol classification over the
/// trimmed cores.
pub fn distance_by<S1, S2, E>(seq1: &S1, seq2: &S2, equiv: &E) -> usize
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    E: Identical<S1::Symbol>,
{
    trimmed(seq1, seq2, &Costs::unit(), equiv)
}

/// Damerau–Levenshtein distance with custom edit costs.
///
/// # Errors
///
/// [`Error::InvalidConfiguration`](crate::Error::InvalidConfiguration) if any of the costs is
/// negative or NaN. Costs are checked before any allocation.
pub fn weighted<S1, S2, C, E>(seq1: &S1, seq2: &S2, costs: &Costs<C>, equiv: &E) -> Result<C>
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    C: Cost,
    E: Identical<S1::Symbol>,
{
    costs.validate()?;
    Ok(trimmed(seq1, seq2, costs, equiv))
}

/// Unit-cost distance normalized by the length of the longest sequence.
pub fn simple_matching_distance<S1, S2>(seq1: &S1, seq2: &S2) -> f64
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    S1::Symbol: PartialEq,
{
    coefficient::simple_matching_distance(distance(seq1, seq2), seq1.len(), seq2.len())
}

/// `1 - simple_matching_distance`.
pub fn simple_matching_coefficient<S1, S2>(seq1: &S1, seq2: &S2) -> f64
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    S1::Symbol: PartialEq,
{
    coefficient::simple_matching_coefficient(distance(seq1, seq2), seq1.len(), seq2.len())
}
