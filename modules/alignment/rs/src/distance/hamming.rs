use eyre::Result;

use crate::scoring::equiv::{Equality, Identical};
use crate::{Alignable, Error};

/// Number of positions at which two equal-length sequences differ.
///
/// # Errors
///
/// [`Error::LengthMismatch`] if the sequences have different lengths.
pub fn distance<S1, S2>(seq1: &S1, seq2: &S2) -> Result<usize>
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    S1::Symbol: PartialEq,
{
    distance_by(seq1, seq2, &Equality)
}

/// Same as [`distance`] under a custom equality.
pub fn distance_by<S1, S2, E>(seq1: &S1, seq2: &S2, equiv: &E) -> Result<usize>
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    E: Identical<S1::Symbol>,
{
    if seq1.len() != seq2.len() {
        log::debug!(
            "Rejected sequences of different lengths: {} and {}",
            seq1.len(),
            seq2.len()
        );
        return Err(Error::LengthMismatch {
            seq1: seq1.len(),
            seq2: seq2.len(),
        }
        .into());
    }

    Ok((0..seq1.len())
        .filter(|&i| !equiv.identical(seq1.at(i), seq2.at(i)))
        .count())
}
