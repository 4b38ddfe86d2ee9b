//! Longest common subsequence and shortest common supersequence.
//!
//! Scalar and reconstruction entry points strip the common affixes first, they are re-attached to
//! the reconstructed sequences. The `matrix` builders work on the sequences as given.

use crate::affix::Affix;
use crate::Alignable;

pub mod lcs;
pub mod scs;

// Trimmed prefix + core + trimmed suffix, affix symbols are taken from the first sequence.
fn reattach<S1>(seq1: &S1, affix: &Affix, core: Vec<S1::Symbol>) -> Vec<S1::Symbol>
where
    S1: Alignable + ?Sized,
    S1::Symbol: Clone,
{
    let len1 = seq1.len();
    let mut result = Vec::with_capacity(core.len() + affix.total());
    result.extend((0..*affix.at_start()).map(|i| seq1.at(i).clone()));
    result.extend(core);
    result.extend((len1 - affix.at_end()..len1).map(|i| seq1.at(i).clone()));
    result
}
