//! Common-affix trimming.
//!
//! A prefix/suffix shared by both sequences adds nothing to an edit distance and trivially
//! extends a common subsequence/supersequence, so it can be stripped before the `O(mn)` matrix is
//! built. This is valid for Damerau–Levenshtein, LCS and SCS only. Local alignments
//! (Smith–Waterman) must never be trimmed: the bordering matches may be part of the optimal local
//! alignment, and removing them silently changes the result.

use derive_getters::{Dissolve, Getters};

use crate::scoring::equiv::Identical;
use crate::{Alignable, Window};

/// Number of symbols matched at the start and at the end of both sequences.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash, Getters, Dissolve)]
pub struct Affix {
    at_start: usize,
    at_end: usize,
}

impl Affix {
    /// Total number of trimmed symbols in each sequence.
    pub fn total(&self) -> usize {
        self.at_start + self.at_end
    }
}

/// Result of the affix trimming: views over the untrimmed cores of both sequences.
#[derive(Debug, Getters, Dissolve)]
pub struct Trimmed<'a, S1: Alignable + ?Sized, S2: Alignable + ?Sized> {
    seq1: Window<'a, S1>,
    seq2: Window<'a, S2>,
    affix: Affix,
}

/// Strips the longest common prefix and then, from the remaining (non-overlapping) region, the
/// longest common suffix.
pub fn trim<'a, S1, S2, E>(seq1: &'a S1, seq2: &'a S2, equiv: &E) -> Trimmed<'a, S1, S2>
where
    S1: Alignable + ?Sized,
    S2: Alignable<Symbol = S1::Symbol> + ?Sized,
    E: Identical<S1::Symbol>,
{
    let (len1, len2) = (seq1.len(), seq2.len());
    let shortest = len1.min(len2);

    let mut at_start = 0;
    while at_start < shortest && equiv.identical(seq1.at(at_start), seq2.at(at_start)) {
        at_start += 1;
    }

    let remaining = shortest - at_start;
    let mut at_end = 0;
    while at_end < remaining
        && equiv.identical(seq1.at(len1 - at_end - 1), seq2.at(len2 - at_end - 1))
    {
        at_end += 1;
    }

    log::trace!(
        "Trimmed {at_start} leading and {at_end} trailing symbols from sequences of length {len1} and {len2}"
    );

    Trimmed {
        seq1: Window::clamped(seq1, at_start, len1 - at_end),
        seq2: Window::clamped(seq2, at_start, len2 - at_end),
        affix: Affix { at_start, at_end },
    }
}
