use derive_getters::Dissolve;
use derive_more::Constructor;

use crate::Score;

use super::symbols;

/// Scoring scheme of the pairwise alignments: a symbol scorer and a linear gap penalty.
///
/// The gap penalty is *added* to the score for every gap column, pass a negative value to
/// penalize gaps.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Constructor, Dissolve)]
pub struct Scheme<Sc, S: Score> {
    pub scorer: Sc,
    pub gap: S,
}

impl<S: Score> Default for Scheme<symbols::Equality<S>, S> {
    /// `+1` match, `-1` mismatch and `-1` per gap.
    fn default() -> Self {
        Self::new(symbols::Equality::default(), -S::one())
    }
}

impl<Sc, S: Score> Scheme<Sc, S> {
    /// Replace the gap penalty, keeping the scorer.
    pub fn with_gap(self, gap: S) -> Self {
        Self { gap, ..self }
    }
}
