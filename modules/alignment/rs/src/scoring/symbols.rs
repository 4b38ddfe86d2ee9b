use crate::Score;

use super::equiv;

/// The scoring capability used by the pairwise alignments: the score of placing two symbols in
/// the same alignment column.
pub trait Scorer<T> {
    type Score: Score;

    fn score(&self, s1: &T, s2: &T) -> Self::Score;
}

impl<T, S, F> Scorer<T> for F
where
    S: Score,
    F: Fn(&T, &T) -> S,
{
    type Score = S;

    #[inline(always)]
    fn score(&self, s1: &T, s2: &T) -> Self::Score {
        self(s1, s2)
    }
}

/// Fixed scores for identical and different symbols.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Equality<S: Score, E = equiv::Equality> {
    pub equal: S,
    pub different: S,
    pub equiv: E,
}

impl<S: Score, E> Equality<S, E> {
    pub fn new(equal: S, different: S, equiv: E) -> Self {
        Self {
            equal,
            different,
            equiv,
        }
    }
}

impl<S: Score> Default for Equality<S> {
    /// `+1` for identical symbols, `-1` otherwise.
    fn default() -> Self {
        Self::new(S::one(), -S::one(), equiv::Equality)
    }
}

impl<T, S: Score, E: equiv::Identical<T>> Scorer<T> for Equality<S, E> {
    type Score = S;

    #[inline(always)]
    fn score(&self, s1: &T, s2: &T) -> Self::Score {
        if self.equiv.identical(s1, s2) {
            self.equal
        } else {
            self.different
        }
    }
}
