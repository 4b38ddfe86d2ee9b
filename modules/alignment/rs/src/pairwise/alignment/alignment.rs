use std::ops::Range;

use derive_getters::{Dissolve, Getters};

use crate::scoring::equiv::Identical;
use crate::{PrimUInt, Score};

use super::op::Op;
use super::step::Step;

/// A single element of an aligned sequence: either an input symbol or a gap.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Aligned<T> {
    Symbol(T),
    Gap,
}

impl<T> Aligned<T> {
    pub fn is_gap(&self) -> bool {
        matches!(self, Aligned::Gap)
    }

    pub fn symbol(&self) -> Option<&T> {
        match self {
            Aligned::Symbol(x) => Some(x),
            Aligned::Gap => None,
        }
    }
}

/// A pairwise (global or local) alignment of two sequences.
///
/// `aligned1` and `aligned2` always have equal lengths and never share a gap column. `seq1` and
/// `seq2` are the half-open regions of the inputs covered by the alignment: the whole sequences
/// for a global alignment, the optimal local region for a local one.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve)]
pub struct Alignment<T, S: Score> {
    score: S,
    aligned1: Vec<Aligned<T>>,
    aligned2: Vec<Aligned<T>>,
    seq1: Range<usize>,
    seq2: Range<usize>,
}

impl<T, S: Score> Alignment<T, S> {
    pub(crate) fn new(
        score: S,
        aligned1: Vec<Aligned<T>>,
        aligned2: Vec<Aligned<T>>,
        seq1: Range<usize>,
        seq2: Range<usize>,
    ) -> Self {
        debug_assert_eq!(aligned1.len(), aligned2.len());
        debug_assert_eq!(
            aligned1.iter().filter(|x| !x.is_gap()).count(),
            seq1.len()
        );
        debug_assert_eq!(
            aligned2.iter().filter(|x| !x.is_gap()).count(),
            seq2.len()
        );
        Self {
            score,
            aligned1,
            aligned2,
            seq1,
            seq2,
        }
    }

    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.aligned1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned1.is_empty()
    }

    /// Iterates over the alignment columns.
    pub fn columns(&self) -> impl Iterator<Item = (&Aligned<T>, &Aligned<T>)> + '_ {
        self.aligned1.iter().zip(self.aligned2.iter())
    }

    /// Both aligned sequences with every gap replaced by the given placeholder.
    pub fn with_placeholder(&self, gap: T) -> (Vec<T>, Vec<T>)
    where
        T: Clone,
    {
        let fill = |aligned: &[Aligned<T>]| -> Vec<T> {
            aligned
                .iter()
                .map(|x| match x {
                    Aligned::Symbol(x) => x.clone(),
                    Aligned::Gap => gap.clone(),
                })
                .collect()
        };
        (fill(&self.aligned1[..]), fill(&self.aligned2[..]))
    }

    fn ops<'a, E: Identical<T>>(&'a self, equiv: &'a E) -> impl Iterator<Item = Op> + 'a {
        self.columns().filter_map(|column| match column {
            (Aligned::Symbol(a), Aligned::Symbol(b)) => Some(if equiv.identical(a, b) {
                Op::Match
            } else {
                Op::Mismatch
            }),
            (Aligned::Gap, Aligned::Symbol(_)) => Some(Op::GapFirst),
            (Aligned::Symbol(_), Aligned::Gap) => Some(Op::GapSecond),
            (Aligned::Gap, Aligned::Gap) => {
                debug_assert!(false, "Alignment column made of two gaps");
                None
            }
        })
    }

    /// Run-length encoded alignment columns, matches are classified with the given equality.
    pub fn steps<L: PrimUInt, E: Identical<T>>(&self, equiv: &E) -> Vec<Step<L>> {
        let mut steps: Vec<Step<L>> = self.ops(equiv).map(Step::unit).collect();
        Step::collapse(&mut steps);
        steps
    }

    /// CIGAR-like representation of the alignment, e.g. `3=1X2v`.
    pub fn rle<E: Identical<T>>(&self, equiv: &E) -> String {
        Step::rle_string(self.steps::<usize, E>(equiv).iter())
    }
}
