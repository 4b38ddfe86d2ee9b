/// `Op` represents a single column of a pairwise alignment.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Op {
    /// A gap in the first sequence, i.e. a symbol consumed from the second sequence only (v)
    GapFirst,
    /// A gap in the second sequence, i.e. a symbol consumed from the first sequence only (^)
    GapSecond,
    /// Identical symbols under the equality used to classify the column (=)
    Match,
    /// Aligned, but different symbols (X)
    Mismatch,
}

impl Op {
    /// Returns the symbol representation of the operation.
    pub fn symbol(&self) -> char {
        match self {
            Op::GapFirst => 'v',
            Op::GapSecond => '^',
            Op::Match => '=',
            Op::Mismatch => 'X',
        }
    }
}
