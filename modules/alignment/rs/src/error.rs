use derive_more::{Display, Error};

/// Error kinds reported before any DP matrix is allocated.
///
/// They are returned wrapped into an [`eyre::Report`], use `report.downcast_ref::<Error>()` to
/// inspect the kind.
#[derive(Clone, PartialEq, Eq, Debug, Display, Error)]
#[non_exhaustive]
pub enum Error {
    /// Rejected configuration, e.g. a negative or NaN edit cost.
    #[display("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
    /// The algorithm requires sequences of equal length.
    #[display("Sequences must have equal lengths, got {seq1} and {seq2}")]
    LengthMismatch { seq1: usize, seq2: usize },
}
