use thiserror::Error;

/// Errors raised by the partitioning engine.
///
/// Every variant is a local precondition violation detected at the API
/// boundary of the offending call. None of them are retryable, and none of
/// them leave a partition tree with broken invariants.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PartitionError {
    /// A metric was evaluated on two points of differing dimension.
    #[error("dimension mismatch: point of dimension {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// Bounds were requested for an empty index set.
    #[error("cannot compute bounds of an empty index set")]
    EmptyIndexSet,

    /// An operation requires a tree of a specific dimension.
    #[error("unsupported partition dimension {dim}, expected {expected}")]
    UnsupportedDimension { dim: usize, expected: usize },

    /// A sink write targeted a position outside the host volume.
    #[error("write target {position:?} is outside the grid volume")]
    OutOfRange { position: [i64; 3] },
}
