//! Error types for boat-road-gen.

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Pattern search error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Requested heading count outside {-1} ∪ [1, 256]
    #[error("heading count must be -1 or in [1, 256], got {0}")]
    InvalidHeadingCount(i32),

    /// Score tuples (or report rows) of unequal arity
    #[error("expected arity {expected}, got {got}")]
    ArityMismatch {
        /// Arity of the first tuple
        expected: usize,
        /// Arity of the offending tuple
        got: usize,
    },

    /// Too few points to define a direction
    #[error("a pattern needs at least 2 points, got {0}")]
    InsufficientPoints(usize),

    /// Scalar division or floor-division by zero
    #[error("division by zero")]
    DivisionByZero,

    /// A zero-length vector has no direction to face or project onto
    #[error("zero-length vector has no direction")]
    ZeroVector,
}
