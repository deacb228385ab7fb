//! Error types for the multiplication engine.

use thiserror::Error;

/// Errors reported before any multiplication work starts.
///
/// Allocation failure and broken internal invariants are not represented
/// here: they abort the computation instead of returning.
#[derive(Debug, Error)]
pub enum StrassenError {
    /// Matrix order is zero or not a power of two.
    #[error("matrix order must be a non-zero power of two, got {0}")]
    InvalidSize(usize),

    /// A slice does not hold `size * size` elements.
    #[error("{name}: expected {size}x{size}={expected} elements, got {actual}")]
    DimensionMismatch {
        name: &'static str,
        size: usize,
        expected: usize,
        actual: usize,
    },

    /// Tunables that the engine cannot run with.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The bounded worker pool could not be created.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, StrassenError>;
