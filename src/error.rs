//! Error types for table construction.

use thiserror::Error;

/// Errors that can occur when building an owned table.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplineError {
    /// The node vector is too short to define a single segment.
    #[error("{context} must have at least 2 nodes. Found: {actual}")]
    TooFewNodes {
        context: &'static str,
        actual: usize,
    },

    /// Two sequences that must be aligned differ in length.
    #[error("{context} requires {expected} entries. Found: {actual}")]
    LengthMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The node vector is not strictly increasing.
    #[cfg(feature = "monotonic_check")]
    #[error("{context} nodes must be strictly increasing; node {index} is not")]
    NonMonotonicNodes {
        context: &'static str,
        index: usize,
    },

    /// A sample that is importance sampled is negative.
    #[error("{context} value {index} is negative")]
    NegativeValue {
        context: &'static str,
        index: usize,
    },

    /// A node or sample is NaN or infinite.
    #[error("{context} entry {index} is not finite")]
    NonFiniteValue {
        context: &'static str,
        index: usize,
    },

    /// A Fourier series needs at least the constant coefficient.
    #[error("Fourier series must have at least one coefficient")]
    EmptySeries,
}

/// Result type for table construction.
pub type SplineResult<T> = Result<T, SplineError>;
