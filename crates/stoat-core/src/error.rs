//! Shim error types

use thiserror::Error;

/// Errors raised by shim operations.
///
/// Every error is raised at the point of detection and propagates to the
/// immediate caller; there is no internal recovery anywhere because every
/// primitive performs at most one logical operation.
#[derive(Debug, Error)]
pub enum ShimError {
    /// A required callback argument is not invocable
    #[error("TypeError: {primitive}: callback is not callable")]
    InvalidCallback {
        /// Name of the primitive that rejected the callback
        primitive: &'static str,
    },

    /// Reduction requested with no seed on a sequence with no present elements
    #[error("TypeError: reduce of empty sequence with no initial value")]
    EmptySequenceNoInitialValue,

    /// A reflection operation received a non-object where one was required
    #[error("TypeError: {primitive}: {found} is not an Object")]
    NotAnObject {
        /// Name of the primitive that rejected the value
        primitive: &'static str,
        /// Type name of the offending value
        found: &'static str,
    },

    /// A function adapter was invoked on a non-invocable target
    #[error("TypeError: {primitive}: {found} is not callable")]
    NotCallable {
        /// Name of the primitive that rejected the target
        primitive: &'static str,
        /// Type name of the offending value
        found: &'static str,
    },

    /// The date formatter received a non-finite time value
    #[error("RangeError: toISOString called on non-finite time value")]
    InvalidTemporalValue,

    /// General type error (malformed op arguments)
    #[error("TypeError: {0}")]
    TypeError(String),

    /// General range error
    #[error("RangeError: {0}")]
    RangeError(String),
}

impl ShimError {
    /// Create a general type error
    pub fn type_error(msg: impl Into<String>) -> Self {
        Self::TypeError(msg.into())
    }

    /// Create a general range error
    pub fn range_error(msg: impl Into<String>) -> Self {
        Self::RangeError(msg.into())
    }
}

// Allows op plumbing to use ? with .ok_or("...") style errors
impl From<String> for ShimError {
    fn from(s: String) -> Self {
        ShimError::type_error(s)
    }
}

impl From<&str> for ShimError {
    fn from(s: &str) -> Self {
        ShimError::type_error(s)
    }
}

/// Result type for shim operations
pub type ShimResult<T> = std::result::Result<T, ShimError>;
