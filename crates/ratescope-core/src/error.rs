//! Error types for the Ratescope library.
//!
//! Two failure families matter to callers: [`ScopeError::InputError`] is fatal
//! at startup (bad rate history, impossible calendar) and
//! [`ScopeError::RangeError`] is recoverable by re-clamping the requested
//! index range and retrying.

use thiserror::Error;

/// A specialized Result type for Ratescope operations.
pub type ScopeResult<T> = Result<T, ScopeError>;

/// The main error type for Ratescope operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScopeError {
    /// Error in date parsing or an invalid calendar date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Malformed or empty rate history, or an impossible build request.
    #[error("Input error: {reason}")]
    InputError {
        /// Description of what is wrong with the input.
        reason: String,
    },

    /// Index range outside the series or inverted.
    #[error("Range error: [{start}, {end}] is not a valid range for a series of length {len}")]
    RangeError {
        /// Requested start index.
        start: usize,
        /// Requested end index (inclusive).
        end: usize,
        /// Length of the series the range was applied to.
        len: usize,
    },
}

impl ScopeError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an input error.
    #[must_use]
    pub fn input(reason: impl Into<String>) -> Self {
        Self::InputError {
            reason: reason.into(),
        }
    }

    /// Creates a range error.
    #[must_use]
    pub fn range(start: usize, end: usize, len: usize) -> Self {
        Self::RangeError { start, end, len }
    }

    /// Returns true for errors the caller can recover from by adjusting the request.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::RangeError { .. })
    }
}

/// Checks that `start..=end` addresses a series of length `len`.
pub fn check_range(start: usize, end: usize, len: usize) -> ScopeResult<()> {
    if start > end || end >= len {
        return Err(ScopeError::range(start, end, len));
    }
    Ok(())
}
