//! Shared error type.

use thiserror::Error;

/// Errors raised by `uw-core` conversions.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum UwError {
    #[error("time value out of range: {0} s")]
    TimeRange(f64),
}

/// Shorthand result type for `uw-core`.
pub type UwResult<T> = Result<T, UwError>;
