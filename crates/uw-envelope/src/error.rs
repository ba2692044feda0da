use thiserror::Error;

/// Reasons a received byte sequence is not a valid envelope.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvelopeError {
    #[error("envelope must be {expected} bytes, got {got}")]
    Length { expected: usize, got: usize },

    #[error("anomaly flag must be 0 or 1, got {0}")]
    AnomalyFlag(i32),
}

pub type EnvelopeResult<T> = Result<T, EnvelopeError>;
