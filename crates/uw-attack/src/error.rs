use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AttackError {
    #[error("unknown attack type {0} (expected 0 = none, 1 = jump, 2 = drift)")]
    UnknownKind(u8),

    #[error("attack parameter `{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}

pub type AttackResult<T> = Result<T, AttackError>;
