use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ChannelError {
    #[error("channel parameter `{name}` is invalid: {value}")]
    Invalid { name: &'static str, value: f64 },
}

pub type ChannelResult<T> = Result<T, ChannelError>;
