use uw_core::NodeId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MobilityError {
    #[error("node {0} has no mobility model")]
    NotPlaced(NodeId),

    #[error("invalid waypoint configuration: {0}")]
    Config(String),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
