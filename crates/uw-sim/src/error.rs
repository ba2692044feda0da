use uw_channel::ChannelError;
use uw_core::NodeId;
use uw_mobility::MobilityError;
use uw_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("node {0} has no device on the delivery channel; cannot arm its transmitter")]
    ChannelUnavailable(NodeId),

    #[error("node {0} is not a sensor")]
    NotASensor(NodeId),

    #[error("scheduler error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("mobility error: {0}")]
    Mobility(#[from] MobilityError),

    #[error("channel configuration error: {0}")]
    Channel(#[from] ChannelError),

    #[error("observer failed: {0}")]
    Observer(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type SimResult<T> = Result<T, SimError>;
