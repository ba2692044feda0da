use uw_core::SimTime;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("cannot schedule at {at}: clock is already at {now}")]
    InPast { at: SimTime, now: SimTime },

    #[error("transmit interval must be positive")]
    ZeroInterval,

    #[error("timer is already armed")]
    AlreadyArmed,

    #[error("timer is not armed")]
    NotArmed,
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
