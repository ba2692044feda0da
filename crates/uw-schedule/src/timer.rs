//! `TxTimer`: the per-sensor periodic transmit timer.

use std::time::Duration;

use crate::{EventId, EventQueue, ScheduleError, ScheduleResult};

/// Lifecycle of a transmit timer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum TimerState {
    /// Not sending; no tick pending.
    #[default]
    Idle,
    /// Periodic sending active; `pending` is the next tick.
    Armed { pending: EventId },
}

/// Fixed-period timer that owns at most one pending tick in an
/// [`EventQueue`].
///
/// The timer is generic over the queue's event type so the caller decides
/// what a tick looks like.
#[derive(Clone, Debug)]
pub struct TxTimer {
    interval: Duration,
    state:    TimerState,
}

impl TxTimer {
    pub fn new(interval: Duration) -> ScheduleResult<Self> {
        if interval.is_zero() {
            return Err(ScheduleError::ZeroInterval);
        }
        Ok(Self { interval, state: TimerState::Idle })
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[inline]
    pub fn state(&self) -> TimerState {
        self.state
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        matches!(self.state, TimerState::Armed { .. })
    }

    /// Initial jitter for a uniform sample `unit` in `[0, 1)`: a delay in
    /// `[0, interval)`.
    pub fn jitter(&self, unit: f64) -> Duration {
        self.interval.mul_f64(unit.clamp(0.0, 1.0))
    }

    /// IDLE → ARMED.  Schedules the first tick `first_delay` from now.
    pub fn arm<E>(
        &mut self,
        queue:       &mut EventQueue<E>,
        first_delay: Duration,
        tick:        E,
    ) -> ScheduleResult<EventId> {
        if self.is_armed() {
            return Err(ScheduleError::AlreadyArmed);
        }
        let pending = queue.schedule_in(first_delay, tick);
        self.state = TimerState::Armed { pending };
        Ok(pending)
    }

    /// Called when the pending tick fires: schedules the next tick exactly
    /// one interval after the current time.
    ///
    /// Returns `NotArmed` for a tick that no longer belongs to this timer.
    pub fn rearm<E>(&mut self, queue: &mut EventQueue<E>, tick: E) -> ScheduleResult<EventId> {
        if !self.is_armed() {
            return Err(ScheduleError::NotArmed);
        }
        let pending = queue.schedule_in(self.interval, tick);
        self.state = TimerState::Armed { pending };
        Ok(pending)
    }

    /// ARMED → IDLE.  Cancels the pending tick.  Returns `true` if a pending
    /// tick was removed from the queue.
    pub fn disarm<E>(&mut self, queue: &mut EventQueue<E>) -> bool {
        match std::mem::take(&mut self.state) {
            TimerState::Armed { pending } => queue.cancel(pending).is_some(),
            TimerState::Idle => false,
        }
    }
}
