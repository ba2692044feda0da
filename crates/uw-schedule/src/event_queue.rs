//! `EventQueue`: time-ordered event dispatch with cancellation.
//!
//! # Ordering
//!
//! Events are keyed by `(SimTime, seq)` where `seq` is a per-queue insertion
//! counter.  `pop` therefore yields events in non-decreasing time order, and
//! events scheduled for the same instant come out in the order they were
//! scheduled.  Callers must not rely on that tie-break for correctness.
//!
//! # Cancellation
//!
//! `cancel` removes the entry outright, so a cancelled event can never be
//! dispatched, even if it is due at the current instant.
//!
//! # Performance note
//!
//! `BTreeMap` gives O(log Q) insert, cancel, and pop where Q is the number of
//! pending events.  With one pending tick per sensor plus a handful of
//! in-flight frames, Q stays small.

use std::collections::BTreeMap;
use std::time::Duration;

use uw_core::SimTime;

use crate::{ScheduleError, ScheduleResult};

/// Handle to a scheduled event, used to cancel it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct EventId {
    at:  SimTime,
    seq: u64,
}

impl EventId {
    /// The instant the event is due.
    #[inline]
    pub fn at(self) -> SimTime {
        self.at
    }
}

/// A priority queue of events of type `E`, plus the simulation clock.
pub struct EventQueue<E> {
    inner:    BTreeMap<EventId, E>,
    next_seq: u64,
    now:      SimTime,
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self { inner: BTreeMap::new(), next_seq: 0, now: SimTime::ZERO }
    }
}

impl<E> EventQueue<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time: the due time of the last popped event.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Schedule `event` at absolute time `at`.
    ///
    /// Scheduling at the current instant is allowed; scheduling in the past
    /// is an error.
    pub fn schedule(&mut self, at: SimTime, event: E) -> ScheduleResult<EventId> {
        if at < self.now {
            return Err(ScheduleError::InPast { at, now: self.now });
        }
        let id = EventId { at, seq: self.next_seq };
        self.next_seq += 1;
        self.inner.insert(id, event);
        Ok(id)
    }

    /// Schedule `event` `delay` after the current time.
    pub fn schedule_in(&mut self, delay: Duration, event: E) -> EventId {
        let id = EventId { at: self.now + delay, seq: self.next_seq };
        self.next_seq += 1;
        self.inner.insert(id, event);
        id
    }

    /// Cancel a pending event.  Returns the event if it had not yet been
    /// dispatched or cancelled.
    pub fn cancel(&mut self, id: EventId) -> Option<E> {
        self.inner.remove(&id)
    }

    /// `true` if `id` is still waiting to be dispatched.
    pub fn is_pending(&self, id: EventId) -> bool {
        self.inner.contains_key(&id)
    }

    /// Remove and return the earliest event, advancing the clock to its due
    /// time.
    pub fn pop(&mut self) -> Option<(SimTime, E)> {
        let (id, event) = self.inner.pop_first()?;
        self.now = id.at;
        Some((id.at, event))
    }

    /// Due time of the earliest pending event, or `None` if empty.
    pub fn peek_time(&self) -> Option<SimTime> {
        self.inner.keys().next().map(|id| id.at)
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Drop every pending event without dispatching it.
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}
