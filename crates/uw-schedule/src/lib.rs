//! `uw-schedule`: discrete-event queue and the per-node transmit timer.
//!
//! # Crate layout
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`event_queue`] | `EventQueue<E>` (`BTreeMap<EventId, E>`), `EventId`   |
//! | [`timer`]       | `TxTimer`: IDLE / ARMED periodic send state machine   |
//! | [`error`]       | `ScheduleError`, `ScheduleResult<T>`                  |
//!
//! # Timer model (summary)
//!
//! ```text
//! IDLE ──arm(jitter)──▶ ARMED ──fire──▶ ARMED (next = now + interval)
//!   ▲                     │
//!   └──────disarm─────────┘   (pending tick cancelled, never dispatched)
//! ```
//!
//! Jitter is applied once, at arming.  After that the period is fixed.

pub mod error;
pub mod event_queue;
pub mod timer;

#[cfg(test)]
mod tests;

pub use error::{ScheduleError, ScheduleResult};
pub use event_queue::{EventId, EventQueue};
pub use timer::{TimerState, TxTimer};
