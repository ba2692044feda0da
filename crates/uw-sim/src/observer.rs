//! Simulation observer trait for data collection.

use std::convert::Infallible;

use uw_core::{NodeId, SimTime};
use uw_envelope::Envelope;

use crate::{ReceptionRecord, SimStats};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] as events are
/// dispatched.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  An error returned from any callback
/// aborts the run with [`SimError::Observer`][crate::SimError::Observer].
///
/// # Example: row counter
///
/// ```rust,ignore
/// struct Counter(u64);
///
/// impl SimObserver for Counter {
///     type Error = std::convert::Infallible;
///     fn on_reception(&mut self, _r: &ReceptionRecord) -> Result<(), Self::Error> {
///         self.0 += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait SimObserver {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Called when a sensor hands a frame to the channel.
    fn on_transmit(&mut self, _node: NodeId, _envelope: &Envelope) {}

    /// Called for every frame that reaches the sink intact and decodes.
    fn on_reception(&mut self, _record: &ReceptionRecord) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called once after the loop halts.
    fn on_sim_end(&mut self, _at: SimTime, _stats: &SimStats) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {
    type Error = Infallible;
}
