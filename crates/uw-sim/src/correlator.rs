//! Sink-side reception correlator.
//!
//! Joins what the sender claims (the decoded envelope) with what the channel
//! observed (signal strength, delay, the sender's true position) into one
//! [`ReceptionRecord`].  Holds no state between frames.

use std::time::Duration;

use uw_core::{NodeId, Position, SimTime};
use uw_envelope::{Envelope, EnvelopeResult};

/// One delivered frame, ready for the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceptionRecord {
    pub receive_time:      SimTime,
    pub node_id:           NodeId,
    pub send_time:         SimTime,
    pub propagation_delay: Duration,
    /// Received power, dB.
    pub signal_strength:   f64,
    pub true_position:     Position,
    pub reported_position: Position,
    pub anomaly:           bool,
}

impl ReceptionRecord {
    /// Distance between the claimed and the true position.
    pub fn position_error(&self) -> f64 {
        self.reported_position.distance(self.true_position)
    }
}

/// Decode `payload` and join it with the channel's observations.
///
/// A payload that does not decode yields the envelope error; the caller
/// drops the frame.
pub fn correlate(
    payload:           &[u8],
    signal_strength:   f64,
    true_position:     Position,
    propagation_delay: Duration,
    receive_time:      SimTime,
) -> EnvelopeResult<ReceptionRecord> {
    let envelope = Envelope::decode(payload)?;
    Ok(ReceptionRecord {
        receive_time,
        node_id: envelope.node_id,
        send_time: envelope.send_time,
        propagation_delay,
        signal_strength,
        true_position,
        reported_position: envelope.reported,
        anomaly: envelope.anomaly,
    })
}
