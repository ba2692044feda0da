//! The `Medium` contract and the range-limited acoustic implementation.

use std::time::Duration;

use bytes::Bytes;
use rustc_hash::FxHashSet;
use uw_core::{FrameId, NodeId, Position, SimRng};

use crate::propagation::received_power_db;
use crate::{ChannelConfig, ChannelResult};

/// One frame leaving a transmitter, after MAC backoff.
#[derive(Debug, Clone)]
pub struct Transmission {
    pub frame:        FrameId,
    pub sender:       NodeId,
    /// Opaque bytes the receiver gets back (the encoded envelope).
    pub payload:      Bytes,
    /// Total size on air, payload included, in bytes.
    pub frame_bytes:  usize,
    /// True sender position at the start of transmission.
    pub sender_pos:   Position,
    pub receiver_pos: Position,
}

/// A frame that reaches the receiver, with the physical-layer evidence the
/// receiver can observe.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrival {
    pub frame:      FrameId,
    pub sender:     NodeId,
    pub payload:    Bytes,
    pub sender_pos: Position,
    /// Pure propagation delay (excludes backoff and airtime).
    pub delay:      Duration,
    /// Time the frame occupies the receiver.
    pub airtime:    Duration,
    /// Received power, dB re 1 W.
    pub signal_db:  f64,
}

/// Fate of one transmission on the link.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkOutcome {
    Arrives(Arrival),
    OutOfRange { distance: f64 },
    Lost,
}

/// What the simulation engine needs from a channel.
///
/// `send` in the engine is fire-and-forget: it asks for a `backoff`, then
/// `propagate`s the frame, and the sender is never told the outcome.
pub trait Medium {
    /// `true` if `node` has a network device attached to this medium.
    fn has_device(&self, node: NodeId) -> bool;

    /// MAC delay before the next transmission may start.
    fn backoff(&mut self) -> Duration;

    /// Decide whether and how `tx` reaches its receiver.
    fn propagate(&mut self, tx: Transmission) -> LinkOutcome;
}

/// Range-limited propagation at constant sound speed with a practical
/// spreading + Thorp absorption link budget and pure-ALOHA backoff.
pub struct RangeMedium {
    config:  ChannelConfig,
    devices: FxHashSet<NodeId>,
    rng:     SimRng,
}

impl RangeMedium {
    /// Validate `config` and build a medium with no devices attached.
    pub fn new(config: ChannelConfig, rng: SimRng) -> ChannelResult<Self> {
        config.validate()?;
        Ok(Self { config, devices: FxHashSet::default(), rng })
    }

    /// Attach a network device for `node`.
    pub fn attach(&mut self, node: NodeId) {
        self.devices.insert(node);
    }

    pub fn detach(&mut self, node: NodeId) {
        self.devices.remove(&node);
    }

    pub fn config(&self) -> &ChannelConfig {
        &self.config
    }
}

impl Medium for RangeMedium {
    fn has_device(&self, node: NodeId) -> bool {
        self.devices.contains(&node)
    }

    fn backoff(&mut self) -> Duration {
        if self.config.max_backoff.is_zero() {
            return Duration::ZERO;
        }
        self.config.max_backoff.mul_f64(self.rng.unit())
    }

    fn propagate(&mut self, tx: Transmission) -> LinkOutcome {
        let distance = tx.sender_pos.distance(tx.receiver_pos);
        if distance > self.config.range {
            return LinkOutcome::OutOfRange { distance };
        }
        if self.config.loss_probability > 0.0 && self.rng.gen_bool(self.config.loss_probability) {
            return LinkOutcome::Lost;
        }
        let cfg = &self.config;
        LinkOutcome::Arrives(Arrival {
            frame:      tx.frame,
            sender:     tx.sender,
            payload:    tx.payload,
            sender_pos: tx.sender_pos,
            delay:      cfg.propagation_delay(distance),
            airtime:    cfg.airtime(tx.frame_bytes),
            signal_db:  received_power_db(cfg.tx_power_w, distance, cfg.spreading, cfg.frequency_khz),
        })
    }
}
