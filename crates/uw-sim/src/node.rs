//! The node arena and the engine's event type.

use bytes::Bytes;
use uw_attack::AttackConfig;
use uw_channel::Arrival;
use uw_core::{FrameId, NodeId, NodeRng, SimTime};
use uw_schedule::TxTimer;

/// Per-sensor sending state.
#[derive(Debug, Clone)]
pub struct SensorState {
    pub timer:  TxTimer,
    /// `None` for honest sensors.
    pub attack: Option<AttackConfig>,
    /// Drives the first-send jitter.
    pub rng:    NodeRng,
    /// Frames handed to the channel so far.
    pub sent:   u64,
    /// Set by `stop_node`; a stopped sensor is never armed again.
    pub stopped: bool,
}

#[derive(Debug, Clone)]
pub enum Role {
    Sink,
    Sensor(SensorState),
}

/// One node.  The arena is indexed by `NodeId`.
#[derive(Debug, Clone)]
pub struct Node {
    pub id:   NodeId,
    pub role: Role,
}

impl Node {
    pub fn is_sink(&self) -> bool {
        matches!(self.role, Role::Sink)
    }

    pub fn sensor(&self) -> Option<&SensorState> {
        match &self.role {
            Role::Sensor(s) => Some(s),
            Role::Sink => None,
        }
    }
}

/// Mutable access to a sensor's state inside the arena.
///
/// Free function so callers can keep other engine fields borrowed.
pub(crate) fn sensor_mut(nodes: &mut [Node], id: NodeId) -> Option<&mut SensorState> {
    match nodes.get_mut(id.index()).map(|n| &mut n.role) {
        Some(Role::Sensor(s)) => Some(s),
        _ => None,
    }
}

/// A frame between the send call and the start of transmission.
#[derive(Debug, Clone)]
pub struct Frame {
    pub id:          FrameId,
    pub sender:      NodeId,
    pub payload:     Bytes,
    pub frame_bytes: usize,
}

/// Everything the event queue can hold.
#[derive(Debug, Clone)]
pub enum Event {
    /// Sensor application start: arm the transmit timer.
    Start(NodeId),
    /// Periodic send.
    Tick(NodeId),
    /// Sensor application stop: cancel the pending tick.
    Stop(NodeId),
    /// MAC backoff elapsed; the frame goes on air.
    TxStart(Frame),
    /// First bit reaches the sink.
    RxStart { frame: FrameId, end: SimTime },
    /// Last bit reaches the sink.
    RxEnd(Arrival),
}
