//! `Envelope` and its fixed-width big-endian encoding.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use uw_core::{NodeId, Position, SimTime};

use crate::{EnvelopeError, EnvelopeResult};

/// Serialized size of every envelope, in bytes.
pub const ENVELOPE_LEN: usize = 4 + 8 + 3 * 8 + 4;

/// Claimed state of one transmission.
///
/// Built fresh at each transmit tick, encoded immediately, and only decoded
/// again at the sink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub node_id:   NodeId,
    pub send_time: SimTime,
    /// The position the node *reports*; may differ from its true position.
    pub reported:  Position,
    pub anomaly:   bool,
}

impl Envelope {
    pub fn new(node_id: NodeId, send_time: SimTime, reported: Position, anomaly: bool) -> Self {
        Self { node_id, send_time, reported, anomaly }
    }

    /// The anomaly label in its wire form.
    #[inline]
    pub fn anomaly_flag(&self) -> i32 {
        i32::from(self.anomaly)
    }

    /// Append the wire form to `buf`.  Always writes exactly
    /// [`ENVELOPE_LEN`] bytes.
    pub fn encode_into(&self, buf: &mut impl BufMut) {
        buf.put_u32(self.node_id.0);
        buf.put_u64(self.send_time.as_nanos());
        buf.put_f64(self.reported.x);
        buf.put_f64(self.reported.y);
        buf.put_f64(self.reported.z);
        buf.put_i32(self.anomaly_flag());
    }

    /// Encode into a fresh, frozen buffer.
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(ENVELOPE_LEN);
        self.encode_into(&mut buf);
        buf.freeze()
    }

    /// Decode an envelope.  `bytes` must be exactly [`ENVELOPE_LEN`] long.
    pub fn decode(mut bytes: &[u8]) -> EnvelopeResult<Envelope> {
        if bytes.len() != ENVELOPE_LEN {
            return Err(EnvelopeError::Length { expected: ENVELOPE_LEN, got: bytes.len() });
        }
        let node_id   = NodeId(bytes.get_u32());
        let send_time = SimTime::from_nanos(bytes.get_u64());
        let reported  = Position::new(bytes.get_f64(), bytes.get_f64(), bytes.get_f64());
        let anomaly   = match bytes.get_i32() {
            0 => false,
            1 => true,
            other => return Err(EnvelopeError::AnomalyFlag(other)),
        };
        Ok(Envelope { node_id, send_time, reported, anomaly })
    }
}
