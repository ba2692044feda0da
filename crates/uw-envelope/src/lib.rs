//! `uw-envelope`: the per-packet metadata record and its wire codec.
//!
//! Every report a sensor transmits carries an [`Envelope`] alongside its
//! application payload.  The envelope holds what the transmitter *claims*:
//! its id, the time it sent the report, the position it reports, and whether
//! that position was deliberately falsified.  The sink decodes it and pairs it
//! with physical-layer evidence to build a labelled dataset row.
//!
//! # Wire layout
//!
//! Fixed size, no length prefix, all fields **big-endian** (network order):
//!
//! ```text
//! offset  size  field
//! 0       4     node_id          u32
//! 4       8     send_time        u64, nanoseconds since simulation epoch
//! 12      8     reported.x       f64 (IEEE-754 bits)
//! 20      8     reported.y       f64
//! 28      8     reported.z       f64
//! 36      4     is_anomaly       i32, 0 or 1
//! ─────────────
//! 40 bytes
//! ```

pub mod codec;
pub mod error;


pub use codec::{ENVELOPE_LEN, Envelope};
pub use error::{EnvelopeError, EnvelopeResult};
