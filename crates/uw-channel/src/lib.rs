//! `uw-channel`: the medium between sensors and the sink.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`config`]      | `ChannelConfig` (reference acoustic parameters)             |
//! | [`propagation`] | Thorp absorption, transmission loss, received power         |
//! | [`medium`]      | `Medium` trait, `RangeMedium`, `Transmission`, `Arrival`    |
//! | [`receiver`]    | `Receiver`: overlapping receptions collide at the sink      |
//! | [`error`]       | `ChannelError`, `ChannelResult<T>`                          |
//!
//! # Frame lifecycle
//!
//! ```text
//! send ──backoff──▶ tx start ──delay──▶ rx start ──airtime──▶ rx end
//!                       │                   │                    │
//!              out of range / loss    collision marking    intact? deliver
//! ```
//!
//! Nothing here reports failures back to the sender: drops are silent and
//! only show up as missing rows in the dataset.

pub mod config;
pub mod error;
pub mod medium;
pub mod propagation;
pub mod receiver;


pub use config::ChannelConfig;
pub use error::{ChannelError, ChannelResult};
pub use medium::{Arrival, LinkOutcome, Medium, RangeMedium, Transmission};
pub use receiver::Receiver;
