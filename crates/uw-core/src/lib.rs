//! `uw-core`: foundational types for the `uwsn-ids` dataset generator.
//!
//! This crate is a dependency of every other `uw-*` crate.  It has no `uw-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `NodeId`, `FrameId`                                   |
//! | [`geo`]     | `Position` (3-D Cartesian, metres)                    |
//! | [`time`]    | `SimTime` (nanosecond simulated clock)                |
//! | [`rng`]     | `NodeRng` (per-node), `SimRng` (global)               |
//! | [`error`]   | `UwError`, `UwResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{UwError, UwResult};
pub use geo::Position;
pub use ids::{FrameId, NodeId};
pub use rng::{NodeRng, SimRng, stream_seed};
pub use time::SimTime;
