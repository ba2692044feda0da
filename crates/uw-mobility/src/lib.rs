//! `uw-mobility`: where every node truly is at any simulated instant.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`state`]   | `Leg`: one straight waypoint leg plus its trailing pause          |
//! | [`store`]   | `MobilityStore`: per-node `NodeMobility`, indexed by `NodeId`     |
//! | [`engine`]  | `MobilityEngine`: `PositionOracle` impl, `WaypointConfig`         |
//! | [`error`]   | `MobilityError`, `MobilityResult<T>`                              |
//!
//! # Movement model (3-D random waypoint)
//!
//! 1. A mobile node starts at a uniform random point in the deployment box
//!    and immediately walks to another uniform random point at a speed drawn
//!    uniformly from `[speed_min, speed_max]`.
//! 2. On arrival it pauses for `pause`, then draws the next leg.
//! 3. `position(node, now)` interpolates linearly along the current leg.
//!    Legs are generated lazily as queries move forward in time, so queries
//!    for a node must use non-decreasing `now`.
//!
//! Fixed nodes (the sink) simply return their placement.

pub mod engine;
pub mod error;
pub mod state;
pub mod store;

#[cfg(test)]
mod tests;

pub use engine::{Bounds, MobilityEngine, PositionOracle, WaypointConfig};
pub use error::{MobilityError, MobilityResult};
pub use state::Leg;
pub use store::{MobilityStore, NodeMobility};
