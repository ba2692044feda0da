//! `uw-attack`: decides what position a sensor claims at each transmit tick.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`config`]  | `AttackKind`, `AttackConfig` (per-node, immutable)       |
//! | [`policy`]  | `AttackPolicy` (shared constants), `Report`              |
//! | [`error`]   | `AttackError`, `AttackResult<T>`                         |
//!
//! # Rules
//!
//! With `now >= activation` on an enabled attacker:
//!
//! ```text
//! NONE   reported = true
//! JUMP   reported = true + jump_offset                       anomaly = 1
//! DRIFT  reported = true + (drift_speed * (now - activation), 0, 0)   anomaly = 1
//! ```
//!
//! Before activation, or for nodes with no attack configured, every rule
//! degrades to NONE.  The drift offset is recomputed from `activation` and
//! `now` on every call, so no per-node state is kept.  The jump displacement
//! is likewise applied to the fresh true position each tick and never
//! compounds.

pub mod config;
pub mod error;
pub mod policy;


pub use config::{AttackConfig, AttackKind};
pub use error::{AttackError, AttackResult};
pub use policy::{AttackPolicy, Report};
