//! `uw-sim`: discrete-event engine for the uwsn-ids dataset generator.
//!
//! # Event flow
//!
//! ```text
//! Start(n) ──arm(jitter)──▶ Tick(n) ──every interval──▶ Tick(n) … Stop(n)
//!                              │
//!                 truth ─▶ attack policy ─▶ envelope ─▶ backoff
//!                                                          │
//!                                                     TxStart(frame)
//!                                   out of range / lost ◀──┤
//!                                                          ▼
//!                                           RxStart ──airtime──▶ RxEnd
//!                                                                  │
//!                                    collided / undecodable ◀──────┤
//!                                                                  ▼
//!                                                  correlate ─▶ SimObserver
//! ```
//!
//! Node 0 is the sink and never sends.  Sensors are `1..=sensor_count`.
//! The loop halts at `app_stop + drain`; frames still in flight then are
//! simply never recorded.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use uw_channel::ChannelConfig;
//! use uw_mobility::WaypointConfig;
//! use uw_sim::{NoopObserver, ScenarioConfig, SimBuilder, reference_world};
//!
//! let config = ScenarioConfig::default();
//! let (medium, oracle) = reference_world(&config, ChannelConfig::default(), WaypointConfig::default())?;
//! let mut sim = SimBuilder::new(config, medium, oracle).build()?;
//! let stats = sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod config;
pub mod correlator;
pub mod error;
pub mod node;
pub mod observer;
pub mod sim;


pub use builder::{SimBuilder, reference_world};
pub use config::ScenarioConfig;
pub use correlator::{ReceptionRecord, correlate};
pub use error::{SimError, SimResult};
pub use node::{Event, Node, Role, SensorState};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, SimStats};
