//! Deterministic per-node and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each node gets its own independent `SmallRng` seeded by:
//!
//!   seed = stream_seed XOR (node_id * MIXING_CONSTANT)
//!
//! where `stream_seed` combines the user's seed with the run number.  The
//! mixing constant is the 64-bit fractional part of the golden ratio, which
//! spreads consecutive node IDs uniformly across the seed space.  This means:
//!
//! - Nodes never share RNG state, so the order in which events for
//!   different nodes are dispatched does not change any node's draws.
//! - Adding sensors at the end of the list does not disturb the draws of
//!   existing sensors.
//! - The same (seed, run) pair always reproduces the same dataset.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::NodeId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Combine a master seed and a run (substream) number into one seed.
#[inline]
pub fn stream_seed(seed: u64, run: u64) -> u64 {
    seed ^ run.wrapping_add(1).wrapping_mul(MIXING_CONSTANT).rotate_left(17)
}

// ── NodeRng ───────────────────────────────────────────────────────────────────

/// Per-node deterministic RNG.
///
/// Drives the node's first-send jitter and its mobility draws.
#[derive(Clone, Debug)]
pub struct NodeRng(SmallRng);

impl NodeRng {
    /// Seed deterministically from the run's stream seed and a node ID.
    pub fn new(stream_seed: u64, node: NodeId) -> Self {
        let seed = stream_seed ^ (node.0 as u64).wrapping_mul(MIXING_CONSTANT);
        NodeRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform sample in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for shared concerns (MAC backoff, channel loss).
///
/// Only ever touched from the single-threaded event loop.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform sample in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
