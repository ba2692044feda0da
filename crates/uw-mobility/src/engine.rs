//! Position oracle: fixed placement plus lazily advanced random waypoint.

use std::time::Duration;

use uw_core::{NodeId, NodeRng, Position, SimTime};

use crate::{Leg, MobilityError, MobilityResult, MobilityStore, NodeMobility};

/// Answers "where is `node` at `now`?".
///
/// Takes `&mut self` because movement models may generate state lazily.
pub trait PositionOracle {
    fn position(&mut self, node: NodeId, now: SimTime) -> MobilityResult<Position>;
}

/// Axis-aligned deployment box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: Position,
    pub max: Position,
}

impl Bounds {
    pub const fn new(min: Position, max: Position) -> Self {
        Self { min, max }
    }

    /// Uniform random point inside the box.
    pub fn sample(&self, rng: &mut NodeRng) -> Position {
        Position::new(
            rng.gen_range(self.min.x..=self.max.x),
            rng.gen_range(self.min.y..=self.max.y),
            rng.gen_range(self.min.z..=self.max.z),
        )
    }

    pub fn contains(&self, p: Position) -> bool {
        (self.min.x..=self.max.x).contains(&p.x)
            && (self.min.y..=self.max.y).contains(&p.y)
            && (self.min.z..=self.max.z).contains(&p.z)
    }

    fn is_degenerate(&self) -> bool {
        self.min == self.max
    }
}

/// Random-waypoint parameters.  `Default` holds the reference deployment:
/// a 1000 × 1000 × 900 m box, speeds 0.5–2 m/s, 5 s pauses.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaypointConfig {
    pub bounds:    Bounds,
    pub speed_min: f64,
    pub speed_max: f64,
    pub pause:     Duration,
}

impl Default for WaypointConfig {
    fn default() -> Self {
        Self {
            bounds:    Bounds::new(Position::ORIGIN, Position::new(1000.0, 1000.0, 900.0)),
            speed_min: 0.5,
            speed_max: 2.0,
            pause:     Duration::from_secs(5),
        }
    }
}

impl WaypointConfig {
    pub fn validate(&self) -> MobilityResult<()> {
        let Bounds { min, max } = self.bounds;
        let coords = [min.x, min.y, min.z, max.x, max.y, max.z];
        if coords.iter().any(|c| !c.is_finite()) || min.x > max.x || min.y > max.y || min.z > max.z {
            return Err(MobilityError::Config(format!("bad bounds {min} .. {max}")));
        }
        if !(self.speed_min.is_finite() && self.speed_max.is_finite())
            || self.speed_min <= 0.0
            || self.speed_min > self.speed_max
        {
            return Err(MobilityError::Config(format!(
                "speed range [{}, {}] must be positive and ordered",
                self.speed_min, self.speed_max
            )));
        }
        if self.pause.is_zero() && self.bounds.is_degenerate() {
            // Every leg would take zero time and the node could never advance.
            return Err(MobilityError::Config("zero pause in a zero-volume box".into()));
        }
        Ok(())
    }

    /// Draw the next leg departing `from` at `depart`.
    pub fn next_leg(&self, from: Position, depart: SimTime, rng: &mut NodeRng) -> Leg {
        let to = self.bounds.sample(rng);
        let speed = rng.gen_range(self.speed_min..=self.speed_max);
        Leg::walk(from, to, depart, speed, self.pause)
    }
}

/// Owns every node's mobility state and implements [`PositionOracle`].
pub struct MobilityEngine {
    pub config: WaypointConfig,
    pub store:  MobilityStore,
}

impl MobilityEngine {
    /// Create an engine with no nodes placed.  Validates `config`.
    pub fn new(config: WaypointConfig, node_count: usize) -> MobilityResult<Self> {
        config.validate()?;
        Ok(Self { config, store: MobilityStore::new(node_count) })
    }

    /// Engine where every node is pinned at the given position, indexed by
    /// `NodeId`.
    pub fn fixed(positions: impl IntoIterator<Item = Position>) -> Self {
        let mut store = MobilityStore::default();
        for (i, p) in positions.into_iter().enumerate() {
            store.set(NodeId(i as u32), NodeMobility::Fixed(p));
        }
        Self { config: WaypointConfig::default(), store }
    }

    /// Pin `node` at `at`.
    pub fn place_fixed(&mut self, node: NodeId, at: Position) {
        self.store.set(node, NodeMobility::Fixed(at));
    }

    /// Start `node` on a random walk at `start`, drawing its initial
    /// position and every later leg from `rng`.  Returns the initial position.
    pub fn place_waypoint(&mut self, node: NodeId, mut rng: NodeRng, start: SimTime) -> Position {
        let origin = self.config.bounds.sample(&mut rng);
        let leg = self.config.next_leg(origin, start, &mut rng);
        self.store.set(node, NodeMobility::Waypoint { leg, rng });
        origin
    }

    /// The current leg of a mobile node (for inspection and tests).
    pub fn leg(&self, node: NodeId) -> Option<&Leg> {
        match self.store.get(node) {
            Some(NodeMobility::Waypoint { leg, .. }) => Some(leg),
            _ => None,
        }
    }
}

impl PositionOracle for MobilityEngine {
    fn position(&mut self, node: NodeId, now: SimTime) -> MobilityResult<Position> {
        let cfg = &self.config;
        match self.store.get_mut(node) {
            None => Err(MobilityError::NotPlaced(node)),
            Some(NodeMobility::Fixed(p)) => Ok(*p),
            Some(NodeMobility::Waypoint { leg, rng }) => {
                while now >= leg.resume {
                    *leg = cfg.next_leg(leg.to, leg.resume, rng);
                }
                Ok(leg.position(now))
            }
        }
    }
}
