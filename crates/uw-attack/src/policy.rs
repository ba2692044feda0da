//! The attack policy: true position in, claimed position out.

use uw_core::{Position, SimTime};

use crate::{AttackConfig, AttackError, AttackKind, AttackResult};

/// Reference jump displacement: +500 m on x and y.
pub const DEFAULT_JUMP_OFFSET: Position = Position::new(500.0, 500.0, 0.0);

/// Reference drift speed in metres per simulated second.
pub const DEFAULT_DRIFT_SPEED: f64 = 10.0;

/// What a node puts in its envelope for one tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Report {
    pub position: Position,
    pub anomaly:  bool,
}

impl Report {
    #[inline]
    pub fn truthful(position: Position) -> Self {
        Self { position, anomaly: false }
    }
}

/// Shared attack constants.  One instance serves every node; per-node
/// differences live in [`AttackConfig`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AttackPolicy {
    jump_offset: Position,
    drift_speed: f64,
}

impl Default for AttackPolicy {
    fn default() -> Self {
        Self { jump_offset: DEFAULT_JUMP_OFFSET, drift_speed: DEFAULT_DRIFT_SPEED }
    }
}

impl AttackPolicy {
    /// Build a policy, rejecting non-finite parameters.
    pub fn new(jump_offset: Position, drift_speed: f64) -> AttackResult<Self> {
        for (name, value) in [
            ("jump_offset.x", jump_offset.x),
            ("jump_offset.y", jump_offset.y),
            ("jump_offset.z", jump_offset.z),
            ("drift_speed", drift_speed),
        ] {
            if !value.is_finite() {
                return Err(AttackError::NonFinite { name, value });
            }
        }
        Ok(Self { jump_offset, drift_speed })
    }

    pub fn jump_offset(&self) -> Position {
        self.jump_offset
    }

    pub fn drift_speed(&self) -> f64 {
        self.drift_speed
    }

    /// Accumulated x-offset of a drift attack at `now`.  Zero before
    /// activation.
    pub fn drift_offset(&self, activation: SimTime, now: SimTime) -> f64 {
        if now < activation {
            return 0.0;
        }
        self.drift_speed * now.since(activation).as_secs_f64()
    }

    /// Compute the claimed position for a node whose true position at `now`
    /// is `truth`.
    pub fn report(&self, truth: Position, now: SimTime, attack: Option<&AttackConfig>) -> Report {
        let Some(cfg) = attack.filter(|cfg| cfg.is_active(now)) else {
            return Report::truthful(truth);
        };

        let position = match cfg.kind {
            AttackKind::None  => return Report::truthful(truth),
            AttackKind::Jump  => truth + self.jump_offset,
            AttackKind::Drift => Position {
                x: truth.x + self.drift_offset(cfg.activation, now),
                ..truth
            },
        };
        Report { position, anomaly: true }
    }
}
