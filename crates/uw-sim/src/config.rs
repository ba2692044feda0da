//! Scenario-level parameters.

use std::time::Duration;

use uw_attack::AttackKind;
use uw_core::{Position, SimTime};

use crate::{SimError, SimResult};

/// Everything that shapes one run apart from the channel and mobility
/// parameters.
///
/// `Default` is the reference scenario: 30 sensors sending every 30 s from
/// t = 1 s to t = 2000 s, five attackers activating at 500 s, sink moored at
/// (500, 500, 950).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioConfig {
    /// Number of sensors.  Sensors get ids `1..=sensor_count`; the sink is
    /// always node 0.
    pub sensor_count:    u32,
    /// Master RNG seed.
    pub seed:            u64,
    /// Run (substream) number.
    pub run:             u64,
    /// Sensors start sending at this instant.
    pub app_start:       SimTime,
    /// Sensors stop at this instant.  Pending ticks are cancelled.
    pub app_stop:        SimTime,
    /// Extra time after `app_stop` for in-flight frames to land.
    pub drain:           Duration,
    /// Send period.
    pub interval:        Duration,
    /// Application bytes carried in each frame in addition to the envelope.
    pub app_payload:     usize,
    pub attack_kind:     AttackKind,
    /// Sensors `1..=attacker_count` carry the attack.
    pub attacker_count:  u32,
    pub attack_start:    SimTime,
    pub sink_position:   Position,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            sensor_count:   30,
            seed:           1,
            run:            0,
            app_start:      SimTime::from_secs(1),
            app_stop:       SimTime::from_secs(2000),
            drain:          Duration::from_secs(2),
            interval:       Duration::from_secs(30),
            app_payload:    100,
            attack_kind:    AttackKind::None,
            attacker_count: 5,
            attack_start:   SimTime::from_secs(500),
            sink_position:  Position::new(500.0, 500.0, 950.0),
        }
    }
}

impl ScenarioConfig {
    /// Instant at which the event loop halts.
    #[inline]
    pub fn halt_time(&self) -> SimTime {
        self.app_stop + self.drain
    }

    /// Total number of nodes, sink included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.sensor_count as usize + 1
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.sensor_count == 0 {
            return Err(SimError::Config("sensor_count must be at least 1".into()));
        }
        if self.interval.is_zero() {
            return Err(SimError::Config("interval must be positive".into()));
        }
        if self.attacker_count > self.sensor_count {
            return Err(SimError::Config(format!(
                "attacker_count ({}) exceeds sensor_count ({})",
                self.attacker_count, self.sensor_count
            )));
        }
        if self.app_stop <= self.app_start {
            return Err(SimError::Config(format!(
                "app_stop ({}) must be after app_start ({})",
                self.app_stop, self.app_start
            )));
        }
        Ok(())
    }
}
