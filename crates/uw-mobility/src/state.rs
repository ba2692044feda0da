//! One random-waypoint leg.

use std::time::Duration;

use uw_core::{Position, SimTime};

/// A straight walk from `from` to `to`, followed by a pause at `to`.
///
/// The node is at `from` at `depart`, moves at constant speed, reaches `to`
/// at `arrive`, and stays there until `resume`, when the next leg departs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub from:   Position,
    pub to:     Position,
    pub depart: SimTime,
    pub arrive: SimTime,
    pub resume: SimTime,
}

impl Leg {
    /// A leg covering `from → to` at `speed` m/s, starting at `depart`.
    pub fn walk(from: Position, to: Position, depart: SimTime, speed: f64, pause: Duration) -> Self {
        let travel = Duration::from_secs_f64(from.distance(to) / speed);
        let arrive = depart + travel;
        Self { from, to, depart, arrive, resume: arrive + pause }
    }

    /// Fraction of the walk completed at `now`, in `[0.0, 1.0]`.
    pub fn progress(&self, now: SimTime) -> f64 {
        if now >= self.arrive || self.arrive <= self.depart {
            return 1.0;
        }
        let elapsed = now.since(self.depart).as_secs_f64();
        let total   = self.arrive.since(self.depart).as_secs_f64();
        (elapsed / total).clamp(0.0, 1.0)
    }

    /// Interpolated position at `now`.
    #[inline]
    pub fn position(&self, now: SimTime) -> Position {
        self.from.lerp(self.to, self.progress(now))
    }

    /// `true` while the node is pausing at `to`.
    #[inline]
    pub fn is_paused(&self, now: SimTime) -> bool {
        now >= self.arrive && now < self.resume
    }
}
