//! Simulation time model.
//!
//! # Design
//!
//! Simulated time is a monotonically increasing nanosecond counter since the
//! simulation epoch, held in `SimTime`.  Durations between instants are plain
//! `std::time::Duration`s.
//!
//! Using an integer nanosecond count as the canonical unit means event
//! ordering is exact (no floating-point ties) and matches the resolution of
//! the send timestamp carried in the wire envelope.  Seconds as `f64` are
//! only produced at the edges: CLI input and dataset output.

use std::fmt;
use std::ops::{Add, Sub};
use std::time::Duration;

use crate::{UwError, UwResult};

const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// An absolute simulated instant, in nanoseconds since the simulation epoch.
///
/// `u64` nanoseconds covers ~584 years of simulated time.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    #[inline]
    pub const fn from_nanos(nanos: u64) -> SimTime {
        SimTime(nanos)
    }

    #[inline]
    pub const fn from_secs(secs: u64) -> SimTime {
        SimTime(secs * 1_000_000_000)
    }

    /// Convert fractional seconds, rejecting negative, NaN, and overflowing
    /// values.
    pub fn try_from_secs_f64(secs: f64) -> UwResult<SimTime> {
        if !secs.is_finite() || secs < 0.0 || secs * NANOS_PER_SEC >= u64::MAX as f64 {
            return Err(UwError::TimeRange(secs));
        }
        Ok(SimTime((secs * NANOS_PER_SEC).round() as u64))
    }

    #[inline]
    pub const fn as_nanos(self) -> u64 {
        self.0
    }

    /// Seconds since the epoch, as written to the dataset.
    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / NANOS_PER_SEC
    }

    /// Time elapsed from `earlier` to `self`; zero if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: SimTime) -> Duration {
        Duration::from_nanos(self.0.saturating_sub(earlier.0))
    }
}

impl Add<Duration> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: Duration) -> SimTime {
        SimTime(self.0.saturating_add(rhs.as_nanos().min(u64::MAX as u128) as u64))
    }
}

impl Sub for SimTime {
    type Output = Duration;
    #[inline]
    fn sub(self, rhs: SimTime) -> Duration {
        self.since(rhs)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}s", self.as_secs_f64())
    }
}
