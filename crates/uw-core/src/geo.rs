//! 3-D Cartesian position type.
//!
//! Coordinates are metres in a local frame: `x`/`y` span the horizontal
//! deployment area and `z` is height above the seabed.  `f64` is used
//! throughout because positions travel on the wire as IEEE-754 doubles.

use std::ops::{Add, Sub};

/// A point (or displacement) in the deployment volume.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Straight-line distance in metres.
    pub fn distance(self, other: Position) -> f64 {
        let d = other - self;
        (d.x * d.x + d.y * d.y + d.z * d.z).sqrt()
    }

    /// Linear interpolation: `t = 0` gives `self`, `t = 1` gives `to`.
    #[inline]
    pub fn lerp(self, to: Position, t: f64) -> Position {
        Position::new(
            self.x + (to.x - self.x) * t,
            self.y + (to.y - self.y) * t,
            self.z + (to.z - self.z) * t,
        )
    }
}

impl Add for Position {
    type Output = Position;
    #[inline]
    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Position {
    type Output = Position;
    #[inline]
    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}
