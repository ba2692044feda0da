//! Per-node attack configuration.

use std::fmt;

use uw_core::SimTime;

use crate::AttackError;

/// Which falsification pattern an attacking node follows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackKind {
    /// Report the true position.
    #[default]
    None,
    /// Constant displacement from activation onwards.
    Jump,
    /// Displacement on x growing linearly with time since activation.
    Drift,
}

impl AttackKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AttackKind::None  => "none",
            AttackKind::Jump  => "jump",
            AttackKind::Drift => "drift",
        }
    }
}

impl TryFrom<u8> for AttackKind {
    type Error = AttackError;

    /// Map the numeric run type used on the command line.
    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(AttackKind::None),
            1 => Ok(AttackKind::Jump),
            2 => Ok(AttackKind::Drift),
            other => Err(AttackError::UnknownKind(other)),
        }
    }
}

impl fmt::Display for AttackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attack settings carried by a sensor node.  Immutable once the
/// simulation starts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackConfig {
    pub enabled:    bool,
    pub kind:       AttackKind,
    /// First instant at which the attack applies (inclusive).
    pub activation: SimTime,
}

impl AttackConfig {
    /// An enabled attack of `kind` starting at `activation`.
    pub fn new(kind: AttackKind, activation: SimTime) -> Self {
        Self { enabled: true, kind, activation }
    }

    /// `true` when falsification applies at `now`.  Activation is inclusive.
    #[inline]
    pub fn is_active(&self, now: SimTime) -> bool {
        self.enabled && self.kind != AttackKind::None && now >= self.activation
    }
}
