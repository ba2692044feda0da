//! Channel parameters.

use std::time::Duration;

use crate::{ChannelError, ChannelResult};

/// Physical and MAC parameters of the acoustic channel.
///
/// `Default` holds the reference deployment: 1500 m range at a sound speed
/// of 1500 m/s, 20 W transmit power, 25 kHz carrier, 10 kbit/s, and ALOHA
/// backoff up to 1.5 s with no acknowledgements.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelConfig {
    /// Speed of sound in water, m/s.
    pub sound_speed:      f64,
    /// Maximum distance at which a frame can be received, m.
    pub range:            f64,
    /// Transmit power, watts.
    pub tx_power_w:       f64,
    /// Spreading factor `k` (1 cylindrical, 1.5 practical, 2 spherical).
    pub spreading:        f64,
    /// Carrier frequency, kHz (drives Thorp absorption).
    pub frequency_khz:    f64,
    /// Modem bit rate, bits per second.
    pub bit_rate:         f64,
    /// Upper bound of the uniform MAC backoff before each transmission.
    pub max_backoff:      Duration,
    /// Independent per-frame loss probability on top of range and
    /// collision losses.
    pub loss_probability: f64,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            sound_speed:      1500.0,
            range:            1500.0,
            tx_power_w:       20.0,
            spreading:        1.5,
            frequency_khz:    25.0,
            bit_rate:         10_000.0,
            max_backoff:      Duration::from_millis(1500),
            loss_probability: 0.0,
        }
    }
}

impl ChannelConfig {
    pub fn validate(&self) -> ChannelResult<()> {
        let positive = [
            ("sound_speed", self.sound_speed),
            ("range", self.range),
            ("tx_power_w", self.tx_power_w),
            ("frequency_khz", self.frequency_khz),
            ("bit_rate", self.bit_rate),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChannelError::Invalid { name, value });
            }
        }
        if !self.spreading.is_finite() || self.spreading < 0.0 {
            return Err(ChannelError::Invalid { name: "spreading", value: self.spreading });
        }
        if !(0.0..=1.0).contains(&self.loss_probability) {
            return Err(ChannelError::Invalid {
                name:  "loss_probability",
                value: self.loss_probability,
            });
        }
        Ok(())
    }

    /// Time on air for a frame of `bytes` bytes.
    pub fn airtime(&self, bytes: usize) -> Duration {
        Duration::from_secs_f64(bytes as f64 * 8.0 / self.bit_rate)
    }

    /// One-way propagation delay over `distance` metres.
    pub fn propagation_delay(&self, distance: f64) -> Duration {
        Duration::from_secs_f64(distance.max(0.0) / self.sound_speed)
    }
}
