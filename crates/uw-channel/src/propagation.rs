//! Underwater acoustic link budget.
//!
//! Transmission loss follows the usual practical model:
//!
//! ```text
//! TL(d, f) = 10 · k · log10(d) + (d / 1000) · α(f)       [dB]
//! ```
//!
//! with `d` in metres, `k` the spreading factor, and `α(f)` Thorp's
//! absorption coefficient in dB/km for `f` in kHz.  Received power is
//! reported in dB re 1 W.

/// Thorp absorption coefficient in dB/km for a carrier of `f_khz` kHz.
pub fn thorp_absorption_db_per_km(f_khz: f64) -> f64 {
    let f2 = f_khz * f_khz;
    0.11 * f2 / (1.0 + f2) + 44.0 * f2 / (4100.0 + f2) + 2.75e-4 * f2 + 0.003
}

/// Transmission loss in dB over `distance_m`.  Distances under 1 m are
/// treated as 1 m so the loss never goes negative.
pub fn transmission_loss_db(distance_m: f64, spreading: f64, f_khz: f64) -> f64 {
    let d = distance_m.max(1.0);
    10.0 * spreading * d.log10() + (d / 1000.0) * thorp_absorption_db_per_km(f_khz)
}

/// Received power in dB re 1 W for `tx_power_w` watts over `distance_m`.
pub fn received_power_db(tx_power_w: f64, distance_m: f64, spreading: f64, f_khz: f64) -> f64 {
    10.0 * tx_power_w.log10() - transmission_loss_db(distance_m, spreading, f_khz)
}
