//! First-order wave influence on vessel speed.
//!
//! The model reduces the sea state to the relative angle between the wave
//! direction and the travel bearing: following seas add effective speed,
//! head seas subtract, scaled linearly with significant wave height.

/// Standard gravity in m/s^2.
pub const GRAVITY_MS2: f64 = 9.81;

/// Knots per meter-per-second.
pub const KNOTS_PER_MS: f64 = 1.94384;

/// Angle between wave direction and travel bearing, normalized to [-180, 180).
pub fn relative_wave_angle_deg(wave_direction_deg: f64, travel_bearing_deg: f64) -> f64 {
    (wave_direction_deg - travel_bearing_deg + 540.0).rem_euclid(360.0) - 180.0
}

/// Fractional speed adjustment for waves of height `hs_m` at `relative_deg`.
///
/// `(Hs / 10) * cos(rel)`, clamped to `±limit`. A zero wave height yields
/// exactly zero adjustment.
pub fn speed_delta(hs_m: f64, relative_deg: f64, limit: f64) -> f64 {
    if hs_m == 0.0 {
        return 0.0;
    }
    let delta = (hs_m / 10.0) * relative_deg.to_radians().cos();
    delta.clamp(-limit, limit)
}

/// Phase speed in m/s of a surface wave with peak period `tp_s`.
///
/// Deep-water linear dispersion approximation `c = g*T / (2*pi)`; depth
/// effects are ignored.
pub fn wave_phase_speed_ms(tp_s: f64) -> f64 {
    GRAVITY_MS2 * tp_s / (2.0 * std::f64::consts::PI)
}
