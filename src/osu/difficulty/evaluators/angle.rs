use std::f64::consts::PI;

/// Reward for wide angles, ranging from `0.0` for sharp turns at `π/6` and
/// below up to `1.0` for near-straight lines at `5π/6` and above.
pub fn calc_wide_angle_bonus(angle: f64) -> f64 {
    let clamped = angle.clamp(PI / 6.0, 5.0 / 6.0 * PI);

    f64::powf(f64::sin(3.0 / 4.0 * (clamped - PI / 6.0)), 2.0)
}

/// Reward for acute angles; the complement of [`calc_wide_angle_bonus`].
pub fn calc_acute_angle_bonus(angle: f64) -> f64 {
    1.0 - calc_wide_angle_bonus(angle)
}
