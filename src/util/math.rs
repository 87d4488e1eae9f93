//! Numeric helpers shared by orientation estimation and rigid transforms.

/// Rounds to the nearest integer with ties toward positive infinity.
///
/// NaN maps to 0 and out-of-range values saturate, following `as` casts.
pub(crate) fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Normalizes an angle in whole degrees to `[0, 360)`.
pub(crate) fn wrap_deg_360(angle_deg: i32) -> i32 {
    angle_deg.rem_euclid(360)
}

/// Computes sine and cosine for an angle in whole degrees.
pub(crate) fn sin_cos_deg(angle_deg: i32) -> (f64, f64) {
    f64::from(angle_deg).to_radians().sin_cos()
}
