use std::f64::consts::TAU;

/// Map an angle onto `[0, 2π)`.
pub fn wrap_angle(theta: f64) -> f64 {
    theta.rem_euclid(TAU)
}

/// Angle of `(x, y)` measured from the +x axis, in `[0, 2π)`.
pub fn planar_angle(x: f64, y: f64) -> f64 {
    wrap_angle(y.atan2(x))
}
