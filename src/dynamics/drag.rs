/// Scale every velocity by the per-step drag factor `1 - drag * dt`.
pub fn apply_drag(velocities: &mut [f64], drag_factor: f64) {
    for v in velocities.iter_mut() {
        *v *= drag_factor;
    }
}
