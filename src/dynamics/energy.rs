/// Total kinetic energy `Σ ½ m v²` of a ring of equal-mass capsules.
pub fn kinetic_energy(mass: f64, velocities: &[f64]) -> f64 {
    velocities.iter().map(|v| 0.5 * mass * v * v).sum()
}
