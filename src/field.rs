//! Scalar curvature field around the capsule ring.
//!
//! A heuristic visualisation quantity, not a physical one: the frame's total
//! kinetic energy scaled by the Einstein coupling `8πG/c⁴` and divided by the
//! squared distance to the core ring.

pub mod plane;
pub mod volume;

use std::f64::consts::PI;

use nalgebra::Point3;

use crate::geometry::{closest::Closest, torus::Torus};

pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;
// c⁴ formed exactly in integers, rounded once.
const SPEED_OF_LIGHT_POW4: f64 = 299_792_458_u128.pow(4) as f64;
/// Floor on the squared distance, so the ring itself stays finite.
pub const MIN_DISTANCE_SQ: f64 = 1e-6;

/// `8πG / c⁴`.
pub fn coupling() -> f64 {
    8.0 * PI * GRAVITATIONAL_CONSTANT / SPEED_OF_LIGHT_POW4
}

pub fn clamped_distance_sq(d: f64) -> f64 {
    (d * d).max(MIN_DISTANCE_SQ)
}

/// Field value at distance `d` from the ring for a frame of total energy `energy`.
pub fn curvature(energy: f64, d: f64) -> f64 {
    coupling() * energy / clamped_distance_sq(d)
}

/// The field of one frame.
#[derive(Debug, Clone, Copy)]
pub struct CurvatureField {
    pub torus: Torus,
    pub energy: f64,
}

impl CurvatureField {
    pub fn new(torus: Torus, energy: f64) -> Self {
        CurvatureField { torus, energy }
    }

    pub fn eval(&self, p: Point3<f64>) -> f64 {
        curvature(self.energy, self.torus.distance(p))
    }
}

/// A fixed set of sample points with their clamped squared distances to the
/// ring cached, so the field can be re-evaluated per frame energy.
pub struct FieldSampler {
    pub points: Vec<Point3<f64>>,
    denominators: Vec<f64>,
}

impl FieldSampler {
    pub fn new(torus: &Torus, points: Vec<Point3<f64>>) -> Self {
        let denominators = points
            .iter()
            .map(|p| clamped_distance_sq(torus.distance(*p)))
            .collect();
        FieldSampler {
            points,
            denominators,
        }
    }

    pub fn values(&self, energy: f64) -> Vec<f64> {
        let numerator = coupling() * energy;
        self.denominators.iter().map(|d2| numerator / d2).collect()
    }
}
