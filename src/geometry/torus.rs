use nalgebra::Point3;

use super::closest::Closest;
use crate::config::setup::parameters::simulation::SimParams;

/// A torus centred on the origin with its symmetry axis along z.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Torus {
    // Origin to tube centre.
    pub major_radius: f64,
    // Tube radius.
    pub minor_radius: f64,
}

impl Torus {
    pub fn new(major_radius: f64, minor_radius: f64) -> Self {
        Torus {
            major_radius,
            minor_radius,
        }
    }

    pub fn from_params(sim_params: &SimParams) -> Self {
        Self::new(sim_params.major_radius, sim_params.minor_radius)
    }

    /// Capsule position at toroidal angle `phi`.
    ///
    /// Capsules ride the equatorial core ring: the poloidal angle is pinned at
    /// zero, so `z` is always zero and the tube radius never enters.
    pub fn ring_point(&self, phi: f64) -> Point3<f64> {
        Point3::new(
            self.major_radius * phi.cos(),
            self.major_radius * phi.sin(),
            0.0,
        )
    }
}

impl Closest for Torus {
    // Closest point on the core ring. Points on the z axis are equidistant
    // from the whole ring; pick the +x point.
    fn closest_point(&self, p: Point3<f64>) -> Point3<f64> {
        let rho = p.x.hypot(p.y);
        if rho == 0.0 {
            Point3::new(self.major_radius, 0.0, 0.0)
        } else {
            let s = self.major_radius / rho;
            Point3::new(p.x * s, p.y * s, 0.0)
        }
    }

    fn distance(&self, p: Point3<f64>) -> f64 {
        (p.x.hypot(p.y) - self.major_radius).hypot(p.z)
    }
}
