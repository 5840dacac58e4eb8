use log::debug;
use nalgebra::Point2;

use super::FieldSampler;
use crate::config::setup::parameters::field::FieldParams;
use crate::geometry::{plane_grid, torus::Torus};
use crate::state::SimulationTrace;

/// The field over the z = 0 plane for one frame, stored row-major with y
/// outer and x inner.
pub struct PlaneField {
    pub axis: Vec<f64>,
    pub values: Vec<f64>,
}

/// Weighted mean of the plane coordinates, or the origin when the weights do
/// not sum to something positive.
fn weighted_centroid(axis: &[f64], values: &[f64]) -> Point2<f64> {
    let n = axis.len();
    let total: f64 = values.iter().sum();
    if !(total > 0.0) {
        return Point2::origin();
    }
    let (mut sx, mut sy) = (0.0, 0.0);
    for (k, v) in values.iter().enumerate() {
        sx += axis[k % n] * v;
        sy += axis[k / n] * v;
    }
    Point2::new(sx / total, sy / total)
}

impl PlaneField {
    pub fn evaluate(torus: &Torus, energy: f64, params: &FieldParams) -> Self {
        let axis = params.axis(params.plane_resolution);
        let sampler = FieldSampler::new(torus, plane_grid(&axis));
        PlaneField {
            values: sampler.values(energy),
            axis,
        }
    }

    pub fn resolution(&self) -> usize {
        self.axis.len()
    }

    pub fn value(&self, ix: usize, iy: usize) -> f64 {
        self.values[iy * self.resolution() + ix]
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    pub fn centroid(&self) -> Point2<f64> {
        weighted_centroid(&self.axis, &self.values)
    }
}

/// Per-frame field centroid, the drift overlay of the heatmap animation.
pub struct CentroidTrail {
    pub centroids: Vec<Point2<f64>>,
    // Largest field value over all frames, for a fixed colour scale.
    pub global_max: f64,
}

impl CentroidTrail {
    pub fn drift(&self) -> Point2<f64> {
        self.centroids.last().copied().unwrap_or_else(Point2::origin)
    }
}

pub fn centroid_trail(trace: &SimulationTrace, torus: &Torus, params: &FieldParams) -> CentroidTrail {
    let axis = params.axis(params.plane_resolution);
    let sampler = FieldSampler::new(torus, plane_grid(&axis));
    let mut global_max: f64 = 0.0;
    let centroids = trace
        .frames()
        .iter()
        .map(|frame| {
            let values = sampler.values(frame.total_kinetic_energy);
            global_max = values.iter().copied().fold(global_max, f64::max);
            weighted_centroid(&axis, &values)
        })
        .collect();
    debug!("Centroid trail over {} frames, max={:e}", trace.len(), global_max);
    CentroidTrail {
        centroids,
        global_max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::curvature;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use nalgebra::Point3;
    use crate::geometry::closest::Closest;

    fn params(n: usize) -> FieldParams {
        FieldParams {
            extent: 0.5,
            plane_resolution: n,
            ..Default::default()
        }
    }

    #[test]
    fn test_values_follow_grid_order() {
        let torus = Torus::new(0.25, 0.05);
        let field = PlaneField::evaluate(&torus, 10.0, &params(5));
        assert_eq!(field.values.len(), 25);
        // ix = 4 -> x = 0.5, iy = 2 -> y = 0.
        let d = torus.distance(Point3::new(0.5, 0.0, 0.0));
        assert_relative_eq!(field.value(4, 2), curvature(10.0, d));
        // Centre of the grid is the origin, a full major radius from the ring.
        assert_relative_eq!(field.value(2, 2), curvature(10.0, 0.25));
    }

    #[test]
    fn test_symmetric_field_has_centred_centroid() {
        let torus = Torus::new(0.25, 0.05);
        let field = PlaneField::evaluate(&torus, 125_000.0, &params(21));
        let c = field.centroid();
        assert_abs_diff_eq!(c.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_energy_centroid_is_origin() {
        let torus = Torus::new(0.25, 0.05);
        let field = PlaneField::evaluate(&torus, 0.0, &params(5));
        assert_eq!(field.max(), 0.0);
        assert_eq!(field.centroid(), Point2::origin());
    }

    #[test]
    fn test_weighted_centroid() {
        let axis = [-1.0, 1.0];
        // Only (x = 1, y = -1) carries weight.
        let values = [0.0, 2.0, 0.0, 0.0];
        assert_eq!(weighted_centroid(&axis, &values), Point2::new(1.0, -1.0));
    }
}
