use nalgebra::Point3;

use super::FieldSampler;
use crate::config::setup::parameters::field::FieldParams;
use crate::geometry::{torus::Torus, volume_grid};

/// The field sampled on a cube around the ring (x outer, then y, then z).
pub struct VolumeField {
    pub axis: Vec<f64>,
    pub points: Vec<Point3<f64>>,
    pub values: Vec<f64>,
}

/// Value at percentile `q` (0-100) of `values`, interpolating linearly
/// between the two closest ranks.
pub fn percentile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let rank = (q.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let (a, b) = (sorted[lo], sorted[hi]);
    let w = rank - lo as f64;
    // Interpolate from whichever end is nearer to keep the result monotone.
    Some(if w >= 0.5 {
        b - (b - a) * (1.0 - w)
    } else {
        a + (b - a) * w
    })
}

impl VolumeField {
    pub fn evaluate(torus: &Torus, energy: f64, params: &FieldParams) -> Self {
        let axis = params.axis(params.volume_resolution);
        let sampler = FieldSampler::new(torus, volume_grid(&axis));
        let values = sampler.values(energy);
        VolumeField {
            axis,
            points: sampler.points,
            values,
        }
    }

    pub fn percentile(&self, q: f64) -> Option<f64> {
        percentile(&self.values, q)
    }

    /// Field value at which the shell is drawn.
    pub fn iso_level(&self, params: &FieldParams) -> Option<f64> {
        self.percentile(params.iso_percentile)
    }

    /// Grid points inside the shell, with their field values.
    pub fn points_above(&self, level: f64) -> Vec<(Point3<f64>, f64)> {
        self.points
            .iter()
            .zip(&self.values)
            .filter(|(_, v)| **v >= level)
            .map(|(p, v)| (*p, *v))
            .collect()
    }
}
