use nalgebra::Point3;

use crate::geometry::point::planar_angle;

/// One time-indexed record of the capsule ring.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct Frame {
    pub step: usize,
    pub t: f64,
    pub velocities: Vec<f64>,
    pub positions: Vec<Point3<f64>>,
    pub total_kinetic_energy: f64,
    // Whether a ring-wide velocity reset happened on this frame.
    pub kick_fired: bool,
    // Count of kick-free frames so far. Never decreases.
    pub symbolic_tick: u64,
}

impl Frame {
    /// Toroidal angle of each capsule, recovered from its position.
    pub fn phases(&self) -> Vec<f64> {
        self.positions
            .iter()
            .map(|p| planar_angle(p.x, p.y))
            .collect()
    }
}

// A run summary is what gets reported once a trace is complete.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub step_count: usize,
    pub final_energy: f64,
    pub total_kicks: usize,
    pub max_symbolic_tick: u64,
}

/// The full, eagerly computed output of a simulation. Read-only once built.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationTrace {
    reference_speeds: Vec<f64>,
    angular_seeds: Vec<f64>,
    frames: Vec<Frame>,
}

impl SimulationTrace {
    pub(crate) fn new(reference_speeds: Vec<f64>, angular_seeds: Vec<f64>, frames: Vec<Frame>) -> Self {
        SimulationTrace {
            reference_speeds,
            angular_seeds,
            frames,
        }
    }

    pub fn reference_speeds(&self) -> &[f64] {
        &self.reference_speeds
    }

    pub fn angular_seeds(&self) -> &[f64] {
        &self.angular_seeds
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame(&self, step: usize) -> Option<&Frame> {
        self.frames.get(step)
    }

    pub fn final_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn capsule_count(&self) -> usize {
        self.reference_speeds.len()
    }

    pub fn energies(&self) -> Vec<f64> {
        self.frames.iter().map(|f| f.total_kinetic_energy).collect()
    }

    pub fn kicks(&self) -> Vec<bool> {
        self.frames.iter().map(|f| f.kick_fired).collect()
    }

    pub fn symbolic_ticks(&self) -> Vec<u64> {
        self.frames.iter().map(|f| f.symbolic_tick).collect()
    }

    pub fn total_kicks(&self) -> usize {
        self.frames.iter().filter(|f| f.kick_fired).count()
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            step_count: self.len(),
            final_energy: self
                .final_frame()
                .map_or(0.0, |f| f.total_kinetic_energy),
            total_kicks: self.total_kicks(),
            max_symbolic_tick: self
                .frames
                .iter()
                .map(|f| f.symbolic_tick)
                .max()
                .unwrap_or(0),
        }
    }
}
