pub mod drag;
pub mod energy;
pub mod kick;

use std::f64::consts::TAU;

use log::{debug, info};
use nalgebra::Point3;

use crate::config::setup::parameters::simulation::SimParams;
use crate::error::ConfigError;
use crate::geometry::{point::wrap_angle, torus::Torus};
use crate::state::{Frame, SimulationTrace};

use self::{drag::apply_drag, energy::kinetic_energy, kick::apply_kick};

/// Quantities fixed for the whole run.
pub struct RingContext {
    pub torus: Torus,
    pub reference_speeds: Vec<f64>,
    pub angular_seeds: Vec<f64>,
}

impl RingContext {
    pub fn new(sim_params: &SimParams) -> Self {
        RingContext {
            torus: Torus::from_params(sim_params),
            reference_speeds: sim_params.reference_speeds(),
            angular_seeds: angular_seeds(sim_params.capsule_count),
        }
    }
}

/// Evenly spaced starting angles, `i * 2π / n`.
pub fn angular_seeds(n: usize) -> Vec<f64> {
    let step = TAU / n as f64;
    (0..n).map(|i| i as f64 * step).collect()
}

/// Capsule positions on the core ring after `step` steps at the given velocities.
pub fn project_positions(
    torus: &Torus,
    angular_seeds: &[f64],
    velocities: &[f64],
    step: usize,
    dt: f64,
) -> Vec<Point3<f64>> {
    angular_seeds
        .iter()
        .zip(velocities)
        .map(|(theta0, v)| {
            let phi = wrap_angle(theta0 + (v / torus.major_radius) * step as f64 * dt);
            torus.ring_point(phi)
        })
        .collect()
}

pub fn initialize(sim_params: &SimParams, ring: &RingContext) -> Frame {
    let velocities = ring.reference_speeds.clone();
    Frame {
        step: 0,
        t: 0.0,
        positions: project_positions(
            &ring.torus,
            &ring.angular_seeds,
            &velocities,
            0,
            sim_params.time_step,
        ),
        total_kinetic_energy: kinetic_energy(sim_params.mass, &velocities),
        velocities,
        kick_fired: false,
        symbolic_tick: 0,
    }
}

/// Advance the ring by one step from `prev`.
pub fn update(sim_params: &SimParams, ring: &RingContext, prev: &Frame) -> Frame {
    let step = prev.step + 1;

    let mut velocities = prev.velocities.clone();
    apply_drag(&mut velocities, sim_params.drag_factor());

    let kick_fired = apply_kick(
        &mut velocities,
        &ring.reference_speeds,
        sim_params.kick_threshold,
    );
    if kick_fired {
        debug!("Kick fired at step={}", step);
    }

    // Ticks only advance on clean frames.
    let symbolic_tick = prev.symbolic_tick + u64::from(!kick_fired);

    Frame {
        step,
        t: step as f64 * sim_params.time_step,
        positions: project_positions(
            &ring.torus,
            &ring.angular_seeds,
            &velocities,
            step,
            sim_params.time_step,
        ),
        total_kinetic_energy: kinetic_energy(sim_params.mass, &velocities),
        velocities,
        kick_fired,
        symbolic_tick,
    }
}

/// Run the capsule ring from its initial condition to the last frame.
pub fn simulate(sim_params: &SimParams) -> Result<SimulationTrace, ConfigError> {
    sim_params.validate()?;

    let n_steps = sim_params.to_steps();
    info!(
        "Simulating {} capsules for {} frames (dt={}s)",
        sim_params.capsule_count, n_steps, sim_params.time_step
    );

    let ring = RingContext::new(sim_params);
    let mut frames: Vec<Frame> = Vec::with_capacity(n_steps);
    let mut frame = initialize(sim_params, &ring);
    for _ in 1..n_steps {
        let next = update(sim_params, &ring, &frame);
        frames.push(std::mem::replace(&mut frame, next));
    }
    frames.push(frame);

    let trace = SimulationTrace::new(ring.reference_speeds, ring.angular_seeds, frames);
    info!(
        "Done: {} kicks, max symbolic tick {}",
        trace.total_kicks(),
        trace.summary().max_symbolic_tick
    );
    Ok(trace)
}
