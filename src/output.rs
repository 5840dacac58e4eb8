use std::{error::Error, fs::File, io, path::Path};

use log::info;
use nalgebra::Point3;

use crate::field::plane::CentroidTrail;
use crate::state::SimulationTrace;

#[derive(serde::Serialize)]
struct FrameRecord {
    step: usize,
    t: f64,
    total_kinetic_energy: f64,
    kick_fired: bool,
    symbolic_tick: u64,
}

#[derive(serde::Serialize)]
struct CapsuleRecord {
    step: usize,
    capsule: usize,
    velocity: f64,
    x: f64,
    y: f64,
    z: f64,
}

#[derive(serde::Serialize)]
struct CentroidRecord {
    step: usize,
    x: f64,
    y: f64,
}

#[derive(serde::Serialize)]
struct SampleRecord {
    x: f64,
    y: f64,
    z: f64,
    value: f64,
}

pub fn write_trace<W: io::Write>(w: W, trace: &SimulationTrace) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_writer(w);
    for f in trace.frames() {
        wtr.serialize(FrameRecord {
            step: f.step,
            t: f.t,
            total_kinetic_energy: f.total_kinetic_energy,
            kick_fired: f.kick_fired,
            symbolic_tick: f.symbolic_tick,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_positions<W: io::Write>(w: W, trace: &SimulationTrace) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_writer(w);
    for f in trace.frames() {
        for (capsule, (velocity, r)) in f.velocities.iter().zip(&f.positions).enumerate() {
            wtr.serialize(CapsuleRecord {
                step: f.step,
                capsule,
                velocity: *velocity,
                x: r.x,
                y: r.y,
                z: r.z,
            })?;
        }
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_centroids<W: io::Write>(
    w: W,
    trail: &CentroidTrail,
    dstep_view: usize,
) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_writer(w);
    for (step, c) in trail.centroids.iter().enumerate().step_by(dstep_view.max(1)) {
        wtr.serialize(CentroidRecord {
            step,
            x: c.x,
            y: c.y,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_samples<W: io::Write>(
    w: W,
    samples: &[(Point3<f64>, f64)],
) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_writer(w);
    for (p, value) in samples {
        wtr.serialize(SampleRecord {
            x: p.x,
            y: p.y,
            z: p.z,
            value: *value,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

fn create<P: AsRef<Path>>(path: P) -> Result<File, Box<dyn Error>> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    info!("Writing {}", path.display());
    Ok(File::create(path)?)
}

pub fn write_trace_csv<P: AsRef<Path>>(path: P, trace: &SimulationTrace) -> Result<(), Box<dyn Error>> {
    write_trace(create(path)?, trace)
}

pub fn write_positions_csv<P: AsRef<Path>>(
    path: P,
    trace: &SimulationTrace,
) -> Result<(), Box<dyn Error>> {
    write_positions(create(path)?, trace)
}

pub fn write_centroid_csv<P: AsRef<Path>>(
    path: P,
    trail: &CentroidTrail,
    dstep_view: usize,
) -> Result<(), Box<dyn Error>> {
    write_centroids(create(path)?, trail, dstep_view)
}

pub fn write_volume_csv<P: AsRef<Path>>(
    path: P,
    samples: &[(Point3<f64>, f64)],
) -> Result<(), Box<dyn Error>> {
    write_samples(create(path)?, samples)
}

/// Store any serialisable run metadata (resolved setup, summary) as JSON.
pub fn write_json<P: AsRef<Path>, T: serde::Serialize>(path: P, value: &T) -> Result<(), Box<dyn Error>> {
    serde_json::to_writer_pretty(create(path)?, value)?;
    Ok(())
}
