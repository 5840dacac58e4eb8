use std::{error::Error, path::PathBuf};

use clap::Parser;
use log::{info, warn};
use reil::{
    config::setup::SetupConfig,
    dynamics::simulate,
    field::volume::VolumeField,
    geometry::torus::Torus,
    output,
};

#[derive(Debug, clap::Parser)]
#[command(
    name = "reil_view_field",
    about = "Sample the final frame's curvature field in 3D and extract its shell..."
)]
pub struct ViewCli {
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    #[arg(short = 'o', long = "out", default_value = "out")]
    pub output_dir: PathBuf,

    // Overrides the configured iso percentile.
    #[arg(short = 'p', long = "percentile")]
    pub percentile: Option<f64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = ViewCli::parse();

    let mut setup_config = SetupConfig::load_or_default(args.config.as_ref())?;
    if let Some(q) = args.percentile {
        setup_config.field.iso_percentile = q;
    }
    setup_config.log_summary();

    let trace = simulate(&setup_config.parameters)?;
    let frame = match trace.final_frame() {
        Some(frame) => frame,
        None => {
            warn!("Empty trace, nothing to view");
            return Ok(());
        }
    };

    let torus = Torus::from_params(&setup_config.parameters);
    let field = VolumeField::evaluate(&torus, frame.total_kinetic_energy, &setup_config.field);
    let level = match field.iso_level(&setup_config.field) {
        Some(level) => level,
        None => {
            warn!("Empty sampling grid, no shell to extract");
            return Ok(());
        }
    };
    let shell = field.points_above(level);

    info!("Symbolic ticks: {}", frame.symbolic_tick);
    info!("Curvature intensity: {:.2e}", level);
    info!(
        "Shell holds {} of {} grid points",
        shell.len(),
        field.values.len()
    );

    output::write_volume_csv(args.output_dir.join("shell.csv"), &shell)?;
    // Capsule point cloud of the viewed frame, valued by speed.
    let capsules: Vec<_> = frame
        .positions
        .iter()
        .copied()
        .zip(frame.velocities.iter().copied())
        .collect();
    output::write_volume_csv(args.output_dir.join("capsules.csv"), &capsules)?;
    Ok(())
}
