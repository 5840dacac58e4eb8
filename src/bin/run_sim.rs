use std::{error::Error, path::PathBuf};

use clap::Parser;
use log::info;
use reil::{
    config::{run::RunParams, setup::SetupConfig},
    dynamics::simulate,
    field::plane::{centroid_trail, PlaneField},
    geometry::torus::Torus,
    output,
};

#[derive(Debug, clap::Parser)]
#[command(name = "reil_run", about = "Simulate the capsule ring and export its trace...")]
pub struct RunCli {
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    #[arg(short = 'o', long = "out", default_value = "out")]
    pub output_dir: PathBuf,

    #[arg(short = 'd', long = "dt-view", default_value_t = 0.1)]
    pub dt_view: f64,

    // Force the two-cohort initial speeds regardless of the config file.
    #[arg(long = "asymmetric")]
    pub asymmetric: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = RunCli::parse();

    let mut setup_config = SetupConfig::load_or_default(args.config.as_ref())?;
    if args.asymmetric {
        setup_config.parameters.asymmetric_init = true;
    }
    setup_config.log_summary();

    let sim_params = &setup_config.parameters;
    let run_params = RunParams::new(sim_params, args.dt_view, args.output_dir);

    let trace = simulate(sim_params)?;
    let torus = Torus::from_params(sim_params);
    let trail = centroid_trail(&trace, &torus, &setup_config.field);

    output::write_json(run_params.output_path("setup.json"), &setup_config)?;
    output::write_trace_csv(run_params.output_path("trace.csv"), &trace)?;
    output::write_positions_csv(run_params.output_path("positions.csv"), &trace)?;
    output::write_centroid_csv(
        run_params.output_path("centroids.csv"),
        &trail,
        run_params.dstep_view,
    )?;

    let summary = trace.summary();
    output::write_json(run_params.output_path("summary.json"), &summary)?;

    if let Some(last) = trace.final_frame() {
        let plane = PlaneField::evaluate(&torus, last.total_kinetic_energy, &setup_config.field);
        info!(
            "Final frame field: max={:.3e}, colour scale max={:.3e}",
            plane.max(),
            trail.global_max
        );
    }
    let drift = trail.drift();
    info!(
        "Final kinetic energy at {}s: {:.2} J",
        sim_params.duration, summary.final_energy
    );
    info!("Total kick pulses required: {}", summary.total_kicks);
    info!("Max symbolic ticks: {}", summary.max_symbolic_tick);
    info!("Centroid drift: x={:.3} m, y={:.3} m", drift.x, drift.y);
    Ok(())
}
