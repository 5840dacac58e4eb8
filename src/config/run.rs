use std::path::{Path, PathBuf};

use super::setup::parameters::simulation::SimParams;

pub struct RunParams {
    // Export every `dstep_view`-th frame of per-frame field products.
    pub dstep_view: usize,
    pub output_dir: PathBuf,
}

impl RunParams {
    pub fn new(sim_params: &SimParams, dt_view: f64, output_dir: PathBuf) -> Self {
        RunParams {
            dstep_view: sim_params.to_view_steps(dt_view),
            output_dir,
        }
    }

    pub fn output_path<P: AsRef<Path>>(&self, name: P) -> PathBuf {
        self.output_dir.join(name)
    }

    pub fn is_view_step(&self, step: usize) -> bool {
        step % self.dstep_view == 0
    }
}

#[cfg(test)]
mod tests {
    use super::RunParams;
    use crate::config::setup::parameters::simulation::SimParams;
    use std::path::PathBuf;

    #[test]
    fn test_view_steps() {
        let run = RunParams::new(&SimParams::default(), 0.5, PathBuf::from("out"));
        assert_eq!(run.dstep_view, 5);
        assert!(run.is_view_step(0));
        assert!(!run.is_view_step(4));
        assert!(run.is_view_step(10));
        assert_eq!(run.output_path("trace.csv"), PathBuf::from("out/trace.csv"));
    }
}
