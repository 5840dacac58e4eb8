pub mod parameters;

use std::{error::Error, fs::File, io::Read, path::Path};

use log::info;

use self::parameters::{field::FieldParams, simulation::SimParams};

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SetupConfig {
    #[serde(default)]
    pub parameters: SimParams,
    #[serde(default)]
    pub field: FieldParams,
}

impl SetupConfig {
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, Box<dyn Error>> {
        let config: SetupConfig = serde_yaml::from_str(contents)?;
        config.parameters.validate()?;
        Ok(config)
    }

    /// Parse `path` if given, otherwise fall back to the reference scenario.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self, Box<dyn Error>> {
        match path {
            Some(path) => Self::parse(path),
            None => Ok(SetupConfig::default()),
        }
    }

    pub fn log_summary(&self) {
        let p = &self.parameters;
        info!(
            "\
Ring:
  Capsules: {n}
  Major radius: {r_major} m
  Minor radius: {r_minor} m
  Asymmetric cohorts: {asym}

Time:
  Duration: {duration} s
  Timestep: {dt} s
  Frames: {steps}

Capsules:
  Mass: {mass} kg
  Initial speed: {v0} m/s
  Kick threshold: {kick}
  Drag coefficient: {drag} 1/s

Derived (for info only):
  Drag factor per step: {drag_factor:.6}
  Ring lap time at initial speed: {t_lap:.3} s",
            n = p.capsule_count,
            r_major = p.major_radius,
            r_minor = p.minor_radius,
            asym = if p.asymmetric_init {
                format!(
                    "yes (x{} / x{})",
                    p.asymmetry.first_half, p.asymmetry.second_half
                )
            } else {
                "no".to_string()
            },
            duration = p.duration,
            dt = p.time_step,
            steps = p.to_steps(),
            mass = p.mass,
            v0 = p.initial_speed,
            kick = p.kick_threshold,
            drag = p.drag_coefficient,
            drag_factor = p.drag_factor(),
            t_lap = std::f64::consts::TAU * p.major_radius / p.initial_speed,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::SetupConfig;
    use crate::config::setup::parameters::simulation::SimParams;

    #[test]
    fn test_empty_yaml_is_reference_scenario() {
        let config = SetupConfig::from_yaml("{}").unwrap();
        assert_eq!(config, SetupConfig::default());
        assert_eq!(config.parameters.capsule_count, 100);
        assert_eq!(config.field.volume_resolution, 40);
    }

    #[test]
    fn test_partial_yaml_overrides() {
        let config = SetupConfig::from_yaml(
            "\
parameters:
  capsule_count: 4
  major_radius: 1.0
  asymmetric_init: true
  asymmetry:
    first_half: 1.1
    second_half: 0.9
field:
  extent: 2.0
",
        )
        .unwrap();
        assert_eq!(config.parameters.capsule_count, 4);
        assert_eq!(config.parameters.major_radius, 1.0);
        assert_eq!(config.parameters.asymmetry.first_half, 1.1);
        assert_eq!(config.parameters.time_step, SimParams::default().time_step);
        assert_eq!(config.field.extent, 2.0);
        assert_eq!(config.field.plane_resolution, 100);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let err = SetupConfig::from_yaml("parameters:\n  time_step: -1.0\n").unwrap_err();
        assert_eq!(err.to_string(), "time_step must be positive, got -1");
    }

    #[test]
    fn test_missing_path_uses_defaults() {
        let config = SetupConfig::load_or_default(None::<&str>).unwrap();
        assert_eq!(config, SetupConfig::default());
    }
}
