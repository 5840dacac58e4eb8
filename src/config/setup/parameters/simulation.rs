use log::warn;

use crate::error::ConfigError;

/// Speed multipliers applied to the two capsule cohorts when
/// `asymmetric_init` is set. The first cohort is indices `0..n / 2`.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct AsymmetryFactors {
    pub first_half: f64,
    pub second_half: f64,
}

impl Default for AsymmetryFactors {
    fn default() -> Self {
        AsymmetryFactors {
            first_half: 0.9,
            second_half: 1.1,
        }
    }
}

/// Upper bound on the number of frames in one trace.
pub const MAX_STEPS: usize = u32::MAX as usize;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimParams {
    // Ring population.
    pub capsule_count: usize,
    // Torus geometry.
    pub major_radius: f64,
    pub minor_radius: f64,
    // Time.
    pub duration: f64,
    pub time_step: f64,
    // Capsule dynamics.
    pub mass: f64,
    pub initial_speed: f64,
    // Fraction of the reference speed below which a capsule forces a kick.
    pub kick_threshold: f64,
    pub drag_coefficient: f64,
    // Velocity cohorts.
    pub asymmetric_init: bool,
    pub asymmetry: AsymmetryFactors,
}

impl Default for SimParams {
    fn default() -> Self {
        SimParams {
            capsule_count: 100,
            major_radius: 0.25,
            minor_radius: 0.05,
            duration: 60.0,
            time_step: 0.1,
            mass: 1.0,
            initial_speed: 50.0,
            kick_threshold: 0.99,
            drag_coefficient: 0.0,
            asymmetric_init: false,
            asymmetry: AsymmetryFactors::default(),
        }
    }
}

impl SimParams {
    /// Number of frames in a trace, frame 0 included.
    pub fn to_steps(&self) -> usize {
        (self.duration / self.time_step).floor() as usize
    }

    /// Frame stride covering at least `t` seconds of simulated time.
    pub fn to_view_steps(&self, t: f64) -> usize {
        ((t / self.time_step).ceil() as usize).max(1)
    }

    pub fn drag_factor(&self) -> f64 {
        1.0 - self.drag_coefficient * self.time_step
    }

    /// The speed each capsule starts at and snaps back to on a kick.
    pub fn reference_speeds(&self) -> Vec<f64> {
        let n_first = self.capsule_count / 2;
        (0..self.capsule_count)
            .map(|i| {
                if !self.asymmetric_init {
                    self.initial_speed
                } else if i < n_first {
                    self.initial_speed * self.asymmetry.first_half
                } else {
                    self.initial_speed * self.asymmetry.second_half
                }
            })
            .collect()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("major_radius", self.major_radius),
            ("minor_radius", self.minor_radius),
            ("duration", self.duration),
            ("time_step", self.time_step),
            ("mass", self.mass),
            ("initial_speed", self.initial_speed),
            ("kick_threshold", self.kick_threshold),
            ("drag_coefficient", self.drag_coefficient),
            ("asymmetry.first_half", self.asymmetry.first_half),
            ("asymmetry.second_half", self.asymmetry.second_half),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }

        if self.capsule_count == 0 {
            return Err(ConfigError::NonPositiveCapsuleCount {
                count: self.capsule_count,
            });
        }
        if self.time_step <= 0.0 {
            return Err(ConfigError::NonPositiveTimeStep {
                time_step: self.time_step,
            });
        }
        if self.duration <= 0.0 {
            return Err(ConfigError::NonPositiveDuration {
                duration: self.duration,
            });
        }
        let ratio = (self.duration / self.time_step).floor();
        if !(ratio <= MAX_STEPS as f64) {
            return Err(ConfigError::TooManySteps {
                ratio,
                max_steps: MAX_STEPS,
            });
        }
        if self.to_steps() == 0 {
            return Err(ConfigError::TooFewSteps {
                duration: self.duration,
                time_step: self.time_step,
            });
        }

        // Legal, but outside the range the kick rule was designed for.
        if self.kick_threshold <= 0.0 || self.kick_threshold > 1.0 {
            warn!(
                "kick_threshold={} is outside (0, 1]; kicks will {}",
                self.kick_threshold,
                if self.kick_threshold <= 0.0 {
                    "never fire"
                } else {
                    "fire on every frame"
                }
            );
        }
        if self.drag_coefficient < 0.0 {
            warn!(
                "drag_coefficient={} is negative; capsules will accelerate",
                self.drag_coefficient
            );
        }
        if self.major_radius <= 0.0 {
            warn!("major_radius={} is not positive", self.major_radius);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{SimParams, MAX_STEPS};
    use crate::error::ConfigError;
    use approx::assert_relative_eq;

    #[test]
    fn test_to_steps_floors() {
        let params = SimParams {
            duration: 1.0,
            time_step: 0.3,
            ..Default::default()
        };
        assert_eq!(params.to_steps(), 3);
        assert_eq!(SimParams::default().to_steps(), 600);
    }

    #[test]
    fn test_to_view_steps_is_at_least_one() {
        let params = SimParams::default();
        assert_eq!(params.to_view_steps(0.0), 1);
        assert_eq!(params.to_view_steps(1.0), 10);
        assert_eq!(params.to_view_steps(0.25), 3);
    }

    #[test]
    fn test_reference_speeds_symmetric() {
        let params = SimParams {
            capsule_count: 5,
            initial_speed: 3.0,
            ..Default::default()
        };
        assert_eq!(params.reference_speeds(), vec![3.0; 5]);
    }

    #[test]
    fn test_reference_speeds_asymmetric_odd_count() {
        let params = SimParams {
            capsule_count: 5,
            initial_speed: 10.0,
            asymmetric_init: true,
            ..Default::default()
        };
        let speeds = params.reference_speeds();
        // 5 / 2 = 2 capsules in the first cohort.
        for v in &speeds[..2] {
            assert_relative_eq!(*v, 9.0);
        }
        for v in &speeds[2..] {
            assert_relative_eq!(*v, 11.0);
        }
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert_eq!(SimParams::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_bad_inputs() {
        let params = SimParams {
            capsule_count: 0,
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ConfigError::NonPositiveCapsuleCount { count: 0 })
        );

        let params = SimParams {
            time_step: 0.0,
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ConfigError::NonPositiveTimeStep { time_step: 0.0 })
        );

        let params = SimParams {
            duration: -1.0,
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ConfigError::NonPositiveDuration { duration: -1.0 })
        );

        let params = SimParams {
            duration: 0.05,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::TooFewSteps { .. })
        ));

        let params = SimParams {
            mass: f64::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::NonFinite { name: "mass", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_unrepresentable_step_count() {
        let params = SimParams {
            duration: 1e12,
            time_step: 1e-3,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::TooManySteps {
                max_steps: MAX_STEPS,
                ..
            })
        ));

        let params = SimParams {
            duration: 1.0,
            time_step: f64::MIN_POSITIVE,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::TooManySteps { .. })
        ));
    }

    #[test]
    fn test_validate_allows_out_of_range_kick_and_drag() {
        let params = SimParams {
            kick_threshold: 0.0,
            drag_coefficient: -0.1,
            ..Default::default()
        };
        assert_eq!(params.validate(), Ok(()));
    }
}
