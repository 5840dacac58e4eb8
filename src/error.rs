use derive_more::{Display, Error};

/// Rejected simulation configuration. Raised before any frame is computed.
#[derive(Debug, Clone, PartialEq, Display, Error)]
pub enum ConfigError {
    #[display("capsule_count must be positive, got {count}")]
    NonPositiveCapsuleCount { count: usize },
    #[display("time_step must be positive, got {time_step}")]
    NonPositiveTimeStep { time_step: f64 },
    #[display("duration must be positive, got {duration}")]
    NonPositiveDuration { duration: f64 },
    // duration < time_step floors to an empty trace.
    #[display("duration {duration} is shorter than one time_step {time_step}")]
    TooFewSteps { duration: f64, time_step: f64 },
    #[display("duration / time_step = {ratio} exceeds the frame limit {max_steps}")]
    TooManySteps { ratio: f64, max_steps: usize },
    #[display("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::ConfigError;

    #[test]
    fn test_messages_name_the_field() {
        let e = ConfigError::NonPositiveTimeStep { time_step: -0.5 };
        assert_eq!(e.to_string(), "time_step must be positive, got -0.5");

        let e = ConfigError::NonFinite {
            name: "mass",
            value: f64::NAN,
        };
        assert_eq!(e.to_string(), "mass must be finite, got NaN");
    }
}
