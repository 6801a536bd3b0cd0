//! Per-motor control configuration
//!
//! Limits, step sizes and loop periods are per-instance values validated at
//! construction, so several motors can run with different tuning in one
//! firmware image.

use core::fmt;

/// Configuration for one motor's control loops
///
/// Defaults match the tuning proven on 25 mm geared motors: 60 mA limit,
/// 500 Hz current loop stepping by 1, 50 Hz slew loop stepping by 3.
#[derive(Debug, Clone, Copy)]
pub struct MotorConfig {
    /// Current ceiling for current-limited mode, in milliamps (> 0)
    pub current_limit_ma: f32,
    /// Lower edge of the hysteresis band as a fraction of the limit, in (0, 1)
    pub current_lower_bound: f32,
    /// Duty step per current-loop correction (>= 1)
    pub current_step: u8,
    /// Current loop period in microseconds (> 0)
    pub current_period_us: u32,
    /// Duty step per slew-loop tick (>= 1)
    pub slew_step: u8,
    /// Slew loop period in milliseconds (> 0)
    pub slew_period_ms: u32,
    /// Cruise duty the slew loop ramps toward
    pub cruise_duty: u8,
    /// Smoothing coefficient of the current filter, in (0, 1]
    pub filter_alpha: f32,
    /// Telemetry emission period in milliseconds (> 0)
    pub telemetry_period_ms: u32,
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            current_limit_ma: 60.0,
            current_lower_bound: 0.85,
            current_step: 1,
            current_period_us: 2_000, // 500 Hz
            slew_step: 3,
            slew_period_ms: 20, // 50 Hz
            cruise_duty: 255,
            filter_alpha: 0.1,
            telemetry_period_ms: 100, // 10 Hz
        }
    }
}

impl MotorConfig {
    /// Check all fields against their documented ranges
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.current_limit_ma > 0.0) {
            return Err(ConfigError::InvalidCurrentLimit);
        }
        if !(self.current_lower_bound > 0.0 && self.current_lower_bound < 1.0) {
            return Err(ConfigError::InvalidLowerBound);
        }
        if self.current_step == 0 || self.slew_step == 0 {
            return Err(ConfigError::InvalidStep);
        }
        if self.current_period_us == 0 || self.slew_period_ms == 0 || self.telemetry_period_ms == 0
        {
            return Err(ConfigError::InvalidPeriod);
        }
        if !(self.filter_alpha > 0.0 && self.filter_alpha <= 1.0) {
            return Err(ConfigError::InvalidFilterAlpha);
        }
        Ok(())
    }
}

/// Errors from motor configuration validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Current limit must be strictly positive
    InvalidCurrentLimit,
    /// Hysteresis lower bound must be a fraction in (0, 1)
    InvalidLowerBound,
    /// Step sizes must be non-zero
    InvalidStep,
    /// Loop periods must be non-zero
    InvalidPeriod,
    /// Filter coefficient must be in (0, 1]
    InvalidFilterAlpha,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidCurrentLimit => write!(f, "current limit must be > 0"),
            ConfigError::InvalidLowerBound => write!(f, "lower bound must be in (0, 1)"),
            ConfigError::InvalidStep => write!(f, "step sizes must be non-zero"),
            ConfigError::InvalidPeriod => write!(f, "loop periods must be non-zero"),
            ConfigError::InvalidFilterAlpha => write!(f, "filter alpha must be in (0, 1]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(MotorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_current_limit() {
        let config = MotorConfig {
            current_limit_ma: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidCurrentLimit));

        let config = MotorConfig {
            current_limit_ma: -60.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidCurrentLimit));
    }

    #[test]
    fn test_rejects_zero_steps_and_periods() {
        let config = MotorConfig {
            slew_step: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidStep));

        let config = MotorConfig {
            current_period_us: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidPeriod));
    }

    #[test]
    fn test_rejects_bad_fractions() {
        let config = MotorConfig {
            current_lower_bound: 1.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidLowerBound));

        let config = MotorConfig {
            filter_alpha: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidFilterAlpha));
    }

    #[test]
    fn test_alpha_of_one_is_passthrough_and_valid() {
        let config = MotorConfig {
            filter_alpha: 1.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
