//! Per-motor state and the control dispatcher
//!
//! `MotorController` owns one motor's actuator state (direction, duty, mode)
//! together with its current source, duty output and clock. The caller polls
//! `tick()` at least as fast as the current loop period; each regulator gates
//! its own work against its own clock, so the two loops stay independent
//! periodic processes multiplexed onto one polling call.

use core::sync::atomic::{AtomicU32, Ordering};

use super::config::{ConfigError, MotorConfig};
use super::current_limit::CurrentLimitRegulator;
use super::sampler::SampledCurrentSource;
use super::slew::SlewRateRegulator;
use super::telemetry::TelemetrySnapshot;
use crate::devices::CurrentSensor;
use crate::libraries::motor_driver::{Direction, DutyOutput};
use crate::platform::traits::Clock;
use crate::platform::PlatformError;

/// Counter for sampling sensor-failure logs (every 100th occurrence)
static SENSOR_HOLD_LOG_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Active regulation mode
///
/// Mutually exclusive: exactly one regulator acts per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlMode {
    /// Slew-limited ramp toward the cruise duty
    SpeedControlled,
    /// Hysteresis-band current limiting
    CurrentLimited,
}

/// Motor controller errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorError {
    /// Configuration rejected at construction
    Config(ConfigError),
    /// Output hardware failure
    Output(PlatformError),
}

impl From<ConfigError> for MotorError {
    fn from(e: ConfigError) -> Self {
        MotorError::Config(e)
    }
}

impl From<PlatformError> for MotorError {
    fn from(e: PlatformError) -> Self {
        MotorError::Output(e)
    }
}

/// One motor's control state and its two regulators
///
/// # Type Parameters
///
/// * `S` - Current sensor (e.g. `Ina219`)
/// * `O` - Duty output (e.g. `HBridgeOutput`)
/// * `C` - Monotonic clock
pub struct MotorController<S, O, C>
where
    S: CurrentSensor,
    O: DutyOutput,
    C: Clock,
{
    source: SampledCurrentSource<S>,
    output: O,
    clock: C,
    slew: SlewRateRegulator,
    current: CurrentLimitRegulator,
    duty: u8,
    direction: Direction,
    mode: Option<ControlMode>,
}

impl<S, O, C> MotorController<S, O, C>
where
    S: CurrentSensor,
    O: DutyOutput,
    C: Clock,
{
    /// Create a controller from validated configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any configured limit, step or period is out
    /// of range. No hardware is touched on the rejection path.
    pub fn new(sensor: S, output: O, clock: C, config: MotorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            source: SampledCurrentSource::new(sensor, config.filter_alpha),
            output,
            clock,
            slew: SlewRateRegulator::new(config.slew_step, config.cruise_duty, config.slew_period_ms),
            current: CurrentLimitRegulator::new(
                config.current_limit_ma,
                config.current_lower_bound,
                config.current_step,
                config.current_period_us,
            ),
            duty: 0,
            direction: Direction::Neutral,
            mode: None,
        })
    }

    /// Command a drive level, direction and regulation mode
    ///
    /// The only entry point that changes direction or mode. The requested
    /// duty is applied to the output immediately, without waiting for the
    /// next regulator tick; the active regulator then adjusts from there.
    /// Duty continuity across mode switches is intentional: switching modes
    /// never discontinues the applied output.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::Output` if the output hardware fails.
    pub fn drive(
        &mut self,
        duty: u8,
        direction: Direction,
        mode: ControlMode,
    ) -> Result<(), MotorError> {
        self.duty = duty;
        self.direction = direction;
        self.mode = Some(mode);
        self.output.apply(duty, direction)?;
        Ok(())
    }

    /// Force the safe zero state
    ///
    /// Duty 0, both output legs 0, direction Neutral, no active mode.
    /// Idempotent; this path cannot be blocked by sensor failures.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::Output` if the output hardware fails.
    pub fn stop(&mut self) -> Result<(), MotorError> {
        self.duty = 0;
        self.direction = Direction::Neutral;
        self.mode = None;
        self.output.stop()?;
        Ok(())
    }

    /// Run at most one regulator, gated by its own period
    ///
    /// Poll at least as fast as the current loop period. Neutral direction
    /// makes both regulators a no-op. A tick on which the sensor cannot
    /// deliver a valid sample holds the present duty and retries next
    /// period; only output hardware faults propagate.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::Output` if committing a new duty fails.
    pub fn tick(&mut self) -> Result<(), MotorError> {
        if self.direction == Direction::Neutral {
            return Ok(());
        }
        match self.mode {
            Some(ControlMode::SpeedControlled) => self.slew_tick(),
            Some(ControlMode::CurrentLimited) => self.current_tick(),
            None => Ok(()),
        }
    }

    /// Change the cruise duty the speed mode ramps toward
    pub fn set_cruise_duty(&mut self, duty: u8) {
        self.slew.set_target(duty);
    }

    /// Applied duty level
    pub fn duty(&self) -> u8 {
        self.duty
    }

    /// Commanded direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Active regulation mode, if any
    pub fn mode(&self) -> Option<ControlMode> {
        self.mode
    }

    /// Shared access to the duty output (used by host tests)
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Read-only state for the telemetry reporter
    pub fn snapshot(&self) -> TelemetrySnapshot {
        TelemetrySnapshot {
            duty: self.duty,
            raw_ma: self.source.last_raw_ma(),
            filtered_ma: self.source.filtered_ma(),
        }
    }

    fn slew_tick(&mut self) -> Result<(), MotorError> {
        if !self.slew.try_run(self.clock.now_ms()) {
            return Ok(());
        }
        self.duty = self.slew.ramp(self.duty);
        // Committed every slew period, even when already at the target
        self.output.apply(self.duty, self.direction)?;
        Ok(())
    }

    fn current_tick(&mut self) -> Result<(), MotorError> {
        if !self.current.try_run(self.clock.now_us()) {
            return Ok(());
        }
        match self.source.sample() {
            Ok(filtered_ma) => {
                let effective_ma = self.direction.sign() as f32 * filtered_ma;
                let next = self.current.adjust(effective_ma, self.duty);
                if next != self.duty {
                    self.duty = next;
                    self.output.apply(next, self.direction)?;
                }
                Ok(())
            }
            Err(_) => {
                // Hold the present duty and retry next period; neither
                // correction path may act on invalid data.
                let count = SENSOR_HOLD_LOG_COUNTER.fetch_add(1, Ordering::Relaxed);
                if count.is_multiple_of(100) {
                    crate::log_warn!("current sample unavailable, holding duty {}", self.duty);
                }
                Ok(())
            }
        }
    }
}
