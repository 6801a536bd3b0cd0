//! H-bridge duty output implementation
//!
//! Implements the `DutyOutput` contract for H-bridge drivers like the
//! DRV8833, which use two PWM pins (IN1, IN2) per motor plus a bridge-level
//! sleep line.
//!
//! ## DRV8833 Truth Table (per motor)
//!
//! | IN1 | IN2 | Motor State                      |
//! |-----|-----|----------------------------------|
//! | 0   | 0   | Coast (High-Z, motor freewheels) |
//! | PWM | 0   | Forward (speed = PWM duty)       |
//! | 0   | PWM | Reverse (speed = PWM duty)       |

use super::{Direction, DutyOutput};
use crate::platform::{traits::GpioInterface, traits::PwmInterface, Result};

/// H-bridge duty output for DRV8833-class drivers
///
/// Owns the two PWM legs and the sleep/enable line for one motor. The sleep
/// line is raised before the first non-zero duty reaches the bridge, so the
/// driver never sees a duty command while asleep.
///
/// # Type Parameters
///
/// * `IN1` - PWM pin type for the first H-bridge input
/// * `IN2` - PWM pin type for the second H-bridge input
/// * `SLP` - GPIO pin type for the sleep line (active high)
pub struct HBridgeOutput<IN1, IN2, SLP>
where
    IN1: PwmInterface,
    IN2: PwmInterface,
    SLP: GpioInterface,
{
    in1: IN1,
    in2: IN2,
    sleep: SLP,
    enabled: bool,
}

impl<IN1, IN2, SLP> HBridgeOutput<IN1, IN2, SLP>
where
    IN1: PwmInterface,
    IN2: PwmInterface,
    SLP: GpioInterface,
{
    /// Create a new H-bridge output
    ///
    /// The bridge starts disabled; the sleep line is raised lazily when the
    /// first duty is applied, or explicitly via `enable()`.
    pub fn new(in1: IN1, in2: IN2, sleep: SLP) -> Self {
        Self {
            in1,
            in2,
            sleep,
            enabled: false,
        }
    }

    /// Raise the sleep line, waking the bridge
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio` if the sleep pin write fails.
    pub fn enable(&mut self) -> Result<()> {
        self.sleep.set_high()?;
        self.enabled = true;
        Ok(())
    }

    /// Zero both legs and drop the sleep line, putting the bridge to sleep
    ///
    /// # Errors
    ///
    /// Returns `PlatformError` if a pin write fails.
    pub fn sleep(&mut self) -> Result<()> {
        self.in1.write_duty(0)?;
        self.in2.write_duty(0)?;
        self.sleep.set_low()?;
        self.enabled = false;
        Ok(())
    }

    /// Whether the bridge is awake
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current duty on each leg, for observation (leg1, leg2)
    pub fn leg_duties(&self) -> (u8, u8) {
        (self.in1.duty(), self.in2.duty())
    }
}

impl<IN1, IN2, SLP> DutyOutput for HBridgeOutput<IN1, IN2, SLP>
where
    IN1: PwmInterface,
    IN2: PwmInterface,
    SLP: GpioInterface,
{
    /// Apply duty per the DRV8833 truth table
    ///
    /// Raises the sleep line first if the bridge is still asleep, so duty is
    /// never applied to a sleeping bridge. The leg being turned off is
    /// written first to keep the one-leg-active invariant through the
    /// transition.
    fn apply(&mut self, duty: u8, direction: Direction) -> Result<()> {
        if !self.enabled {
            self.enable()?;
        }

        match direction {
            Direction::Forward => {
                self.in2.write_duty(0)?;
                self.in1.write_duty(duty)?;
            }
            Direction::Reverse => {
                self.in1.write_duty(0)?;
                self.in2.write_duty(duty)?;
            }
            Direction::Neutral => {
                self.in1.write_duty(0)?;
                self.in2.write_duty(0)?;
            }
        }
        Ok(())
    }

    /// Coast: both legs zero
    ///
    /// The sleep line is left as-is so a following `apply` does not pay the
    /// bridge wake-up delay.
    fn stop(&mut self) -> Result<()> {
        self.in1.write_duty(0)?;
        self.in2.write_duty(0)?;
        Ok(())
    }
}
