//! PWM interface trait
//!
//! This module defines the duty-cycle output interface the H-bridge driver
//! writes through. Duty is expressed as an 8-bit magnitude (0-255), matching
//! the resolution the control loops operate in.

use crate::platform::Result;

/// PWM output pin interface
///
/// Platform implementations must provide this interface for each H-bridge leg.
pub trait PwmInterface {
    /// Set the output duty cycle (0 = fully off, 255 = fully on)
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Pwm` if the PWM hardware fails.
    fn write_duty(&mut self, duty: u8) -> Result<()>;

    /// Last duty cycle written to the pin
    fn duty(&self) -> u8;
}
