//! GPIO interface trait
//!
//! Digital output abstraction used for the H-bridge sleep/enable line.

use crate::platform::Result;

/// GPIO output interface
pub trait GpioInterface {
    /// Drive the pin high
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio` if the pin is not configured as an output.
    fn set_high(&mut self) -> Result<()>;

    /// Drive the pin low
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio` if the pin is not configured as an output.
    fn set_low(&mut self) -> Result<()>;

    /// Current output state (true = high)
    fn is_high(&self) -> bool;
}
