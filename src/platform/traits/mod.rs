//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod gpio;
pub mod i2c;
pub mod pwm;
pub mod time;

// Re-export trait interfaces
pub use gpio::GpioInterface;
pub use i2c::{I2cConfig, I2cInterface};
pub use pwm::PwmInterface;
pub use time::Clock;
