//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the peripherals the motor
//! controller touches: an I2C bus for the current sensor, two PWM legs and a
//! sleep line for the H-bridge, and a monotonic clock. All platform-specific
//! code must stay behind these traits so the control loops are host-testable.

pub mod error;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{Clock, GpioInterface, I2cConfig, I2cInterface, PwmInterface};
