//! Mock platform implementations for testing
//!
//! This module provides mock implementations of the platform traits so the
//! control loops and device drivers can be tested on the host without
//! hardware. Everything here is no_std-compatible; state that tests need to
//! poke after handing a mock to a driver sits behind interior mutability.
//!
//! # Feature Gate
//!
//! Available during test builds (`#[cfg(test)]`) and when the `mock` feature
//! is enabled, so downstream firmware can reuse these doubles in host tests.

mod gpio;
mod i2c;
mod pwm;

pub use gpio::MockGpio;
pub use i2c::MockI2c;
pub use pwm::MockPwm;

// The mock clock lives with the Clock trait so doc examples can use it
// without the mock feature.
pub use crate::platform::traits::time::MockClock;
