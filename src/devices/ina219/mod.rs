//! INA219 current sensor driver
//!
//! High-side current/power monitor with a shunt ADC, accessed over I2C.
//! Only the parts the motor controller needs are implemented: configuration,
//! calibration, and signed current readout, plus the shunt voltage for
//! bring-up diagnostics.

pub mod driver;
pub mod registers;

pub use driver::{CalibrationProfile, Ina219};
