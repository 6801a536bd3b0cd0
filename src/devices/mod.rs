//! Device drivers
//!
//! Drivers are written against the platform abstraction traits so they can be
//! exercised on the host with the mock platform.

pub mod ina219;

use core::fmt;

/// Current sensor abstraction
///
/// The control loops sample through this trait; `ina219::Ina219` is the
/// hardware implementation. Readings are signed milliamps, the sign carrying
/// the physical current direction through the shunt.
pub trait CurrentSensor {
    /// Read the instantaneous current in milliamps
    ///
    /// # Errors
    ///
    /// Returns `SensorError::Unavailable` if the transport fails or the
    /// reading is outside the calibrated range. A failed read is never
    /// reported as a zero current.
    fn read_current_ma(&mut self) -> Result<f32, SensorError>;
}

/// Current sensor errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sensor has not been configured (calibration not written)
    NotConfigured,
    /// Transport failure or reading outside the calibrated range
    Unavailable,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::NotConfigured => write!(f, "sensor not configured"),
            SensorError::Unavailable => write!(f, "sensor reading unavailable"),
        }
    }
}
