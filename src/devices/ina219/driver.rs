//! INA219 I2C driver implementation
//!
//! Platform-agnostic driver over the crate's `I2cInterface`. The calibration
//! profile must be written once (`init`) before the first reading; a read on
//! an unconfigured sensor is an error, not a zero.

use super::registers;
use crate::devices::{CurrentSensor, SensorError};
use crate::platform::traits::I2cInterface;

/// Calibration profile selecting measurable range and ADC resolution
///
/// Both profiles cover 16 V bus / 400 mA shunt current with a 50 uA current
/// LSB. The 11-bit variant halves conversion time at the cost of one bit of
/// resolution, which suits the 500 Hz current loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationProfile {
    /// 16 V / 400 mA, 12-bit conversions
    Range16V400mA,
    /// 16 V / 400 mA, 11-bit conversions (faster)
    Range16V400mA11Bit,
}

impl CalibrationProfile {
    /// Configuration register value for this profile
    pub const fn config_bits(self) -> u16 {
        let adc = match self {
            CalibrationProfile::Range16V400mA => {
                registers::CONFIG_BADCRES_12BIT | registers::CONFIG_SADCRES_12BIT_1S
            }
            CalibrationProfile::Range16V400mA11Bit => {
                registers::CONFIG_BADCRES_11BIT | registers::CONFIG_SADCRES_11BIT_1S
            }
        };
        registers::CONFIG_BVOLTAGERANGE_16V
            | registers::CONFIG_GAIN_1_40MV
            | adc
            | registers::CONFIG_MODE_SANDBVOLT_CONTINUOUS
    }

    /// Calibration register value for this profile
    pub const fn calibration(self) -> u16 {
        registers::CAL_16V_400MA
    }

    /// Current register LSB in milliamps
    pub const fn current_lsb_ma(self) -> f32 {
        registers::CURRENT_LSB_16V_400MA_MA
    }

    /// Largest current magnitude the profile can measure, in milliamps
    pub const fn max_current_ma(self) -> f32 {
        registers::MAX_CURRENT_16V_400MA_MA
    }
}

/// INA219 driver
///
/// # Type Parameters
///
/// * `I2C` - Any type implementing the crate's `I2cInterface`
pub struct Ina219<I2C: I2cInterface> {
    i2c: I2C,
    addr: u8,
    profile: CalibrationProfile,
    configured: bool,
}

impl<I2C: I2cInterface> Ina219<I2C> {
    /// Create a new driver (unconfigured)
    ///
    /// Call `init()` to write configuration and calibration before reading.
    pub fn new(i2c: I2C, addr: u8, profile: CalibrationProfile) -> Self {
        Self {
            i2c,
            addr,
            profile,
            configured: false,
        }
    }

    /// Write configuration and calibration registers
    ///
    /// # Errors
    ///
    /// Returns `SensorError::Unavailable` if either register write fails.
    pub fn init(&mut self) -> Result<(), SensorError> {
        self.write_register(registers::REG_CONFIG, self.profile.config_bits())?;
        self.write_register(registers::REG_CALIBRATION, self.profile.calibration())?;
        self.configured = true;
        crate::log_debug!("ina219 configured, addr={}", self.addr);
        Ok(())
    }

    /// Read the shunt voltage in millivolts (bring-up diagnostics)
    ///
    /// # Errors
    ///
    /// Returns `SensorError::NotConfigured` before `init()`, or
    /// `SensorError::Unavailable` on a transport failure.
    pub fn read_shunt_voltage_mv(&mut self) -> Result<f32, SensorError> {
        if !self.configured {
            return Err(SensorError::NotConfigured);
        }
        let raw = self.read_register(registers::REG_SHUNT_VOLTAGE)? as i16;
        Ok(raw as f32 * registers::SHUNT_LSB_MV)
    }

    /// Selected calibration profile
    pub fn profile(&self) -> CalibrationProfile {
        self.profile
    }

    /// Shared access to the underlying bus (used by host tests)
    pub fn bus(&self) -> &I2C {
        &self.i2c
    }

    fn write_register(&mut self, reg: u8, value: u16) -> Result<(), SensorError> {
        let bytes = value.to_be_bytes();
        self.i2c
            .write(self.addr, &[reg, bytes[0], bytes[1]])
            .map_err(|_| SensorError::Unavailable)
    }

    fn read_register(&mut self, reg: u8) -> Result<u16, SensorError> {
        let mut buf = [0u8; 2];
        self.i2c
            .write_read(self.addr, &[reg], &mut buf)
            .map_err(|_| SensorError::Unavailable)?;
        Ok(u16::from_be_bytes(buf))
    }
}

impl<I2C: I2cInterface> CurrentSensor for Ina219<I2C> {
    /// Read the signed current in milliamps
    ///
    /// The CURRENT register is a two's-complement count of calibration LSBs.
    /// A reading beyond the profile's measurable range means the conversion
    /// is not trustworthy (saturated ADC or calibration lost on a brown-out)
    /// and is reported as `Unavailable` rather than passed to the control
    /// loop.
    fn read_current_ma(&mut self) -> Result<f32, SensorError> {
        if !self.configured {
            return Err(SensorError::NotConfigured);
        }
        let raw = self.read_register(registers::REG_CURRENT)? as i16;
        let ma = raw as f32 * self.profile.current_lsb_ma();
        if ma.abs() > self.profile.max_current_ma() {
            return Err(SensorError::Unavailable);
        }
        Ok(ma)
    }
}
