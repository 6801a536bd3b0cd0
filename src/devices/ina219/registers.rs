//! INA219 register definitions
//!
//! The INA219 exposes six 16-bit big-endian registers behind an 8-bit
//! register pointer. Configuration bit values below follow the datasheet
//! field layout (BRNG / PG / BADC / SADC / MODE).

// =============================================================================
// I2C Addresses
// =============================================================================

/// INA219 default I2C address (A1 = A0 = GND)
pub const INA219_ADDR: u8 = 0x40;

// =============================================================================
// Registers
// =============================================================================

/// Configuration register
pub const REG_CONFIG: u8 = 0x00;

/// Shunt voltage register (signed, 10 uV LSB)
pub const REG_SHUNT_VOLTAGE: u8 = 0x01;

/// Bus voltage register
pub const REG_BUS_VOLTAGE: u8 = 0x02;

/// Power register
pub const REG_POWER: u8 = 0x03;

/// Current register (signed, LSB set by calibration)
pub const REG_CURRENT: u8 = 0x04;

/// Calibration register
pub const REG_CALIBRATION: u8 = 0x05;

// =============================================================================
// Configuration register fields
// =============================================================================

/// Bus voltage range: 16 V
pub const CONFIG_BVOLTAGERANGE_16V: u16 = 0x0000;

/// Shunt gain /1, +/-40 mV range
pub const CONFIG_GAIN_1_40MV: u16 = 0x0000;

/// Bus ADC resolution: 11 bit
pub const CONFIG_BADCRES_11BIT: u16 = 0x0100;

/// Bus ADC resolution: 12 bit
pub const CONFIG_BADCRES_12BIT: u16 = 0x0180;

/// Shunt ADC resolution: 11 bit, single sample
pub const CONFIG_SADCRES_11BIT_1S: u16 = 0x0010;

/// Shunt ADC resolution: 12 bit, single sample
pub const CONFIG_SADCRES_12BIT_1S: u16 = 0x0018;

/// Mode: shunt and bus voltage, continuous conversion
pub const CONFIG_MODE_SANDBVOLT_CONTINUOUS: u16 = 0x0007;

// =============================================================================
// Calibration constants (16 V bus, 400 mA full scale, 0.1 ohm shunt)
// =============================================================================

/// Calibration register value for the 16 V / 400 mA profile
pub const CAL_16V_400MA: u16 = 8192;

/// Current register LSB for the 16 V / 400 mA profile, in mA (50 uA)
pub const CURRENT_LSB_16V_400MA_MA: f32 = 0.05;

/// Largest magnitude the 16 V / 400 mA profile can measure, in mA
pub const MAX_CURRENT_16V_400MA_MA: f32 = 400.0;

/// Shunt voltage register LSB in mV (10 uV)
pub const SHUNT_LSB_MV: f32 = 0.01;
