//! Mock I2C implementation for testing
//!
//! Models a device with 16-bit big-endian registers behind an 8-bit register
//! pointer, which is how the INA219 (and most power-monitor parts) present
//! themselves on the bus.

use core::cell::{Cell, RefCell};

use crate::platform::{
    error::{I2cError, PlatformError},
    traits::{I2cConfig, I2cInterface},
    Result,
};

/// Number of 16-bit registers the mock device exposes
const REGISTER_COUNT: usize = 8;

/// Capacity of the register write log
const WRITE_LOG_CAPACITY: usize = 16;

/// Mock I2C implementation
///
/// Holds a small register file, logs register writes for test verification,
/// and can be told to fail the next N read transactions. Register state uses
/// interior mutability so tests can adjust readings through a shared
/// reference after the mock has been moved into a driver.
#[derive(Debug)]
pub struct MockI2c {
    config: I2cConfig,
    regs: RefCell<[u16; REGISTER_COUNT]>,
    pointer: Cell<u8>,
    writes: RefCell<heapless::Vec<(u8, u16), WRITE_LOG_CAPACITY>>,
    fail_reads: Cell<u8>,
}

impl MockI2c {
    /// Create a new mock I2C bus
    pub fn new(config: I2cConfig) -> Self {
        Self {
            config,
            regs: RefCell::new([0; REGISTER_COUNT]),
            pointer: Cell::new(0),
            writes: RefCell::new(heapless::Vec::new()),
            fail_reads: Cell::new(0),
        }
    }

    /// Set a device register (for programming sensor readings)
    pub fn set_register(&self, reg: u8, value: u16) {
        self.regs.borrow_mut()[reg as usize % REGISTER_COUNT] = value;
    }

    /// Read back a device register (for verifying driver writes)
    pub fn register(&self, reg: u8) -> u16 {
        self.regs.borrow()[reg as usize % REGISTER_COUNT]
    }

    /// Fail the next `n` read or write-read transactions with a NACK
    pub fn fail_next_reads(&self, n: u8) {
        self.fail_reads.set(n);
    }

    /// Register writes observed so far, as `(register, value)` pairs
    pub fn writes(&self) -> heapless::Vec<(u8, u16), WRITE_LOG_CAPACITY> {
        self.writes.borrow().clone()
    }

    /// Configured bus frequency
    pub fn frequency(&self) -> u32 {
        self.config.frequency
    }

    fn take_failure(&self) -> bool {
        let remaining = self.fail_reads.get();
        if remaining > 0 {
            self.fail_reads.set(remaining - 1);
            true
        } else {
            false
        }
    }

    fn load(&self, reg: u8, buffer: &mut [u8]) {
        let value = self.register(reg);
        let bytes = value.to_be_bytes();
        let n = buffer.len().min(2);
        buffer[..n].copy_from_slice(&bytes[..n]);
    }
}

impl I2cInterface for MockI2c {
    fn write(&mut self, _addr: u8, data: &[u8]) -> Result<()> {
        match data {
            // Bare register pointer update
            [reg] => self.pointer.set(*reg),
            // Pointer + 16-bit register value
            [reg, hi, lo] => {
                self.pointer.set(*reg);
                let value = u16::from_be_bytes([*hi, *lo]);
                self.set_register(*reg, value);
                let _ = self.writes.borrow_mut().push((*reg, value));
            }
            _ => return Err(PlatformError::I2c(I2cError::BusError)),
        }
        Ok(())
    }

    fn read(&mut self, _addr: u8, buffer: &mut [u8]) -> Result<()> {
        if self.take_failure() {
            return Err(PlatformError::I2c(I2cError::Nack));
        }
        self.load(self.pointer.get(), buffer);
        Ok(())
    }

    fn write_read(&mut self, _addr: u8, write_data: &[u8], read_buffer: &mut [u8]) -> Result<()> {
        if self.take_failure() {
            return Err(PlatformError::I2c(I2cError::Nack));
        }
        let [reg] = write_data else {
            return Err(PlatformError::I2c(I2cError::BusError));
        };
        self.pointer.set(*reg);
        self.load(*reg, read_buffer);
        Ok(())
    }
}
