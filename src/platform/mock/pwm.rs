//! Mock PWM implementation for testing

use crate::platform::{traits::PwmInterface, Result};

/// Mock PWM implementation
///
/// Tracks the last duty written and a write count for test verification.
#[derive(Debug, Default)]
pub struct MockPwm {
    duty: u8,
    writes: u32,
}

impl MockPwm {
    /// Create a new mock PWM pin at duty 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of duty writes observed
    pub fn write_count(&self) -> u32 {
        self.writes
    }
}

impl PwmInterface for MockPwm {
    fn write_duty(&mut self, duty: u8) -> Result<()> {
        self.duty = duty;
        self.writes += 1;
        Ok(())
    }

    fn duty(&self) -> u8 {
        self.duty
    }
}
