//! Mock GPIO implementation for testing

use crate::platform::{
    error::{GpioError, PlatformError},
    traits::GpioInterface,
    Result,
};

/// Mock GPIO implementation
///
/// Tracks pin level for test verification. An input-mode pin rejects writes
/// so miswired drivers fail loudly in tests.
#[derive(Debug)]
pub struct MockGpio {
    state: bool,
    output: bool,
}

impl MockGpio {
    /// Create a new mock GPIO in output mode, driven low
    pub fn new_output() -> Self {
        Self {
            state: false,
            output: true,
        }
    }

    /// Create a new mock GPIO in input mode
    pub fn new_input() -> Self {
        Self {
            state: false,
            output: false,
        }
    }
}

impl GpioInterface for MockGpio {
    fn set_high(&mut self) -> Result<()> {
        if !self.output {
            return Err(PlatformError::Gpio(GpioError::InvalidMode));
        }
        self.state = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        if !self.output {
            return Err(PlatformError::Gpio(GpioError::InvalidMode));
        }
        self.state = false;
        Ok(())
    }

    fn is_high(&self) -> bool {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_gpio_output() {
        let mut pin = MockGpio::new_output();
        assert!(!pin.is_high());

        pin.set_high().unwrap();
        assert!(pin.is_high());

        pin.set_low().unwrap();
        assert!(!pin.is_high());
    }

    #[test]
    fn test_mock_gpio_input_rejects_writes() {
        let mut pin = MockGpio::new_input();
        assert_eq!(
            pin.set_high(),
            Err(PlatformError::Gpio(GpioError::InvalidMode))
        );
    }
}
