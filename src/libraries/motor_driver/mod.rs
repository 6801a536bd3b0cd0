//! Motor driver abstraction
//!
//! This module provides the duty output contract the control loops write
//! through, plus the H-bridge implementation for DRV8833-class drivers
//! (two PWM inputs per motor, sleep line shared across the bridge).
//!
//! Drive direction is an explicit tagged type rather than a signed speed;
//! the sign multiplier is derived only at the single point where a current
//! reading is interpreted, which keeps sign errors out of the duty math.

pub mod hbridge;

// Re-export main types
pub use hbridge::HBridgeOutput;

use crate::platform::Result;

/// Commanded drive direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Drive current through leg 1
    Forward,
    /// Drive current through leg 2
    Reverse,
    /// No drive commanded (coast)
    #[default]
    Neutral,
}

impl Direction {
    /// Sign multiplier for interpreting a signed current reading
    ///
    /// Current flows negative when driving in reverse; multiplying a raw
    /// reading by this sign yields the magnitude relative to the commanded
    /// direction. Neutral maps to 0, which disables current interpretation.
    pub const fn sign(self) -> i8 {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
            Direction::Neutral => 0,
        }
    }
}

/// Duty output contract (platform-independent)
///
/// Implementations own the physical output pins for one motor. At most one
/// H-bridge leg may be non-zero at a time; `Neutral` and `stop` drive both
/// legs to zero (coast).
pub trait DutyOutput {
    /// Apply a duty magnitude (0-255) in the given direction
    ///
    /// # Errors
    ///
    /// Returns `PlatformError` if the output hardware fails.
    fn apply(&mut self, duty: u8, direction: Direction) -> Result<()>;

    /// Drive both legs to zero (coast)
    ///
    /// # Errors
    ///
    /// Returns `PlatformError` if the output hardware fails.
    fn stop(&mut self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_sign_mapping() {
        assert_eq!(Direction::Forward.sign(), 1);
        assert_eq!(Direction::Reverse.sign(), -1);
        assert_eq!(Direction::Neutral.sign(), 0);
    }
}
