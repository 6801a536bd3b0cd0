//! Monotonic clock abstraction
//!
//! The control loops need two resolutions: microseconds for the current-limit
//! loop (500 Hz class) and milliseconds for the slew loop (50 Hz class). Both
//! are exposed as free-running `u32` counters that are allowed to wrap; all
//! period comparisons in this crate use `wrapping_sub` so a wrapped counter
//! never stalls a regulator.

use core::cell::Cell;

/// Platform-agnostic monotonic clock for the control loops.
///
/// Implementations must be monotonic (never go backward) between wraps of the
/// underlying counter.
pub trait Clock {
    /// Current time in milliseconds, wrapping at `u32::MAX`.
    fn now_ms(&self) -> u32;

    /// Current time in microseconds, wrapping at `u32::MAX`.
    fn now_us(&self) -> u32;
}

impl<T: Clock> Clock for &T {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }

    fn now_us(&self) -> u32 {
        (**self).now_us()
    }
}

/// Mock clock for testing with controllable time advancement.
///
/// Tests typically hold a reference to the clock and hand `&MockClock` to the
/// controller, so time can be advanced from outside.
///
/// # Example
///
/// ```
/// use hbridge_ctl::platform::traits::time::{Clock, MockClock};
///
/// let clock = MockClock::new();
/// assert_eq!(clock.now_us(), 0);
///
/// clock.advance_us(1_000);
/// assert_eq!(clock.now_us(), 1_000);
/// assert_eq!(clock.now_ms(), 1);
/// ```
#[derive(Default)]
pub struct MockClock {
    current_us: Cell<u64>,
}

impl MockClock {
    /// Create a new mock clock at t = 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock clock starting at an arbitrary microsecond count
    ///
    /// Useful for exercising counter wraparound near `u32::MAX`.
    pub fn starting_at_us(us: u64) -> Self {
        Self {
            current_us: Cell::new(us),
        }
    }

    /// Advance time by the given number of microseconds
    pub fn advance_us(&self, us: u64) {
        self.current_us.set(self.current_us.get().wrapping_add(us));
    }

    /// Advance time by the given number of milliseconds
    pub fn advance_ms(&self, ms: u64) {
        self.advance_us(ms * 1_000);
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u32 {
        (self.current_us.get() / 1_000) as u32
    }

    fn now_us(&self) -> u32 {
        self.current_us.get() as u32
    }
}

/// Clock backed by `embassy_time::Instant` for embedded targets.
#[cfg(feature = "embassy")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

#[cfg(feature = "embassy")]
impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        embassy_time::Instant::now().as_millis() as u32
    }

    fn now_us(&self) -> u32 {
        embassy_time::Instant::now().as_micros() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_clock_advance() {
        let clock = MockClock::new();
        assert_eq!(clock.now_us(), 0);
        assert_eq!(clock.now_ms(), 0);

        clock.advance_us(2_500);
        assert_eq!(clock.now_us(), 2_500);
        assert_eq!(clock.now_ms(), 2);

        clock.advance_ms(20);
        assert_eq!(clock.now_us(), 22_500);
        assert_eq!(clock.now_ms(), 22);
    }

    #[test]
    fn test_mock_clock_wraps_at_u32() {
        let clock = MockClock::starting_at_us(u32::MAX as u64 - 500);
        let before = clock.now_us();

        clock.advance_us(1_000);
        let after = clock.now_us();

        // Counter wrapped, but wrapping_sub recovers the elapsed time
        assert!(after < before);
        assert_eq!(after.wrapping_sub(before), 1_000);
    }

    #[test]
    fn test_clock_impl_for_reference() {
        fn elapsed<C: Clock>(clock: C) -> u32 {
            clock.now_us()
        }

        let clock = MockClock::new();
        clock.advance_us(42);
        assert_eq!(elapsed(&clock), 42);
    }
}
