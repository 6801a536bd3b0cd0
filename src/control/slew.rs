//! Duty-cycle slew rate limiter
//!
//! Bounds the rate of duty change to limit inrush current and mechanical
//! jerk when the motor is speed-controlled. A fixed linear ramp gives a
//! predictable worst-case ramp time of `ceil(target / step)` periods and
//! needs only integer arithmetic.

/// Periodic duty ramp toward a target setpoint
///
/// `try_run` gates execution on the millisecond clock; `ramp` is the pure
/// step function, kept separate so it can be tested without a clock.
#[derive(Debug)]
pub struct SlewRateRegulator {
    step: u8,
    target: u8,
    period_ms: u32,
    last_run_ms: u32,
}

impl SlewRateRegulator {
    /// Create a regulator stepping `step` per period toward `target`
    pub fn new(step: u8, target: u8, period_ms: u32) -> Self {
        Self {
            step,
            target,
            period_ms,
            last_run_ms: 0,
        }
    }

    /// Change the cruise setpoint the ramp moves toward
    pub fn set_target(&mut self, target: u8) {
        self.target = target;
    }

    /// Current cruise setpoint
    pub fn target(&self) -> u8 {
        self.target
    }

    /// Gate on the loop period; latches the timestamp when due
    ///
    /// Uses wrapping subtraction so a wrapped millisecond counter never
    /// stalls the loop. A missed deadline delays the next step; there is no
    /// catch-up.
    pub fn try_run(&mut self, now_ms: u32) -> bool {
        if now_ms.wrapping_sub(self.last_run_ms) < self.period_ms {
            return false;
        }
        self.last_run_ms = now_ms;
        true
    }

    /// Move `duty` at most one step toward the target
    ///
    /// Snaps exactly onto the target when within one step of it, so a ramp
    /// down to zero lands on true zero instead of oscillating below the step
    /// size, and a ramp up terminates instead of approaching asymptotically.
    pub fn ramp(&self, duty: u8) -> u8 {
        if duty < self.target {
            let remaining = self.target - duty;
            if remaining <= self.step {
                self.target
            } else {
                duty + self.step
            }
        } else {
            let remaining = duty - self.target;
            if remaining <= self.step {
                self.target
            } else {
                duty - self.step
            }
        }
    }
}
