//! Hysteresis-band current limiter
//!
//! Bang-bang regulator keeping average current near, but not above, a
//! configured ceiling. Runs an order of magnitude faster than the slew loop
//! because electrical current responds much faster than the mechanical load.
//!
//! The dead band `[limit * lower_bound, limit]` is what prevents
//! high-frequency duty chatter when the current sits near the ceiling: inside
//! the band no correction is taken.

/// Periodic bang-bang current regulator
///
/// `try_run` gates on the microsecond clock; `adjust` is the pure correction
/// rule over the direction-relative current.
#[derive(Debug)]
pub struct CurrentLimitRegulator {
    limit_ma: f32,
    lower_bound_ma: f32,
    step: u8,
    period_us: u32,
    last_run_us: u32,
}

impl CurrentLimitRegulator {
    /// Create a regulator for the given ceiling
    ///
    /// `lower_bound` is the band floor as a fraction of the limit
    /// (0.85 in the reference tuning).
    pub fn new(limit_ma: f32, lower_bound: f32, step: u8, period_us: u32) -> Self {
        Self {
            limit_ma,
            lower_bound_ma: limit_ma * lower_bound,
            step,
            period_us,
            last_run_us: 0,
        }
    }

    /// Configured ceiling in milliamps
    pub fn limit_ma(&self) -> f32 {
        self.limit_ma
    }

    /// Gate on the loop period; latches the timestamp when due
    ///
    /// Wrapping subtraction keeps the gate correct across microsecond counter
    /// wraparound (a `u32` microsecond counter wraps every ~71 minutes).
    pub fn try_run(&mut self, now_us: u32) -> bool {
        if now_us.wrapping_sub(self.last_run_us) < self.period_us {
            return false;
        }
        self.last_run_us = now_us;
        true
    }

    /// One bang-bang correction over the direction-relative current
    ///
    /// - above the ceiling: back off one step (saturating at 0)
    /// - below the band floor: advance one step (saturating at 255)
    /// - inside the band: hold
    pub fn adjust(&self, effective_ma: f32, duty: u8) -> u8 {
        if effective_ma > self.limit_ma {
            duty.saturating_sub(self.step)
        } else if effective_ma < self.lower_bound_ma {
            duty.saturating_add(self.step)
        } else {
            duty
        }
    }
}
