//! Single-pole low-pass filter
//!
//! Exponential smoothing over sensor readings: `v += alpha * (raw - v)`.
//! Reduces shunt-measurement noise at the cost of response lag; the "slow"
//! alpha used for the current loop trades a few loop periods of lag for a
//! stable hysteresis comparison.

/// Exponential smoothing filter state
///
/// One running value plus a coefficient. Mutated only by `apply`; owned
/// exclusively by the sampled current source.
#[derive(Debug, Clone, Copy)]
pub struct LowPassFilter {
    alpha: f32,
    value: f32,
}

impl LowPassFilter {
    /// Create a filter with the given smoothing coefficient
    ///
    /// Alpha is clamped to (0, 1]; 1.0 is pass-through.
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(f32::MIN_POSITIVE, 1.0),
            value: 0.0,
        }
    }

    /// Feed a raw sample, returning the smoothed value
    pub fn apply(&mut self, raw: f32) -> f32 {
        self.value += self.alpha * (raw - self.value);
        self.value
    }

    /// Current smoothed value without feeding a sample
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Reset the running value to zero
    pub fn reset(&mut self) {
        self.value = 0.0;
    }
}
