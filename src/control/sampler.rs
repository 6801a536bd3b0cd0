//! Smoothed current sampling
//!
//! Wraps a `CurrentSensor` with the low-pass filter and keeps the last raw
//! and filtered readings around for the telemetry reporter, which observes
//! without triggering a bus transaction.

use super::filter::LowPassFilter;
use crate::devices::{CurrentSensor, SensorError};

/// Current source with single-pole smoothing
pub struct SampledCurrentSource<S: CurrentSensor> {
    sensor: S,
    filter: LowPassFilter,
    last_raw_ma: f32,
}

impl<S: CurrentSensor> SampledCurrentSource<S> {
    /// Create a new source over the given sensor
    pub fn new(sensor: S, filter_alpha: f32) -> Self {
        Self {
            sensor,
            filter: LowPassFilter::new(filter_alpha),
            last_raw_ma: 0.0,
        }
    }

    /// Take a reading and return the smoothed signed current in milliamps
    ///
    /// # Errors
    ///
    /// Propagates the sensor error; the filter state is not advanced on a
    /// failed read, so one bad sample does not disturb the smoothed value.
    pub fn sample(&mut self) -> Result<f32, SensorError> {
        let raw = self.sensor.read_current_ma()?;
        self.last_raw_ma = raw;
        Ok(self.filter.apply(raw))
    }

    /// Last raw reading, in milliamps
    pub fn last_raw_ma(&self) -> f32 {
        self.last_raw_ma
    }

    /// Current smoothed value, in milliamps
    pub fn filtered_ma(&self) -> f32 {
        self.filter.value()
    }

    /// Shared access to the underlying sensor
    pub fn sensor(&self) -> &S {
        &self.sensor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::testutil::ScriptedSensor;

    #[test]
    fn test_sample_smooths_and_records_raw() {
        let sensor = ScriptedSensor::constant(100.0);
        let mut source = SampledCurrentSource::new(sensor, 0.5);

        let first = source.sample().unwrap();
        assert!((first - 50.0).abs() < 0.001);
        assert_eq!(source.last_raw_ma(), 100.0);

        let second = source.sample().unwrap();
        assert!((second - 75.0).abs() < 0.001);
        assert_eq!(source.filtered_ma(), second);
    }

    #[test]
    fn test_failed_read_leaves_filter_untouched() {
        let sensor = ScriptedSensor::new(vec![
            Ok(100.0),
            Err(SensorError::Unavailable),
            Ok(100.0),
        ]);
        let mut source = SampledCurrentSource::new(sensor, 0.5);

        let before = source.sample().unwrap();
        assert_eq!(source.sample(), Err(SensorError::Unavailable));
        assert_eq!(source.filtered_ma(), before);

        // Next good sample continues from where the filter left off
        let after = source.sample().unwrap();
        assert!(after > before);
    }
}
