//! Shared test doubles for the control-loop tests

use crate::devices::{CurrentSensor, SensorError};
use crate::libraries::motor_driver::{Direction, DutyOutput};
use crate::platform::Result;

/// Sensor that replays a scripted sequence of readings
///
/// Once the script is exhausted the last entry repeats, so "held constant"
/// scenarios only need one entry.
pub(crate) struct ScriptedSensor {
    script: Vec<core::result::Result<f32, SensorError>>,
    pos: usize,
}

impl ScriptedSensor {
    pub(crate) fn new(script: Vec<core::result::Result<f32, SensorError>>) -> Self {
        assert!(!script.is_empty());
        Self { script, pos: 0 }
    }

    pub(crate) fn constant(ma: f32) -> Self {
        Self::new(vec![Ok(ma)])
    }
}

impl CurrentSensor for ScriptedSensor {
    fn read_current_ma(&mut self) -> core::result::Result<f32, SensorError> {
        let reading = self.script[self.pos.min(self.script.len() - 1)];
        self.pos += 1;
        reading
    }
}

/// Duty output that records every commit
pub(crate) struct RecordingOutput {
    pub(crate) applied: Vec<(u8, Direction)>,
    pub(crate) stops: u32,
}

impl RecordingOutput {
    pub(crate) fn new() -> Self {
        Self {
            applied: Vec::new(),
            stops: 0,
        }
    }

    pub(crate) fn last_duty(&self) -> Option<u8> {
        self.applied.last().map(|(duty, _)| *duty)
    }
}

impl DutyOutput for RecordingOutput {
    fn apply(&mut self, duty: u8, direction: Direction) -> Result<()> {
        self.applied.push((duty, direction));
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.stops += 1;
        Ok(())
    }
}
