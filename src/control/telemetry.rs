//! Periodic telemetry emission
//!
//! Read-only observation of one motor's control state at a fixed rate
//! (10 Hz in the reference tuning). Nothing here feeds back into control;
//! the reporter reads the last sampled values instead of triggering a bus
//! transaction of its own.

/// One observation of a motor's control state
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TelemetrySnapshot {
    /// Applied duty level
    pub duty: u8,
    /// Last raw current reading, milliamps
    pub raw_ma: f32,
    /// Smoothed current, milliamps
    pub filtered_ma: f32,
}

/// Destination for telemetry records
///
/// Implementations decide the wire format: a serial plotter line, a log
/// record, or a buffer a test inspects.
pub trait TelemetrySink {
    /// Consume one observation
    fn record(&mut self, snapshot: &TelemetrySnapshot);
}

/// Rate-gated telemetry emitter
///
/// Same non-blocking gating discipline as the regulators: compare the
/// millisecond clock against the last emission, wraparound-safe, no catch-up.
#[derive(Debug)]
pub struct TelemetryReporter {
    period_ms: u32,
    last_run_ms: u32,
}

impl TelemetryReporter {
    /// Create a reporter emitting every `period_ms` milliseconds
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms,
            last_run_ms: 0,
        }
    }

    /// Emit `snapshot` into `sink` if the period has elapsed
    ///
    /// Returns true when a record was emitted.
    pub fn poll<K: TelemetrySink>(
        &mut self,
        now_ms: u32,
        snapshot: TelemetrySnapshot,
        sink: &mut K,
    ) -> bool {
        if now_ms.wrapping_sub(self.last_run_ms) < self.period_ms {
            return false;
        }
        self.last_run_ms = now_ms;
        sink.record(&snapshot);
        true
    }
}

/// Sink that forwards records to the crate log macros
///
/// Emits `duty raw filtered` in the serial-plotter column format.
#[derive(Debug, Default)]
pub struct LogSink;

impl TelemetrySink for LogSink {
    fn record(&mut self, snapshot: &TelemetrySnapshot) {
        crate::log_info!(
            "{} {} {}",
            snapshot.duty,
            snapshot.raw_ma,
            snapshot.filtered_ma
        );
    }
}

/// Sink that buffers the most recent records (drops once full)
///
/// Used by host tests and useful as a flight-recorder style buffer on
/// targets without a console.
#[derive(Debug, Default)]
pub struct BufferSink<const N: usize> {
    records: heapless::Vec<TelemetrySnapshot, N>,
}

impl<const N: usize> BufferSink<N> {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self {
            records: heapless::Vec::new(),
        }
    }

    /// Records captured so far
    pub fn records(&self) -> &[TelemetrySnapshot] {
        &self.records
    }
}

impl<const N: usize> TelemetrySink for BufferSink<N> {
    fn record(&mut self, snapshot: &TelemetrySnapshot) {
        let _ = self.records.push(*snapshot);
    }
}
