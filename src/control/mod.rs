//! Motor control loops
//!
//! THE CORE of the crate: two cooperatively scheduled periodic regulators
//! sharing one actuator state.
//!
//! - [`slew`]: bounded duty-cycle ramp toward a cruise setpoint (50 Hz class)
//! - [`current_limit`]: hysteresis-band current limiter (500 Hz class)
//! - [`motor`]: per-motor state and the `tick()` dispatcher
//! - [`sampler`]/[`filter`]: smoothed current sampling
//! - [`telemetry`]: periodic read-only observation
//!
//! All periodicity is emulated by comparing a monotonic clock against each
//! regulator's last-run timestamp on every `tick()`; there are no timers, no
//! interrupts and no blocking calls.

pub mod config;
pub mod current_limit;
pub mod filter;
pub mod motor;
pub mod sampler;
pub mod slew;
pub mod telemetry;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export main types
pub use config::{ConfigError, MotorConfig};
pub use current_limit::CurrentLimitRegulator;
pub use filter::LowPassFilter;
pub use motor::{ControlMode, MotorController, MotorError};
pub use sampler::SampledCurrentSource;
pub use slew::SlewRateRegulator;
pub use telemetry::{BufferSink, LogSink, TelemetryReporter, TelemetrySink, TelemetrySnapshot};
