#![cfg_attr(not(test), no_std)]

//! hbridge-ctl - current-limited DC motor control for dual H-bridge drivers
//!
//! This library drives a DRV8833-class H-bridge from periodic INA219 current
//! measurements, regulating either commanded speed (bounded duty-cycle slew)
//! or commanded current (hysteresis-band feedback loop). Both regulators run
//! as cooperatively scheduled, non-blocking periodic tasks multiplexed onto a
//! single `tick()` polling call.

// Platform abstraction layer (I2C, PWM, GPIO, monotonic clock)
pub mod platform;

// Device drivers using platform abstraction (INA219 current sensor)
pub mod devices;

// Reusable hardware libraries (H-bridge duty output)
pub mod libraries;

// Core systems (logging)
pub mod core;

// Control loops (slew limiter, current limiter, dispatcher, telemetry)
pub mod control;
