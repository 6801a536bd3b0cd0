//! Core infrastructure
//!
//! Fundamental facilities shared by the control and driver layers.

pub mod logging;
