//! Reusable hardware libraries

pub mod motor_driver;
