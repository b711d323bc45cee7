//! High-level operations.
//!
//! This module contains the implementation of Slipway commands.

pub mod configure;
pub mod doctor;
pub mod generate;

pub use configure::{configure, ConfigureOptions, ConfigureOutcome};
pub use doctor::{doctor, format_report, CheckResult, DoctorOptions, DoctorReport};
pub use generate::{generate, GenerateOptions};
