//! Command implementations

pub mod completions;
pub mod configure;
pub mod doctor;
pub mod generate;
