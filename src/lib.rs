//! Slipway - a CMake front-end for design-driven projects
//!
//! This crate provides the core library functionality for Slipway:
//! regenerating the CMake include fragments that are derived from the
//! project design file, and driving the cmake configure step with the
//! selected build type and toolchain file.

pub mod design;
pub mod generator;
pub mod ops;
pub mod util;

/// Test utilities and mocks for Slipway unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides a mock process runner so orchestration
/// logic can be exercised without spawning real subprocesses.
#[cfg(test)]
pub mod test_support;

pub use design::{TransformJob, TransformTool};
pub use generator::{CmakeInvocation, HostPlatform};
pub use util::config::Config;
pub use util::context::GlobalContext;
