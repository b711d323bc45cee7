//! Implementation of `slipway configure`.
//!
//! The sequence is fixed: regenerate the two CMake fragments from the
//! design, report the chosen build type and toolchain file, then run the
//! cmake configure step and surface its exit code. Transform statuses are
//! logged but never gate the sequence; only the cmake status decides the
//! outcome.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::design::{cmake_fragment_jobs, TransformTool};
use crate::generator::{CmakeInvocation, HostPlatform};
use crate::util::fs::ensure_dir;
use crate::util::process::{ProcessRunner, SystemRunner};

/// Build type used when neither the CLI nor configuration selects one.
pub const DEFAULT_BUILD_TYPE: &str = "Release";

/// Toolchain file used when neither the CLI nor configuration selects one.
pub const DEFAULT_TOOLCHAIN_FILE: &str = "default_configuration.cmake";

/// Options for the configure command.
#[derive(Debug, Clone)]
pub struct ConfigureOptions {
    /// CMake build type (open set: Debug, Release, RelWithDebInfo, ...)
    pub build_type: String,

    /// Toolchain file passed to cmake by path
    pub toolchain_file: PathBuf,

    /// Explicit cmake generator, replacing the platform-derived one
    pub generator: Option<String>,

    /// Override for the external transform utility
    pub transform_command: Option<PathBuf>,
}

impl Default for ConfigureOptions {
    fn default() -> Self {
        ConfigureOptions {
            build_type: DEFAULT_BUILD_TYPE.to_string(),
            toolchain_file: PathBuf::from(DEFAULT_TOOLCHAIN_FILE),
            generator: None,
            transform_command: None,
        }
    }
}

/// Result of a configure run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigureOutcome {
    /// Exit status of the cmake subprocess, or `None` when the platform
    /// has no generator mapping and cmake was never launched.
    pub cmake_status: Option<i32>,
}

impl ConfigureOutcome {
    /// The code the process should exit with: cmake's own exit code, or
    /// 0 when the configure step was skipped.
    pub fn exit_code(&self) -> i32 {
        self.cmake_status.unwrap_or(0)
    }

    /// Whether the run counts as successful.
    pub fn success(&self) -> bool {
        self.exit_code() == 0
    }
}

/// Run the configure command against the project at `root`.
pub fn configure(root: &Path, opts: &ConfigureOptions) -> Result<ConfigureOutcome> {
    run_with(root, HostPlatform::current(), opts, &SystemRunner)
}

fn run_with(
    root: &Path,
    platform: HostPlatform,
    opts: &ConfigureOptions,
    runner: &dyn ProcessRunner,
) -> Result<ConfigureOutcome> {
    let tool = TransformTool::new(opts.transform_command.clone());

    for job in cmake_fragment_jobs() {
        if let Some(dir) = job.output_dir() {
            ensure_dir(&root.join(dir))?;
        }

        let process = tool.process(&job).cwd(root);
        match runner.run(&process) {
            Ok(0) => {}
            Ok(code) => tracing::warn!(
                "transform for {} exited with status {}; continuing",
                job.output.display(),
                code
            ),
            Err(e) => tracing::warn!(
                "transform for {} did not run: {:#}; continuing",
                job.output.display(),
                e
            ),
        }
    }

    tracing::info!(
        "build type [{}], toolchain file [{}]",
        opts.build_type,
        opts.toolchain_file.display()
    );

    let invocation = match opts.generator {
        Some(ref generator) => Some(
            CmakeInvocation::new(opts.build_type.as_str(), &opts.toolchain_file)
                .generator(generator.clone()),
        ),
        None => {
            CmakeInvocation::for_platform(platform, opts.build_type.as_str(), &opts.toolchain_file)
        }
    };

    let Some(invocation) = invocation else {
        tracing::debug!("no cmake generator mapping for this platform; skipping configure");
        return Ok(ConfigureOutcome { cmake_status: None });
    };

    tracing::info!("calling cmake");
    let process = invocation.to_process().cwd(root);
    let status = runner.run(&process)?;

    if status != 0 {
        tracing::error!("cmake exited with status {}", status);
    }

    Ok(ConfigureOutcome {
        cmake_status: Some(status),
    })
}
