//! Implementation of `slipway generate`.
//!
//! Regenerates the design-derived CMake fragments without touching the
//! cmake configure step. Unlike `configure`, a failing transform here is
//! the command's own failure and is reported as such.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::design::{cmake_fragment_jobs, TransformTool};
use crate::util::fs::ensure_dir;
use crate::util::process::{ProcessRunner, SystemRunner};

/// Options for the generate command.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Override for the external transform utility
    pub transform_command: Option<PathBuf>,
}

/// Regenerate the CMake fragments for the project at `root`.
pub fn generate(root: &Path, opts: &GenerateOptions) -> Result<()> {
    run_with(root, opts, &SystemRunner)
}

fn run_with(root: &Path, opts: &GenerateOptions, runner: &dyn ProcessRunner) -> Result<()> {
    let tool = TransformTool::new(opts.transform_command.clone());

    for job in cmake_fragment_jobs() {
        if let Some(dir) = job.output_dir() {
            ensure_dir(&root.join(dir))?;
        }

        tracing::info!("regenerating {}", job.output.display());

        let process = tool.process(&job).cwd(root);
        let code = runner.run(&process)?;
        if code != 0 {
            bail!(
                "transform for {} failed with status {} (`{}`)",
                job.output.display(),
                code,
                process.display_command()
            );
        }
    }

    Ok(())
}
