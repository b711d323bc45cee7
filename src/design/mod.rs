//! Design-transform invocations.
//!
//! A Slipway project keeps its build-configuration fragments generated:
//! an external transform utility reads the project design file through an
//! XSLT stylesheet and writes the corresponding CMake include file. This
//! module models one such invocation and the utility that executes it.
//!
//! The utility itself is an external collaborator. Slipway forwards the
//! stylesheet path, the output path, and two integer flags verbatim; the
//! flags' semantics belong to the utility, not to Slipway.

use std::path::{Path, PathBuf};

use crate::util::process::ProcessBuilder;

/// Program name of the external transform utility, resolved via PATH
/// unless overridden in configuration or on the command line.
pub const DEFAULT_TRANSFORM_COMMAND: &str = "transform-design";

/// Relative path of the design file that marks a project root.
pub fn design_file() -> PathBuf {
    Path::new("Design").join("Design.xml")
}

/// One transform invocation: a stylesheet applied to the project design,
/// written to a generated output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformJob {
    /// Stylesheet path, relative to the project root.
    pub stylesheet: PathBuf,

    /// Generated output path, relative to the project root.
    pub output: PathBuf,

    /// Opaque flags forwarded to the transform utility unchanged.
    pub flags: [i32; 2],
}

impl TransformJob {
    /// Create a job with both pass-through flags zeroed.
    pub fn new(stylesheet: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        TransformJob {
            stylesheet: stylesheet.into(),
            output: output.into(),
            flags: [0, 0],
        }
    }

    /// Directory the output file lands in, relative to the project root.
    pub fn output_dir(&self) -> Option<&Path> {
        self.output.parent().filter(|p| !p.as_os_str().is_empty())
    }
}

/// The two CMake fragments every project regenerates before configuring:
/// the AddressSpace include list and the Device header list.
pub fn cmake_fragment_jobs() -> Vec<TransformJob> {
    vec![
        TransformJob::new(
            Path::new("AddressSpace").join("designToGeneratedCmakeAddressSpace.xslt"),
            Path::new("AddressSpace").join("cmake_generated.cmake"),
        ),
        TransformJob::new(
            Path::new("Device").join("designToGeneratedCmakeDevice.xslt"),
            Path::new("Device").join("generated").join("cmake_header.cmake"),
        ),
    ]
}

/// Handle on the external transform utility.
#[derive(Debug, Clone)]
pub struct TransformTool {
    command: PathBuf,
}

impl TransformTool {
    /// Create a tool handle, falling back to [`DEFAULT_TRANSFORM_COMMAND`].
    pub fn new(command: Option<PathBuf>) -> Self {
        TransformTool {
            command: command.unwrap_or_else(|| PathBuf::from(DEFAULT_TRANSFORM_COMMAND)),
        }
    }

    /// The program that will be invoked.
    pub fn command(&self) -> &Path {
        &self.command
    }

    /// Prepare the invocation for one job. The argument order is part of
    /// the utility's contract: stylesheet, output, then the two flags.
    pub fn process(&self, job: &TransformJob) -> ProcessBuilder {
        ProcessBuilder::new(&self.command)
            .arg(&job.stylesheet)
            .arg(&job.output)
            .args(job.flags.iter().map(|f| f.to_string()))
    }
}

impl Default for TransformTool {
    fn default() -> Self {
        Self::new(None)
    }
}
