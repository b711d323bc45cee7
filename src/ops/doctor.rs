//! Environment and project health checks.
//!
//! The `doctor` command performs fast checks to verify that the external
//! collaborators are available and the project layout is in place.
//!
//! ## Checks Performed
//!
//! - cmake availability and version
//! - transform utility availability
//! - design file (project root marker)
//! - transform stylesheets
//! - toolchain file

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::design::{cmake_fragment_jobs, design_file, TransformTool};
use crate::generator::detect_cmake_version;
use crate::ops::configure::DEFAULT_TOOLCHAIN_FILE;
use crate::util::process::find_executable;

/// Result of a single health check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check
    pub name: String,

    /// Whether the check passed
    pub passed: bool,

    /// Human-readable status message
    pub message: String,

    /// Path to the tool or file (if applicable)
    pub path: Option<PathBuf>,

    /// Version string (if applicable)
    pub version: Option<String>,

    /// Whether this check is required or optional
    pub required: bool,
}

impl CheckResult {
    /// Create a passing check result.
    pub fn pass(name: impl Into<String>, message: impl Into<String>) -> Self {
        CheckResult {
            name: name.into(),
            passed: true,
            message: message.into(),
            path: None,
            version: None,
            required: true,
        }
    }

    /// Create a failing check result.
    pub fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        CheckResult {
            name: name.into(),
            passed: false,
            message: message.into(),
            path: None,
            version: None,
            required: true,
        }
    }

    /// Mark this check as optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Set the tool path.
    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    /// Set the version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

/// Summary of all health checks.
#[derive(Debug, Clone, Default)]
pub struct DoctorReport {
    /// Individual check results
    pub checks: Vec<CheckResult>,
}

impl DoctorReport {
    /// Create a new empty report.
    pub fn new() -> Self {
        DoctorReport { checks: Vec::new() }
    }

    /// Add a check result.
    pub fn add(&mut self, check: CheckResult) {
        self.checks.push(check);
    }

    /// Check if all required checks passed.
    pub fn all_required_passed(&self) -> bool {
        self.checks.iter().filter(|c| c.required).all(|c| c.passed)
    }

    /// Get the count of passed checks.
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Get the count of failed checks.
    pub fn failed_count(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed).count()
    }

    /// Get the count of required failed checks.
    pub fn required_failed_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| c.required && !c.passed)
            .count()
    }
}

/// Options for the doctor command.
#[derive(Debug, Clone, Default)]
pub struct DoctorOptions {
    /// Include verbose output
    pub verbose: bool,

    /// Override for the external transform utility
    pub transform_command: Option<PathBuf>,
}

/// Run the doctor command.
///
/// `root` is the discovered project root, or `None` when the working
/// directory is not inside a project.
pub fn doctor(root: Option<&Path>, options: &DoctorOptions) -> Result<DoctorReport> {
    let mut report = DoctorReport::new();

    report.add(check_cmake());
    report.add(check_transform_tool(options.transform_command.clone()));
    report.add(check_design_file(root));

    if let Some(root) = root {
        report.add(check_stylesheets(root));
        report.add(check_toolchain_file(root));
    }

    Ok(report)
}

/// Check for cmake.
fn check_cmake() -> CheckResult {
    match detect_cmake_version() {
        Ok(version) => {
            let mut result =
                CheckResult::pass("CMake", "cmake is available").with_version(version.to_string());
            if let Some(path) = find_executable("cmake") {
                result = result.with_path(path);
            }
            result
        }
        Err(_) => CheckResult::fail("CMake", "cmake not found in PATH"),
    }
}

/// Check for the transform utility.
fn check_transform_tool(command: Option<PathBuf>) -> CheckResult {
    let tool = TransformTool::new(command);
    let command = tool.command();

    // An explicit path needs to exist; a bare name is resolved via PATH.
    let found = if command.components().count() > 1 {
        command.is_file().then(|| command.to_path_buf())
    } else {
        find_executable(command)
    };

    match found {
        Some(path) => CheckResult::pass(
            "Transform utility",
            format!("found {}", command.display()),
        )
        .with_path(path),
        None => CheckResult::fail(
            "Transform utility",
            format!("{} not found", command.display()),
        ),
    }
}

/// Check for the design file marking the project root.
fn check_design_file(root: Option<&Path>) -> CheckResult {
    match root {
        Some(root) => CheckResult::pass("Design file", "project root found")
            .with_path(root.join(design_file())),
        None => CheckResult::fail(
            "Design file",
            format!("no {} in this directory or any parent", design_file().display()),
        ),
    }
}

/// Check that the transform stylesheets are present.
fn check_stylesheets(root: &Path) -> CheckResult {
    let missing: Vec<String> = cmake_fragment_jobs()
        .iter()
        .filter(|job| !root.join(&job.stylesheet).is_file())
        .map(|job| job.stylesheet.display().to_string())
        .collect();

    if missing.is_empty() {
        CheckResult::pass("Stylesheets", "all transform stylesheets present").optional()
    } else {
        CheckResult::fail("Stylesheets", format!("missing: {}", missing.join(", "))).optional()
    }
}

/// Check that the default toolchain file is present.
fn check_toolchain_file(root: &Path) -> CheckResult {
    let path = root.join(DEFAULT_TOOLCHAIN_FILE);
    if path.is_file() {
        CheckResult::pass("Toolchain file", DEFAULT_TOOLCHAIN_FILE)
            .with_path(path)
            .optional()
    } else {
        CheckResult::fail(
            "Toolchain file",
            format!("{} not found (pass --toolchain-file to use another)", DEFAULT_TOOLCHAIN_FILE),
        )
        .optional()
    }
}

/// Format the doctor report for display.
pub fn format_report(report: &DoctorReport, verbose: bool) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    writeln!(output, "Slipway Doctor").unwrap();
    writeln!(output, "==============\n").unwrap();

    writeln!(output, "Checks:").unwrap();
    for check in &report.checks {
        let status = if check.passed { "[OK]" } else { "[!!]" };
        let required = if check.required { "" } else { " (optional)" };

        writeln!(output, "  {} {}{}", status, check.name, required).unwrap();

        if verbose {
            writeln!(output, "      {}", check.message).unwrap();
            if let Some(path) = &check.path {
                writeln!(output, "      Path: {}", path.display()).unwrap();
            }
            if let Some(version) = &check.version {
                writeln!(output, "      Version: {}", version).unwrap();
            }
        }
    }

    writeln!(output).unwrap();

    let passed = report.passed_count();
    let failed = report.failed_count();
    let required_failed = report.required_failed_count();

    writeln!(output, "Summary: {} passed, {} failed", passed, failed).unwrap();

    if required_failed > 0 {
        writeln!(
            output,
            "\nWarning: {} required check(s) failed. `slipway configure` will not work.",
            required_failed
        )
        .unwrap();
    } else if failed > 0 {
        writeln!(
            output,
            "\nAll required checks passed. {} optional check(s) failed.",
            failed
        )
        .unwrap();
    } else {
        writeln!(output, "\nAll checks passed. Slipway is ready to use.").unwrap();
    }

    output
}
