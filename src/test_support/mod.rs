//! Test utilities and mocks for Slipway unit tests.
//!
//! Provides a mock [`ProcessRunner`] so the orchestration ops can be
//! exercised without spawning real subprocesses.
//!
//! # Example
//!
//! ```rust,ignore
//! use slipway::test_support::MockRunner;
//!
//! let runner = MockRunner::new();
//! runner.respond("cmake", 2);
//!
//! // Pass the runner to an op; afterwards inspect what ran:
//! assert!(runner.calls()[0].starts_with("transform-design"));
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;

use crate::util::process::{ProcessBuilder, ProcessRunner};

/// Mock process runner that records invocations instead of spawning.
///
/// Exit codes are keyed by program name (the file stem of the program
/// path); unknown programs exit 0.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: Mutex<HashMap<String, i32>>,
    calls: Mutex<Vec<String>>,
}

impl MockRunner {
    /// Create a runner where every invocation succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every invocation of `program` exit with `code`.
    pub fn respond(&self, program: impl Into<String>, code: i32) {
        self.responses.lock().unwrap().insert(program.into(), code);
    }

    /// Commands run so far, as display strings, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProcessRunner for MockRunner {
    fn run(&self, process: &ProcessBuilder) -> Result<i32> {
        self.calls
            .lock()
            .unwrap()
            .push(process.display_command());

        let program = process
            .get_program()
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let code = self
            .responses
            .lock()
            .unwrap()
            .get(&program)
            .copied()
            .unwrap_or(0);
        Ok(code)
    }
}

/// Scaffold a minimal project layout (design file and stylesheets) under `root`.
pub fn create_test_project(root: &Path) {
    use crate::design::{cmake_fragment_jobs, design_file};

    let design = root.join(design_file());
    std::fs::create_dir_all(design.parent().unwrap()).unwrap();
    std::fs::write(design, "<design/>").unwrap();

    for job in cmake_fragment_jobs() {
        let stylesheet = root.join(&job.stylesheet);
        std::fs::create_dir_all(stylesheet.parent().unwrap()).unwrap();
        std::fs::write(stylesheet, "<xsl:stylesheet/>").unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_runner_defaults_to_success() {
        let runner = MockRunner::new();
        let code = runner.run(&ProcessBuilder::new("anything")).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn test_mock_runner_keys_by_program_name() {
        let runner = MockRunner::new();
        runner.respond("cmake", 9);

        let code = runner
            .run(&ProcessBuilder::new("/usr/bin/cmake").arg("."))
            .unwrap();
        assert_eq!(code, 9);
        assert_eq!(runner.calls(), ["/usr/bin/cmake ."]);
    }
}
