//! CMake configure invocation and generator selection.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::util::process::{detect_tool_version, ProcessBuilder};

/// Generator used for Visual Studio builds on Windows hosts.
pub const VISUAL_STUDIO_GENERATOR: &str = "Visual Studio 12 Win64";

/// Host platforms with a known cmake generator mapping.
///
/// Windows selects the Visual Studio project generator, Linux relies on
/// cmake's default (Makefiles). Anything else has no mapping and the
/// configure step is skipped for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    Windows,
    Linux,
    Unsupported,
}

impl HostPlatform {
    /// Classify the platform this binary is running on.
    pub fn current() -> Self {
        match std::env::consts::OS {
            "windows" => HostPlatform::Windows,
            "linux" => HostPlatform::Linux,
            _ => HostPlatform::Unsupported,
        }
    }

    /// The generator string passed via `-G`, if this platform needs one.
    pub fn default_generator(self) -> Option<&'static str> {
        match self {
            HostPlatform::Windows => Some(VISUAL_STUDIO_GENERATOR),
            HostPlatform::Linux | HostPlatform::Unsupported => None,
        }
    }
}

/// A prepared `cmake` configure invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmakeInvocation {
    build_type: String,
    toolchain_file: PathBuf,
    generator: Option<String>,
}

impl CmakeInvocation {
    /// Create an invocation using cmake's default generator.
    pub fn new(build_type: impl Into<String>, toolchain_file: impl Into<PathBuf>) -> Self {
        CmakeInvocation {
            build_type: build_type.into(),
            toolchain_file: toolchain_file.into(),
            generator: None,
        }
    }

    /// Select an explicit generator backend.
    pub fn generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = Some(generator.into());
        self
    }

    /// Map a host platform to its invocation, or `None` when the platform
    /// has no generator mapping and configure must be skipped.
    pub fn for_platform(
        platform: HostPlatform,
        build_type: impl Into<String>,
        toolchain_file: impl Into<PathBuf>,
    ) -> Option<Self> {
        if platform == HostPlatform::Unsupported {
            return None;
        }

        let mut invocation = CmakeInvocation::new(build_type, toolchain_file);
        if let Some(generator) = platform.default_generator() {
            invocation = invocation.generator(generator);
        }
        Some(invocation)
    }

    /// The build type forwarded via `-DCMAKE_BUILD_TYPE`.
    pub fn build_type(&self) -> &str {
        &self.build_type
    }

    /// The toolchain file forwarded via `-DCMAKE_TOOLCHAIN_FILE`.
    pub fn toolchain_file(&self) -> &Path {
        &self.toolchain_file
    }

    /// Build the cmake argument list. The source directory is always the
    /// working directory the process runs in.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            format!("-DCMAKE_BUILD_TYPE={}", self.build_type),
            format!("-DCMAKE_TOOLCHAIN_FILE={}", self.toolchain_file.display()),
        ];

        if let Some(ref generator) = self.generator {
            args.push("-G".to_string());
            args.push(generator.clone());
        }

        args.push(".".to_string());
        args
    }

    /// Prepare the subprocess invocation.
    pub fn to_process(&self) -> ProcessBuilder {
        ProcessBuilder::new("cmake").args(self.args())
    }
}

/// Detect the installed cmake version.
pub fn detect_cmake_version() -> Result<semver::Version> {
    detect_tool_version("cmake", |stdout| {
        // Parse "cmake version 3.20.5"
        for line in stdout.lines() {
            if let Some(version_str) = line.strip_prefix("cmake version ") {
                let clean_version = version_str.trim().split('-').next().unwrap_or(version_str);
                return clean_version.parse().ok();
            }
        }
        None
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linux_uses_default_generator() {
        let invocation =
            CmakeInvocation::for_platform(HostPlatform::Linux, "Debug", "cross.cmake").unwrap();

        let args = invocation.args();
        assert_eq!(
            args,
            [
                "-DCMAKE_BUILD_TYPE=Debug",
                "-DCMAKE_TOOLCHAIN_FILE=cross.cmake",
                "."
            ]
        );
    }

    #[test]
    fn test_windows_selects_visual_studio() {
        let invocation =
            CmakeInvocation::for_platform(HostPlatform::Windows, "Release", "tc.cmake").unwrap();

        let args = invocation.args();
        assert!(args.contains(&"-G".to_string()));
        assert!(args.contains(&VISUAL_STUDIO_GENERATOR.to_string()));
        // Generator selection never rewrites the forwarded values.
        assert!(args.contains(&"-DCMAKE_BUILD_TYPE=Release".to_string()));
        assert!(args.contains(&"-DCMAKE_TOOLCHAIN_FILE=tc.cmake".to_string()));
    }

    #[test]
    fn test_unsupported_platform_has_no_invocation() {
        assert_eq!(
            CmakeInvocation::for_platform(HostPlatform::Unsupported, "Release", "tc.cmake"),
            None
        );
    }

    #[test]
    fn test_values_forwarded_unmodified() {
        // Values with spaces or unusual characters must pass through as-is;
        // quoting is the job of the process layer, not the argument list.
        let invocation = CmakeInvocation::new("RelWithDebInfo", "toolchains/odd name.cmake");

        let args = invocation.args();
        assert_eq!(args[0], "-DCMAKE_BUILD_TYPE=RelWithDebInfo");
        assert_eq!(args[1], "-DCMAKE_TOOLCHAIN_FILE=toolchains/odd name.cmake");
    }

    #[test]
    fn test_explicit_generator_override() {
        let invocation = CmakeInvocation::new("Release", "tc.cmake").generator("Ninja");
        let args = invocation.args();

        let g = args.iter().position(|a| a == "-G").unwrap();
        assert_eq!(args[g + 1], "Ninja");
    }

    #[test]
    fn test_source_dir_is_last_argument() {
        let invocation = CmakeInvocation::new("Release", "tc.cmake");
        assert_eq!(invocation.args().last().unwrap(), ".");
    }

    #[test]
    fn test_to_process_targets_cmake() {
        let process = CmakeInvocation::new("Release", "tc.cmake").to_process();
        assert_eq!(process.get_program(), Path::new("cmake"));
    }
}
