//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Slipway - regenerate design-derived CMake fragments and configure the build
#[derive(Parser)]
#[command(name = "slipway")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Regenerate the CMake fragments and run the cmake configure step
    Configure(ConfigureArgs),

    /// Regenerate the CMake fragments only
    Generate(GenerateArgs),

    /// Check that the external tools and project layout are in place
    Doctor(DoctorArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct ConfigureArgs {
    /// CMake build type (defaults to Release)
    #[arg(short, long)]
    pub build_type: Option<String>,

    /// Toolchain file passed to cmake (defaults to default_configuration.cmake)
    #[arg(short, long)]
    pub toolchain_file: Option<PathBuf>,

    /// Program used to run the design transforms
    #[arg(long, env = "SLIPWAY_TRANSFORM_COMMAND")]
    pub transform_command: Option<PathBuf>,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Program used to run the design transforms
    #[arg(long, env = "SLIPWAY_TRANSFORM_COMMAND")]
    pub transform_command: Option<PathBuf>,
}

#[derive(Args)]
pub struct DoctorArgs {
    /// Program used to run the design transforms
    #[arg(long, env = "SLIPWAY_TRANSFORM_COMMAND")]
    pub transform_command: Option<PathBuf>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
