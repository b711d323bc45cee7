//! Slipway CLI - design-driven CMake orchestration

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("slipway=debug")
    } else {
        EnvFilter::new("slipway=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_ansi(!cli.no_color)
        .init();

    // Execute command
    match cli.command {
        Commands::Configure(args) => commands::configure::execute(args),
        Commands::Generate(args) => commands::generate::execute(args),
        Commands::Doctor(args) => commands::doctor::execute(args, cli.verbose),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
