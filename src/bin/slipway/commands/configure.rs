//! `slipway configure` command

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::ConfigureArgs;
use slipway::ops::configure::{
    configure, ConfigureOptions, DEFAULT_BUILD_TYPE, DEFAULT_TOOLCHAIN_FILE,
};
use slipway::util::config::load_config;
use slipway::util::GlobalContext;

pub fn execute(args: ConfigureArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;
    let root = ctx.find_project_root()?;

    // Load configuration (global + project); CLI flags win over both.
    let config = load_config(&ctx.config_path(), &ctx.project_config_path(&root));

    let opts = ConfigureOptions {
        build_type: args
            .build_type
            .or(config.configure.build_type)
            .unwrap_or_else(|| DEFAULT_BUILD_TYPE.to_string()),
        toolchain_file: args
            .toolchain_file
            .or(config.configure.toolchain_file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TOOLCHAIN_FILE)),
        generator: config.configure.generator,
        transform_command: args.transform_command.or(config.transform.command),
    };

    let outcome = configure(&root, &opts)?;

    // Forward cmake's exit code to the caller.
    let code = outcome.exit_code();
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
