//! `slipway generate` command

use anyhow::Result;

use crate::cli::GenerateArgs;
use slipway::ops::generate::{generate, GenerateOptions};
use slipway::util::config::load_config;
use slipway::util::GlobalContext;

pub fn execute(args: GenerateArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;
    let root = ctx.find_project_root()?;

    let config = load_config(&ctx.config_path(), &ctx.project_config_path(&root));

    let opts = GenerateOptions {
        transform_command: args.transform_command.or(config.transform.command),
    };

    generate(&root, &opts)
}
