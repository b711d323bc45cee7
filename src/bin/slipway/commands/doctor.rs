//! `slipway doctor` command

use anyhow::Result;

use crate::cli::DoctorArgs;
use slipway::ops::{doctor, format_report, DoctorOptions};
use slipway::util::config::load_config;
use slipway::util::GlobalContext;

pub fn execute(args: DoctorArgs, verbose: bool) -> Result<()> {
    let ctx = GlobalContext::new()?;

    // Doctor still runs outside a project; the layout checks just fail.
    let root = ctx.find_project_root().ok();

    let project_config = root
        .as_deref()
        .map(|r| ctx.project_config_path(r))
        .unwrap_or_default();
    let config = load_config(&ctx.config_path(), &project_config);

    let options = DoctorOptions {
        verbose,
        transform_command: args.transform_command.or(config.transform.command),
    };

    let report = doctor(root.as_deref(), &options)?;

    // Print the formatted report
    let output = format_report(&report, options.verbose);
    print!("{}", output);

    // Exit with error code if required checks failed
    if !report.all_required_passed() {
        std::process::exit(1);
    }

    Ok(())
}
