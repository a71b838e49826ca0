//! The pre-commit check
//!
//! Never fails: infrastructure problems are warned about and let the commit
//! through, only policy violations produce a non-zero exit status.

use crate::cli::GlobalArgs;
use crate::config::{OutputFormat, StageGuardConfig};
use crate::git::staged::LIST_FAILURE_WARNING;
use crate::hooks::{HookContext, pre_commit};
use clap::Args;
use std::process::ExitCode;

pub const CONFIG_FAILURE_WARNING: &str =
    "[pre-commit] warning: failed to load configuration, using defaults";

#[derive(Args, Clone, Default)]
pub struct CheckArgs {
    /// Report format (overrides output.format)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

pub fn execute(args: CheckArgs, globals: &GlobalArgs) -> ExitCode {
    let (mut config, load_error) = match StageGuardConfig::load(globals.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (StageGuardConfig::fallback(), Some(e)),
    };
    if let Some(format) = args.format {
        config.output.format = format;
    }

    let output = globals.output(config.output.color);
    if let Some(e) = load_error {
        tracing::warn!("{:#}", e);
        output.warning(CONFIG_FAILURE_WARNING);
    }

    let workdir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!("Cannot determine working directory: {}", e);
            output.warning(LIST_FAILURE_WARNING);
            return ExitCode::SUCCESS;
        }
    };

    let context = HookContext {
        config,
        output,
        workdir,
    };
    pre_commit::execute(&context).into()
}
