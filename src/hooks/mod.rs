//! Git hook support
//!
//! `stage-guard install` writes a small shell script into `.git/hooks` that
//! hands control back to the binary, where [`pre_commit`] does the work.

pub mod pre_commit;

use crate::cli::Output;
use crate::config::StageGuardConfig;
use std::path::PathBuf;

/// Name of the hook file stage-guard manages
pub const PRE_COMMIT: &str = "pre-commit";

/// First comment line of every script written by `install`
pub const HOOK_MARKER: &str = "# Installed by stage-guard";

/// Everything a hook run needs
pub struct HookContext {
    pub config: StageGuardConfig,
    pub output: Output,
    /// Directory staged paths are resolved against
    pub workdir: PathBuf,
}

/// Script installed as `.git/hooks/pre-commit`
pub fn pre_commit_script() -> String {
    format!(
        "#!/bin/sh\n\
         {HOOK_MARKER}. Remove with `stage-guard uninstall`.\n\
         exec stage-guard check\n"
    )
}

/// True if the hook content was written by `install`
pub fn is_managed_hook(content: &str) -> bool {
    content.lines().any(|line| line.starts_with(HOOK_MARKER))
}
