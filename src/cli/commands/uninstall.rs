use crate::cli::GlobalArgs;
use crate::git::GitOperations;
use crate::hooks::{PRE_COMMIT, is_managed_hook};
use anyhow::Result;
use clap::Args;

#[derive(Args, Default)]
pub struct UninstallArgs {}

pub fn execute(_args: UninstallArgs, globals: &GlobalArgs) -> Result<()> {
    let output = globals.output(true);
    let git = GitOperations::discover(std::env::current_dir()?)?;
    let hook_path = git.hook_path(PRE_COMMIT);

    match git.read_hook(PRE_COMMIT)? {
        None => output.info("No pre-commit hook installed"),
        Some(content) if !is_managed_hook(&content) => output.warning(&format!(
            "{} was not installed by stage-guard, leaving it in place",
            hook_path.display()
        )),
        Some(_) => {
            git.remove_hook(PRE_COMMIT)?;
            output.success(&format!("Removed {}", hook_path.display()));
        }
    }

    Ok(())
}
