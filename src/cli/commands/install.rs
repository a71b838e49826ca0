use crate::cli::GlobalArgs;
use crate::git::GitOperations;
use crate::hooks::{PRE_COMMIT, is_managed_hook, pre_commit_script};
use anyhow::{Result, bail};
use clap::Args;

#[derive(Args)]
pub struct InstallArgs {
    /// Overwrite an existing pre-commit hook that stage-guard did not write
    #[arg(long)]
    pub force: bool,
}

pub fn execute(args: InstallArgs, globals: &GlobalArgs) -> Result<()> {
    let output = globals.output(true);
    let git = GitOperations::discover(std::env::current_dir()?)?;
    let hook_path = git.hook_path(PRE_COMMIT);

    match git.read_hook(PRE_COMMIT)? {
        Some(existing) if is_managed_hook(&existing) => {
            output.verbose("Refreshing existing stage-guard hook");
        }
        Some(_) if args.force => {
            output.warning(&format!("Overwriting existing hook {}", hook_path.display()));
        }
        Some(_) => bail!(
            "A pre-commit hook already exists at {}; re-run with --force to replace it",
            hook_path.display()
        ),
        None => {}
    }

    let installed = git.install_hook(PRE_COMMIT, &pre_commit_script())?;
    tracing::info!("Wrote {}", installed.display());
    output.success(&format!("Installed pre-commit hook at {}", installed.display()));
    Ok(())
}
