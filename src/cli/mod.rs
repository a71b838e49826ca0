//! Command-line interface for stage-guard
//!
//! Run without a subcommand (as git does when it calls the hook) the binary
//! performs `check`.

pub mod commands;
mod output;

pub use output::Output;

use crate::config::StageGuardConfig;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::{check, config, install, uninstall, version};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "stage-guard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Pre-commit hook that blocks oversized files and node_modules paths",
    long_about = "stage-guard inspects the files staged for a commit and blocks the commit \
                  when a file is larger than 10 MB or lives inside node_modules."
)]
pub struct Cli {
    /// Run as if started in <DIR> instead of current working directory
    #[arg(short = 'C', long = "directory", global = true)]
    pub directory: Option<PathBuf>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use custom configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check staged files (default when no subcommand is given)
    Check(check::CheckArgs),
    /// Install the pre-commit hook into the current repository
    Install(install::InstallArgs),
    /// Remove the pre-commit hook installed by stage-guard
    Uninstall(uninstall::UninstallArgs),
    /// Configuration management
    Config(config::ConfigArgs),
    /// Show version information
    Version(version::VersionArgs),
}

/// Settings shared by every command
pub struct GlobalArgs {
    pub verbose: u8,
    pub quiet: bool,
    pub config: Option<PathBuf>,
}

impl GlobalArgs {
    /// Output handler honouring `--verbose` and `--quiet`
    pub fn output(&self, color: bool) -> Output {
        Output::new(self.verbose > 0, self.quiet, color)
    }
}

impl Cli {
    pub fn run(self) -> Result<ExitCode> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)
                .with_context(|| format!("Failed to change directory to {}", dir.display()))?;
        }

        setup_logging(self.verbose, self.quiet, log_colors(self.config.as_deref()));

        let globals = GlobalArgs {
            verbose: self.verbose,
            quiet: self.quiet,
            config: self.config,
        };

        match self.command {
            None => Ok(check::execute(check::CheckArgs::default(), &globals)),
            Some(Commands::Check(args)) => Ok(check::execute(args, &globals)),
            Some(Commands::Install(args)) => install::execute(args, &globals).map(|()| ExitCode::SUCCESS),
            Some(Commands::Uninstall(args)) => {
                uninstall::execute(args, &globals).map(|()| ExitCode::SUCCESS)
            }
            Some(Commands::Config(args)) => config::execute(args, &globals).map(|()| ExitCode::SUCCESS),
            Some(Commands::Version(args)) => version::execute(args, &globals).map(|()| ExitCode::SUCCESS),
        }
    }
}

/// Whether log lines may carry ANSI styling: stderr must be a colour-capable
/// terminal and `output.color` must not be switched off.
fn log_colors(custom_config: Option<&Path>) -> bool {
    let configured = StageGuardConfig::figment(custom_config)
        .extract_inner::<bool>("output.color")
        .unwrap_or(true);
    configured && console::colors_enabled_stderr()
}

fn setup_logging(verbose: u8, quiet: bool, ansi: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // A subscriber may already be installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(std::io::stderr)
        .try_init();
}
