use anyhow::Result;
use clap::Parser;
use stage_guard::Cli;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    cli.run()
}
