use crate::cli::GlobalArgs;
use crate::guard::{EXCLUDED_SEGMENT, MAX_BYTES, format_mebibytes};
use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct VersionArgs {
    /// Show build and policy details
    #[arg(short = 'd', long = "detailed")]
    pub detailed: bool,
}

pub fn execute(args: VersionArgs, globals: &GlobalArgs) -> Result<()> {
    let output = globals.output(true);

    output.header(&format!("{} v{}", env!("CARGO_PKG_NAME"), crate::VERSION));

    if args.detailed {
        output.key_value("Description:", env!("CARGO_PKG_DESCRIPTION"));
        output.key_value("Repository:", env!("CARGO_PKG_REPOSITORY"));
        output.key_value("License:", env!("CARGO_PKG_LICENSE"));
        output.key_value("Size limit:", &format!("{} MB", format_mebibytes(MAX_BYTES)));
        output.key_value("Excluded dir:", EXCLUDED_SEGMENT);
        output.key_value(
            "Profile:",
            if cfg!(debug_assertions) { "debug" } else { "release" },
        );
    }

    Ok(())
}
