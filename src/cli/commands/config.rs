use crate::cli::GlobalArgs;
use crate::config::StageGuardConfig;
use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Display the merged configuration
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = DocumentFormat::Toml)]
        format: DocumentFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocumentFormat {
    Toml,
    Yaml,
    Json,
}

pub fn execute(args: ConfigArgs, globals: &GlobalArgs) -> Result<()> {
    match args.command {
        ConfigCommand::Show { format } => {
            let config = StageGuardConfig::load(globals.config.as_deref())?;
            // The document itself is data, not a diagnostic
            print!("{}", render(&config, format)?);
            Ok(())
        }
    }
}

/// Serialize the configuration in the requested format
pub fn render(config: &StageGuardConfig, format: DocumentFormat) -> Result<String> {
    let document = match format {
        DocumentFormat::Toml => {
            toml::to_string_pretty(config).context("Failed to serialize config as TOML")?
        }
        DocumentFormat::Yaml => {
            serde_yml::to_string(config).context("Failed to serialize config as YAML")?
        }
        DocumentFormat::Json => {
            let mut json = serde_json::to_string_pretty(config)
                .context("Failed to serialize config as JSON")?;
            json.push('\n');
            json
        }
    };
    Ok(document)
}
