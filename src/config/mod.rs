//! Configuration management for stage-guard
//!
//! Only ambient behaviour is configurable: how staged paths are listed and how
//! the report is rendered. The size limit and the excluded directory are
//! compiled in (see [`crate::guard`]).

mod core;
pub mod smart_load;

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageGuardConfig {
    /// How staged paths are obtained
    pub git: GitConfig,

    /// Report rendering
    pub output: OutputConfig,
}

/// Git collaborator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Which implementation lists staged paths
    pub backend: GitBackend,

    /// Executable used by the cli backend
    pub binary: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GitBackend {
    /// Spawn `git diff --cached --name-only --diff-filter=ACM`
    #[default]
    Cli,
    /// Diff HEAD against the index in-process with libgit2
    Libgit2,
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Allow ANSI styling on stderr (still disabled when stderr is not a terminal)
    pub color: bool,

    /// Report format
    pub format: OutputFormat,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            backend: GitBackend::Cli,
            binary: "git".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
        }
    }
}
