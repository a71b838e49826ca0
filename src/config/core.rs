use super::{StageGuardConfig, smart_load};
use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Json, Toml, Yaml},
};
use std::path::{Path, PathBuf};

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

const ENV_PREFIX: &str = "STAGE_GUARD_";

/// Repository-level config file names, lowest priority first
const REPO_CONFIG_FILES: [&str; 4] = [
    "stage-guard.toml",
    "stage-guard.json",
    "stage-guard.yaml",
    "stage-guard.yml",
];

impl StageGuardConfig {
    /// Load the merged configuration.
    ///
    /// With `custom_config` only that file is read on top of the defaults;
    /// otherwise the user config and then the repository config are merged.
    /// `STAGE_GUARD_*` environment variables always win, with `__` separating
    /// nested keys (`STAGE_GUARD_GIT__BACKEND=libgit2`).
    pub fn load(custom_config: Option<&Path>) -> Result<Self> {
        Self::figment(custom_config)
            .extract()
            .context("Failed to load stage-guard configuration")
    }

    /// Defaults plus environment overrides, skipping every config file.
    ///
    /// Used when the full load fails. If the environment itself is invalid
    /// the built-in defaults are returned.
    pub fn fallback() -> Self {
        Figment::new()
            .merge(Toml::string(DEFAULT_CONFIG))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .unwrap_or_else(|e| {
                tracing::debug!("Ignoring environment overrides: {}", e);
                Self::default()
            })
    }

    pub fn figment(custom_config: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        if let Some(custom_path) = custom_config {
            figment = figment.merge(smart_load::auto(custom_path));
        } else {
            if let Some(user_dir) = Self::user_config_dir() {
                figment = figment
                    .merge(Toml::file(user_dir.join("config.toml")))
                    .merge(Json::file(user_dir.join("config.json")))
                    .merge(Yaml::file(user_dir.join("config.yaml")))
                    .merge(Yaml::file(user_dir.join("config.yml")));
            }
            for name in REPO_CONFIG_FILES {
                figment = figment.merge(smart_load::auto(name));
            }
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn user_config_dir() -> Option<PathBuf> {
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config/stage-guard"))
    }
}
