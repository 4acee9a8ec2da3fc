// src/infrastructure/config.rs
use crate::application::SessionOptions;
use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// TOML configuration for the flashcards binary
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub log: LogConfig,
}

/// Startup files; empty means none.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Defaults {
    #[serde(default)]
    pub import: String,
    #[serde(default)]
    pub export: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct LogConfig {
    /// Where to write the session transcript on exit; empty disables it.
    #[serde(default)]
    pub autosave: String,
}

fn non_empty(value: &str) -> Option<PathBuf> {
    (!value.is_empty()).then(|| PathBuf::from(value))
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// `<config_dir>/flashcards/flashcards.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load an explicitly given file, or the default file when it exists.
    ///
    /// A missing explicit file is an error; a missing default file is not.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(?path, "Loading config");
            return Self::load(path)
                .with_context(|| format!("Config file {}", path.display()));
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                debug!(?path, "Loading default config");
                Self::load(&path)
            }
            _ => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Session options from this config, with CLI flags taking precedence.
    pub fn session_options(
        &self,
        import: Option<PathBuf>,
        export: Option<PathBuf>,
    ) -> SessionOptions {
        SessionOptions {
            import: import.or_else(|| non_empty(&self.defaults.import)),
            export: export.or_else(|| non_empty(&self.defaults.export)),
            autosave_log: non_empty(&self.log.autosave),
        }
    }
}
