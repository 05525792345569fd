use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, RunConfig};
use crate::translate::RunOptions;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/service2run/config.toml` on Linux via
    /// `dirs::config_dir()`, falling back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("service2run").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `program`, `default_shell` and `shell_env` are non-empty
    /// - every extra excluded prefix is non-empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        let run = &self.run;
        for (field, value) in [
            ("run.program", &run.program),
            ("run.default_shell", &run.default_shell),
            ("run.shell_env", &run.shell_env),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("'{}' must not be empty", field),
                });
            }
        }

        if run.extra_excluded_prefixes.iter().any(|p| p.is_empty()) {
            return Err(ConfigError::ValidationError {
                message: "'run.extra_excluded_prefixes' must not contain empty prefixes"
                    .to_string(),
            });
        }

        Ok(())
    }
}

impl RunConfig {
    /// Pick the invoking shell from the value of `shell_env`, if any.
    ///
    /// Unset and empty both fall back to `default_shell`.
    pub fn resolve_shell(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|shell| !shell.is_empty())
            .unwrap_or_else(|| self.default_shell.clone())
    }

    /// Build translation options, reading the shell from the environment.
    pub fn run_options(&self) -> RunOptions {
        let shell = self.resolve_shell(std::env::var(&self.shell_env).ok());
        RunOptions::new(shell)
            .with_program(self.program.clone())
            .with_excluded_prefixes(self.extra_excluded_prefixes.clone())
    }
}
