use serde::{Deserialize, Serialize};

use crate::translate::DEFAULT_PROGRAM;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How the `systemd-run` command line is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Program named first on the command line (default: "systemd-run").
    #[serde(default = "default_program")]
    pub program: String,
    /// Shell used when the variable named by `shell_env` is unset (default: "/bin/sh").
    #[serde(default = "default_shell")]
    pub default_shell: String,
    /// Environment variable holding the invoking user's shell (default: "SHELL").
    #[serde(default = "default_shell_env")]
    pub shell_env: String,
    /// Directive prefixes dropped in addition to `Exec` and `Restart`.
    #[serde(default)]
    pub extra_excluded_prefixes: Vec<String>,
}

/// Diagnostics written to stderr.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is unset (default: "warn").
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

fn default_shell() -> String {
    "/bin/sh".to_string()
}

fn default_shell_env() -> String {
    "SHELL".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            default_shell: default_shell(),
            shell_env: default_shell_env(),
            extra_excluded_prefixes: Vec::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
