//! Errors from reading and checking `rolewright.toml`

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be opened or read.
    #[error("Failed to read config file at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// TOML syntax errors, unknown role types, and other shape errors.
    #[error("Failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Two `[[roles]]` entries resolve to the same role name.
    #[error("Invalid configuration: duplicate role name '{0}'")]
    DuplicateRoleName(String),

    /// No home directory, so there is nowhere to look for user config.
    #[error("Cannot locate user config directory: no home directory")]
    NoHomeDirectory,
}
