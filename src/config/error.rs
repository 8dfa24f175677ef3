//! Configuration Error Types
//!
//! Errors raised while loading batch settings. Out-of-range values are not errors
//! here; they are reported by [`super::BatchSettings::lint`] and degrade to
//! passthrough at call time.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors with detailed context
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Configuration file not found at the given path
    #[error("Configuration file not found: {path}")]
    ConfigFileNotFound { path: PathBuf },

    /// The `config` crate failed to read, merge or deserialize a source
    #[error("Failed to load batch settings: {0}")]
    Load(#[from] config::ConfigError),
}

impl ConfigurationError {
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigFileNotFound { path: path.into() }
    }
}

pub type ConfigResult<T> = std::result::Result<T, ConfigurationError>;
