//! Configuration Loader
//!
//! Layers batch settings from three sources, later ones winning:
//!
//! 1. Built-in defaults ([`BatchSettings::default`])
//! 2. An optional YAML/TOML/JSON file (format inferred from the extension)
//! 3. `BATCH_SPLITTER_` prefixed environment variables, `__` separating nested keys,
//!    e.g. `BATCH_SPLITTER_DEFAULTS__CHUNK_SIZE=250`
//!
//! Operation names are matched exactly as written in the file; keep them lowercase
//! when they also need to be overridable from the environment.

use super::error::{ConfigResult, ConfigurationError};
use super::BatchSettings;
use crate::constants::{ENVIRONMENT_VARIABLES, ENV_PREFIX};
use config::{Config, Environment, File};
use std::path::Path;
use tracing::{debug, info};

/// Loads [`BatchSettings`] through the `config` crate
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings from a file plus environment overrides.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<BatchSettings> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigurationError::file_not_found(path));
        }

        debug!(path = %path.display(), "Loading batch settings from file");

        let config = Config::builder()
            .add_source(Config::try_from(&BatchSettings::default())?)
            .add_source(File::from(path))
            .add_source(Self::environment_source())
            .build()?;

        Self::finish(config)
    }

    /// Load settings from the defaults plus environment overrides only.
    pub fn from_env() -> ConfigResult<BatchSettings> {
        let config = Config::builder()
            .add_source(Config::try_from(&BatchSettings::default())?)
            .add_source(Self::environment_source())
            .build()?;

        Self::finish(config)
    }

    /// Load from `path` when it exists, otherwise from the environment alone.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> ConfigResult<BatchSettings> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "No batch settings file, using defaults");
            Self::from_env()
        }
    }

    /// Current runtime environment name, `development` when unset.
    pub fn detect_environment() -> String {
        ENVIRONMENT_VARIABLES
            .iter()
            .find_map(|name| std::env::var(name).ok())
            .unwrap_or_else(|| "development".to_string())
    }

    fn environment_source() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn finish(config: Config) -> ConfigResult<BatchSettings> {
        let settings: BatchSettings = config.try_deserialize()?;

        let misconfigured = settings.lint();
        info!(
            threshold = settings.defaults.threshold,
            chunk_size = settings.defaults.chunk_size,
            operations = settings.operations.len(),
            misconfigured = misconfigured.len(),
            "Batch settings loaded"
        );

        Ok(settings)
    }
}
