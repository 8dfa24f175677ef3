//! # Batch Splitter Configuration
//!
//! Per-operation batch settings. Hosts declare a threshold and a chunk size for each
//! wrapped operation, either in code or through a configuration file loaded by
//! [`ConfigLoader`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use batch_splitter::config::{BatchConfig, BatchSettings};
//!
//! let settings = BatchSettings::default()
//!     .with_operation("UserMapper:insert_all", BatchConfig::new(1000, 250));
//!
//! let config = settings.config_for("UserMapper:insert_all");
//! assert_eq!(config.effective_chunk_size(), Some(250));
//! ```
//!
//! Values are signed and are not rejected at load time: a non-positive threshold or
//! chunk size makes the affected operation pass every call through unsplit.

pub mod error;
pub mod loader;

use crate::constants::{DEFAULT_CHUNK_SIZE, DEFAULT_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

pub use error::{ConfigResult, ConfigurationError};
pub use loader::ConfigLoader;

/// Threshold and chunk size for one wrapped operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Minimum sequence length that triggers splitting
    pub threshold: i64,

    /// Maximum sequence length handed to each sub-call
    pub chunk_size: i64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl BatchConfig {
    pub fn new(threshold: i64, chunk_size: i64) -> Self {
        Self {
            threshold,
            chunk_size,
        }
    }

    /// Chunk size actually used, clamped so no chunk exceeds the threshold.
    ///
    /// `None` when either value is non-positive.
    pub fn effective_chunk_size(&self) -> Option<usize> {
        if self.threshold <= 0 || self.chunk_size <= 0 {
            return None;
        }
        usize::try_from(self.chunk_size.min(self.threshold)).ok()
    }

    pub fn is_valid(&self) -> bool {
        self.effective_chunk_size().is_some()
    }
}

/// Batch configuration for every operation a host wraps
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BatchSettings {
    /// Used for any operation without its own entry
    pub defaults: BatchConfig,

    /// Overrides keyed by qualified operation name
    pub operations: HashMap<String, BatchConfig>,
}

impl BatchSettings {
    pub fn new(defaults: BatchConfig) -> Self {
        Self {
            defaults,
            operations: HashMap::new(),
        }
    }

    pub fn with_operation(
        mut self,
        qualified_name: impl Into<String>,
        config: BatchConfig,
    ) -> Self {
        self.operations.insert(qualified_name.into(), config);
        self
    }

    /// Resolve the configuration for an operation, falling back to the defaults.
    pub fn config_for(&self, qualified_name: &str) -> BatchConfig {
        self.operations
            .get(qualified_name)
            .copied()
            .unwrap_or(self.defaults)
    }

    /// Report entries that will make their operation pass through unsplit.
    ///
    /// Returns the names of the offending entries (`"defaults"` for the defaults).
    pub fn lint(&self) -> Vec<String> {
        let mut offenders = Vec::new();

        if !self.defaults.is_valid() {
            warn!(
                entry = "defaults",
                threshold = self.defaults.threshold,
                chunk_size = self.defaults.chunk_size,
                "Batch defaults are not positive; affected calls will pass through unsplit"
            );
            offenders.push("defaults".to_string());
        }

        let mut names: Vec<&String> = self.operations.keys().collect();
        names.sort();
        for name in names {
            let config = self.operations[name];
            if !config.is_valid() {
                warn!(
                    entry = %name,
                    threshold = config.threshold,
                    chunk_size = config.chunk_size,
                    "Batch configuration is not positive; calls will pass through unsplit"
                );
                offenders.push(name.clone());
            } else if config.chunk_size > config.threshold {
                warn!(
                    entry = %name,
                    threshold = config.threshold,
                    chunk_size = config.chunk_size,
                    "Chunk size exceeds threshold and will be clamped"
                );
            }
        }

        offenders
    }
}
