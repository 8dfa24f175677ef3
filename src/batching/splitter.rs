//! # Batch Splitter
//!
//! Host-facing wrapper that owns the per-operation settings and applies them to
//! intercepted calls. The splitter only reads its settings, so one instance can be
//! shared across tasks behind an `Arc` without locking.

use super::descriptor::{ArgumentVector, OperationDescriptor};
use super::processor::{process, Outcome};
use crate::config::{BatchConfig, BatchSettings};
use crate::error::SplitResult;
use async_trait::async_trait;
use serde_json::Value;
use std::future::Future;
use tracing::info;

/// An operation that can be wrapped by the splitter
#[async_trait]
pub trait BatchOperation: Send + Sync {
    type Error: Send;

    /// Metadata describing the operation's parameters and return type
    fn descriptor(&self) -> &OperationDescriptor;

    /// Perform exactly one call to the underlying operation
    async fn invoke(&self, args: ArgumentVector) -> Result<Value, Self::Error>;
}

/// Applies batch settings to wrapped operations
#[derive(Debug, Clone, Default)]
pub struct BatchSplitter {
    settings: BatchSettings,
}

impl BatchSplitter {
    pub fn new(settings: BatchSettings) -> Self {
        info!(
            threshold = settings.defaults.threshold,
            chunk_size = settings.defaults.chunk_size,
            operations = settings.operations.len(),
            "Batch splitter initialized"
        );
        Self { settings }
    }

    /// Configuration in effect for the named operation
    pub fn config_for(&self, qualified_name: &str) -> BatchConfig {
        self.settings.config_for(qualified_name)
    }

    /// Run `args` through `operation`, splitting when applicable.
    pub async fn call<O>(
        &self,
        operation: &O,
        args: ArgumentVector,
    ) -> SplitResult<Outcome, O::Error>
    where
        O: BatchOperation + ?Sized,
    {
        let descriptor = operation.descriptor();
        let config = self.config_for(&descriptor.qualified_name);
        process(descriptor, args, &config, |sub_args| operation.invoke(sub_args)).await
    }

    /// Run `args` through a closure-based operation.
    pub async fn call_with<F, Fut, E>(
        &self,
        descriptor: &OperationDescriptor,
        args: ArgumentVector,
        invoke: F,
    ) -> SplitResult<Outcome, E>
    where
        F: FnMut(ArgumentVector) -> Fut,
        Fut: Future<Output = Result<Value, E>>,
    {
        let config = self.config_for(&descriptor.qualified_name);
        process(descriptor, args, &config, invoke).await
    }
}
