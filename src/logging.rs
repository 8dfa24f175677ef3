//! # Structured Logging Module
//!
//! Environment-aware `tracing` setup for hosts that do not install their own
//! subscriber, plus the structured summary event emitted for every split call.

use crate::config::ConfigLoader;
use chrono::Utc;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific configuration
pub fn init_structured_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = ConfigLoader::detect_environment();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(get_log_level(&environment)));

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .with_filter(filter),
        );

        // A host may already own the global subscriber
        if subscriber.try_init().is_err() {
            tracing::debug!("Global tracing subscriber already initialized - keeping it");
        }

        tracing::info!(environment = %environment, "Structured logging initialized");
    });
}

/// Get log level based on environment
fn get_log_level(environment: &str) -> &'static str {
    match environment {
        "test" | "development" => "debug",
        "production" => "info",
        _ => "debug",
    }
}

/// Log the summary of one split call
pub fn log_split_operation(
    operation: &str,
    invocation_id: &str,
    status: &str,
    chunks: Option<usize>,
    total: Option<i64>,
    details: Option<&str>,
) {
    tracing::info!(
        operation = %operation,
        invocation_id = %invocation_id,
        status = %status,
        chunks = chunks,
        total = total,
        details = details,
        timestamp = %Utc::now().to_rfc3339(),
        "BATCH_SPLIT"
    );
}
