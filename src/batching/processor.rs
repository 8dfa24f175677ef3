//! # Call Processor
//!
//! Single entry point tying classification, planning and execution together.
//! Every call takes exactly one path:
//!
//! ```text
//! classify ──disqualified──► passthrough (one unmodified call)
//!    │
//!    ▼
//!  plan ────disqualified──► passthrough (one unmodified call)
//!    │
//!    ▼
//! execute ─► aggregate (one call per chunk, results summed)
//! ```

use super::classifier::{classify, SplitTarget};
use super::descriptor::{ArgumentVector, OperationDescriptor};
use super::driver::execute;
use super::planner::{plan, ChunkPlan};
use crate::config::BatchConfig;
use crate::error::{Disqualification, SplitError, SplitResult};
use crate::logging::log_split_operation;
use serde_json::Value;
use std::future::Future;
use tracing::{debug, error, warn, Instrument};
use uuid::Uuid;

/// Result of processing one call
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The wrapped operation ran once with the original arguments
    Passthrough {
        value: Value,
        reason: Disqualification,
    },
    /// The wrapped operation ran once per chunk
    Aggregate { total: i64, chunks: usize },
}

impl Outcome {
    /// The value the caller should see.
    pub fn into_value(self) -> Value {
        match self {
            Outcome::Passthrough { value, .. } => value,
            Outcome::Aggregate { total, .. } => Value::from(total),
        }
    }

    pub fn is_passthrough(&self) -> bool {
        matches!(self, Outcome::Passthrough { .. })
    }

    /// Why the call was not split, if it was not.
    pub fn disqualification(&self) -> Option<&Disqualification> {
        match self {
            Outcome::Passthrough { reason, .. } => Some(reason),
            Outcome::Aggregate { .. } => None,
        }
    }
}

/// Classify and plan a call without invoking anything.
///
/// Exposed so hosts can inspect what [`process`] would do.
pub fn prepare(
    descriptor: &OperationDescriptor,
    args: &[Value],
    config: &BatchConfig,
) -> Result<(SplitTarget, ChunkPlan), Disqualification> {
    let target = classify(descriptor, args)?;
    let chunk_plan = plan(&target, args, config)?;
    Ok((target, chunk_plan))
}

/// Run a call through the splitter.
///
/// Calls `invoke` once with the untouched `args` when splitting does not apply,
/// otherwise once per chunk. Failures of `invoke` are returned as
/// [`SplitError::Invocation`] carrying the original error.
pub async fn process<F, Fut, E>(
    descriptor: &OperationDescriptor,
    args: ArgumentVector,
    config: &BatchConfig,
    invoke: F,
) -> SplitResult<Outcome, E>
where
    F: FnMut(ArgumentVector) -> Fut,
    Fut: Future<Output = Result<Value, E>>,
{
    let operation = descriptor.qualified_name.as_str();
    let invocation_id = Uuid::new_v4().to_string();
    let span = tracing::debug_span!(
        "batch_split",
        operation = %operation,
        invocation_id = %invocation_id
    );

    run(descriptor, args, config, invoke, invocation_id)
        .instrument(span)
        .await
}

async fn run<F, Fut, E>(
    descriptor: &OperationDescriptor,
    args: ArgumentVector,
    config: &BatchConfig,
    mut invoke: F,
    invocation_id: String,
) -> SplitResult<Outcome, E>
where
    F: FnMut(ArgumentVector) -> Fut,
    Fut: Future<Output = Result<Value, E>>,
{
    let operation = descriptor.qualified_name.as_str();

    match prepare(descriptor, &args, config) {
        Err(reason) => {
            report_passthrough(operation, &reason);
            let value = invoke(args).await.map_err(SplitError::Invocation)?;
            log_split_operation(
                operation,
                &invocation_id,
                "passthrough",
                None,
                None,
                Some(reason.reason()),
            );
            Ok(Outcome::Passthrough { value, reason })
        }
        Ok((target, chunk_plan)) => {
            debug!(
                split_target = %target,
                sequence_len = chunk_plan.sequence_len(),
                chunk_size = chunk_plan.chunk_size(),
                chunks = chunk_plan.len(),
                "Splitting call"
            );
            let total = execute(operation, &args, &target, &chunk_plan, invoke)
                .await
                .inspect_err(|err| {
                    // Invocation failures are already logged per chunk by the driver
                    if !err.is_invocation() {
                        error!(operation = %operation, "Split call aborted before all chunks ran");
                    }
                })?;
            log_split_operation(
                operation,
                &invocation_id,
                "aggregated",
                Some(chunk_plan.len()),
                Some(total),
                None,
            );
            Ok(Outcome::Aggregate {
                total,
                chunks: chunk_plan.len(),
            })
        }
    }
}

/// Blocking variant of [`process`] for synchronous hosts.
pub fn process_blocking<F, E>(
    descriptor: &OperationDescriptor,
    args: ArgumentVector,
    config: &BatchConfig,
    mut invoke: F,
) -> SplitResult<Outcome, E>
where
    F: FnMut(ArgumentVector) -> Result<Value, E>,
{
    futures::executor::block_on(process(descriptor, args, config, |sub_args| {
        futures::future::ready(invoke(sub_args))
    }))
}

fn report_passthrough(operation: &str, reason: &Disqualification) {
    if reason.is_expected() {
        debug!(operation = %operation, reason = %reason, "Calling wrapped operation unsplit");
    } else {
        warn!(
            operation = %operation,
            reason = %reason,
            "Batch splitting not applicable, calling wrapped operation unsplit"
        );
    }
}
