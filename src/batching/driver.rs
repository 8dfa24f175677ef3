//! # Split-Invoke-Aggregate Driver
//!
//! Runs the wrapped operation once per planned chunk, strictly in order, and sums
//! the integer results. The first failing chunk ends the call.

use super::classifier::SplitTarget;
use super::descriptor::ArgumentVector;
use super::planner::ChunkPlan;
use crate::error::{SplitError, SplitResult};
use serde_json::Value;
use std::future::Future;
use tracing::{debug, error};

/// Invoke `invoke` once per chunk of `plan` and return the summed results.
///
/// Each sub-call receives a fresh copy of `args` with the target slot replaced by
/// that chunk's sub-sequence; `args` itself is never modified. Chunk `n + 1` is not
/// started until chunk `n` has completed.
///
/// `plan` must come from [`super::planner::plan`] over the same `args`. A plan of a
/// different length, or one without ranges, is rejected before anything is invoked.
pub async fn execute<F, Fut, E>(
    operation: &str,
    args: &[Value],
    target: &SplitTarget,
    plan: &ChunkPlan,
    mut invoke: F,
) -> SplitResult<i64, E>
where
    F: FnMut(ArgumentVector) -> Fut,
    Fut: Future<Output = Result<Value, E>>,
{
    let sequence = target.resolve(args).map_or(&[][..], Vec::as_slice);

    if plan.sequence_len() != sequence.len() {
        return Err(SplitError::PlanMismatch {
            operation: operation.to_string(),
            planned: plan.sequence_len(),
            actual: sequence.len(),
        });
    }
    if plan.is_empty() {
        return Err(SplitError::EmptyPlan {
            operation: operation.to_string(),
        });
    }

    let mut total: i64 = 0;

    for (chunk_index, range) in plan.iter().enumerate() {
        let chunk = sequence
            .get(range.clone())
            .ok_or_else(|| SplitError::PlanMismatch {
                operation: operation.to_string(),
                planned: range.end,
                actual: sequence.len(),
            })?
            .to_vec();
        let chunk_len = chunk.len();
        let sub_args = target.substitute(args, chunk);

        debug!(
            operation = %operation,
            chunk_index = chunk_index,
            start = range.start,
            end = range.end,
            chunk_len = chunk_len,
            "Invoking chunk"
        );

        let value = match invoke(sub_args).await {
            Ok(value) => value,
            Err(e) => {
                error!(
                    operation = %operation,
                    chunk_index = chunk_index,
                    chunks = plan.len(),
                    "Chunk invocation failed, aborting split call"
                );
                return Err(SplitError::Invocation(e));
            }
        };

        let count = value.as_i64().ok_or_else(|| SplitError::NonIntegerResult {
            operation: operation.to_string(),
            chunk_index,
            value: value.clone(),
        })?;

        total = total
            .checked_add(count)
            .ok_or_else(|| SplitError::CountOverflow {
                operation: operation.to_string(),
                chunk_index,
            })?;
    }

    Ok(total)
}
