//! # Batch Planner
//!
//! Gates splitting on the sequence length and turns the configured chunk size into
//! an ordered list of half-open ranges covering the sequence exactly once.

use super::classifier::SplitTarget;
use crate::config::BatchConfig;
use crate::error::Disqualification;
use serde_json::Value;
use std::ops::Range;

/// Ordered, contiguous chunk boundaries over one sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkPlan {
    ranges: Vec<Range<usize>>,
    chunk_size: usize,
    sequence_len: usize,
}

impl ChunkPlan {
    /// Stride over `0..sequence_len` in steps of `chunk_size`.
    ///
    /// The last range ends exactly at `sequence_len`. A zero `chunk_size` yields no
    /// ranges.
    pub fn new(sequence_len: usize, chunk_size: usize) -> Self {
        let ranges = if chunk_size == 0 {
            Vec::new()
        } else {
            (0..sequence_len)
                .step_by(chunk_size)
                .map(|start| start..(start + chunk_size).min(sequence_len))
                .collect()
        };

        Self {
            ranges,
            chunk_size,
            sequence_len,
        }
    }

    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    /// Number of chunks, i.e. sub-calls the plan will make
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Effective (clamped) chunk size
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn sequence_len(&self) -> usize {
        self.sequence_len
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Range<usize>> {
        self.ranges.iter()
    }
}

impl<'a> IntoIterator for &'a ChunkPlan {
    type Item = &'a Range<usize>;
    type IntoIter = std::slice::Iter<'a, Range<usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

/// Validate that the targeted sequence should be split and compute its chunks.
pub fn plan(
    target: &SplitTarget,
    args: &[Value],
    config: &BatchConfig,
) -> Result<ChunkPlan, Disqualification> {
    let len = target.resolve(args).map_or(0, Vec::len);

    // Null, empty and short sequences all take the unsplit path
    let below = i64::try_from(len).map_or(false, |len| len < config.threshold);
    if len == 0 || below {
        return Err(Disqualification::BelowThreshold {
            len,
            threshold: config.threshold,
        });
    }

    if config.threshold <= 0 {
        return Err(Disqualification::InvalidThreshold(config.threshold));
    }

    let chunk_size = config
        .effective_chunk_size()
        .ok_or(Disqualification::InvalidChunkSize(config.chunk_size))?;

    Ok(ChunkPlan::new(len, chunk_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sequence(len: usize) -> Vec<Value> {
        vec![Value::Array((0..len).map(|i| json!(i)).collect())]
    }

    const SOLE: SplitTarget = SplitTarget::Argument { index: 0 };

    #[test]
    fn test_exact_multiple_ends_at_sequence_length() {
        let plan = ChunkPlan::new(2500, 500);
        assert_eq!(plan.len(), 5);
        assert_eq!(plan.ranges().last(), Some(&(2000..2500)));
    }

    #[test]
    fn test_last_chunk_may_be_shorter() {
        let plan = ChunkPlan::new(3000, 400);
        let lens: Vec<usize> = plan.iter().map(|r| r.len()).collect();
        assert_eq!(lens, vec![400, 400, 400, 400, 400, 400, 400, 200]);
    }

    #[test]
    fn test_chunk_larger_than_sequence_gives_single_range() {
        let plan = ChunkPlan::new(3, 10);
        assert_eq!(plan.ranges(), &[0..3]);
    }

    #[test]
    fn test_zero_chunk_size_yields_no_ranges() {
        assert!(ChunkPlan::new(10, 0).is_empty());
    }

    #[test]
    fn test_below_threshold() {
        let err = plan(&SOLE, &sequence(1999), &BatchConfig::new(2000, 500)).unwrap_err();
        assert_eq!(
            err,
            Disqualification::BelowThreshold {
                len: 1999,
                threshold: 2000
            }
        );
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let plan = plan(&SOLE, &sequence(2000), &BatchConfig::new(2000, 500)).unwrap();
        assert_eq!(plan.len(), 4);
    }

    #[test]
    fn test_null_and_empty_sequences() {
        let config = BatchConfig::new(1, 1);
        assert_eq!(
            plan(&SOLE, &[Value::Null], &config).unwrap_err().reason(),
            "sequence below threshold"
        );
        assert_eq!(
            plan(&SOLE, &sequence(0), &config).unwrap_err().reason(),
            "sequence below threshold"
        );
    }

    #[test]
    fn test_invalid_configuration_disqualifies() {
        assert_eq!(
            plan(&SOLE, &sequence(10), &BatchConfig::new(5, 0)),
            Err(Disqualification::InvalidChunkSize(0))
        );
        assert_eq!(
            plan(&SOLE, &sequence(10), &BatchConfig::new(5, -2)),
            Err(Disqualification::InvalidChunkSize(-2))
        );
        assert_eq!(
            plan(&SOLE, &sequence(10), &BatchConfig::new(0, 5)),
            Err(Disqualification::InvalidThreshold(0))
        );
    }

    #[test]
    fn test_chunk_size_clamped_to_threshold() {
        let plan = plan(&SOLE, &sequence(1200), &BatchConfig::new(500, 600)).unwrap();
        assert_eq!(plan.chunk_size(), 500);
        assert_eq!(plan.sequence_len(), 1200);
        assert!(plan.iter().all(|r| r.len() <= 500));
    }

    #[test]
    fn test_keyed_entry_target() {
        let args = vec![json!({"ids": [1, 2, 3, 4, 5], "tenant": "acme"})];
        let target = SplitTarget::Entry {
            index: 0,
            key: "ids".to_string(),
        };

        let plan = plan(&target, &args, &BatchConfig::new(5, 2)).unwrap();
        assert_eq!(plan.ranges(), &[0..2, 2..4, 4..5]);
    }
}
