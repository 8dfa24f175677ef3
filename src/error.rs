//! Error types for the batch splitter.
//!
//! Two kinds of outcome are kept apart here. A [`Disqualification`] is not a
//! failure: it names why a call cannot be split and always resolves to a single
//! unmodified passthrough call. A [`SplitError`] is a real failure of the call as
//! a whole and is returned to the caller.

use crate::constants::reasons;
use thiserror::Error;

/// Why a call was passed through to the wrapped operation unsplit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Disqualification {
    #[error("non-integer result (declared return type `{declared}`)")]
    NonIntegerResult { declared: String },

    #[error("no arguments")]
    NoArguments,

    #[error("null sole argument")]
    NullSoleArgument,

    #[error("no splittable entry")]
    NoSplittableEntry,

    #[error("ambiguous splittable entries: {keys:?}")]
    AmbiguousSplittableEntries { keys: Vec<String> },

    #[error("sole argument not a sequence or keyed collection (found {found})")]
    UnsupportedSoleArgument { found: &'static str },

    #[error("no sequence argument found")]
    NoSequenceArgument,

    #[error("ambiguous sequence arguments, no designation (candidates {candidates:?})")]
    AmbiguousSequenceArguments { candidates: Vec<usize> },

    #[error("multiple designated sequence arguments ({designated:?})")]
    MultipleDesignatedArguments { designated: Vec<usize> },

    #[error("sequence below threshold: {len} < {threshold}")]
    BelowThreshold { len: usize, threshold: i64 },

    #[error("invalid threshold: {0}, must be a positive integer")]
    InvalidThreshold(i64),

    #[error("invalid chunk size: {0}, must be a positive integer")]
    InvalidChunkSize(i64),
}

impl Disqualification {
    /// Fixed reason string, stable across releases and free of call-specific detail.
    pub fn reason(&self) -> &'static str {
        match self {
            Disqualification::NonIntegerResult { .. } => reasons::NON_INTEGER_RESULT,
            Disqualification::NoArguments => reasons::NO_ARGUMENTS,
            Disqualification::NullSoleArgument => reasons::NULL_SOLE_ARGUMENT,
            Disqualification::NoSplittableEntry => reasons::NO_SPLITTABLE_ENTRY,
            Disqualification::AmbiguousSplittableEntries { .. } => {
                reasons::AMBIGUOUS_SPLITTABLE_ENTRIES
            }
            Disqualification::UnsupportedSoleArgument { .. } => reasons::UNSUPPORTED_SOLE_ARGUMENT,
            Disqualification::NoSequenceArgument => reasons::NO_SEQUENCE_ARGUMENT,
            Disqualification::AmbiguousSequenceArguments { .. } => {
                reasons::AMBIGUOUS_SEQUENCE_ARGUMENTS
            }
            Disqualification::MultipleDesignatedArguments { .. } => {
                reasons::MULTIPLE_DESIGNATED_ARGUMENTS
            }
            Disqualification::BelowThreshold { .. } => reasons::BELOW_THRESHOLD,
            Disqualification::InvalidThreshold(_) => reasons::INVALID_THRESHOLD,
            Disqualification::InvalidChunkSize(_) => reasons::INVALID_CHUNK_SIZE,
        }
    }

    /// Below-threshold is the ordinary small-call path; everything else points at
    /// a signature or configuration the operator probably wants to hear about.
    pub fn is_expected(&self) -> bool {
        matches!(self, Disqualification::BelowThreshold { .. })
    }
}

/// Failure of a split (or passthrough) call.
#[derive(Debug, Error)]
pub enum SplitError<E> {
    /// The wrapped operation failed. The host's error is carried untouched.
    #[error(transparent)]
    Invocation(E),

    /// A sub-call returned something that cannot be summed.
    #[error("Operation {operation} returned a non-integer result for chunk {chunk_index}: {value}")]
    NonIntegerResult {
        operation: String,
        chunk_index: usize,
        value: serde_json::Value,
    },

    /// The chunk plan was built for a different sequence than the one being split.
    #[error("Chunk plan for {operation} covers {planned} elements but the sequence has {actual}")]
    PlanMismatch {
        operation: String,
        planned: usize,
        actual: usize,
    },

    /// The chunk plan has no ranges, so the sequence would never reach the operation.
    #[error("Chunk plan for {operation} is empty")]
    EmptyPlan { operation: String },

    /// Running total left the `i64` range.
    #[error("Aggregated count for {operation} overflowed after chunk {chunk_index}")]
    CountOverflow {
        operation: String,
        chunk_index: usize,
    },
}

impl<E> SplitError<E> {
    /// Recover the wrapped operation's own error, if that is what failed.
    pub fn into_invocation(self) -> Option<E> {
        match self {
            SplitError::Invocation(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_invocation(&self) -> bool {
        matches!(self, SplitError::Invocation(_))
    }
}

pub type SplitResult<T, E> = std::result::Result<T, SplitError<E>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_strings_are_distinct_for_designation_failures() {
        let none = Disqualification::AmbiguousSequenceArguments {
            candidates: vec![0, 2],
        };
        let many = Disqualification::MultipleDesignatedArguments {
            designated: vec![0, 2],
        };

        assert_eq!(none.reason(), "ambiguous sequence arguments, no designation");
        assert_eq!(many.reason(), "multiple designated sequence arguments");
        assert_ne!(none.reason(), many.reason());
    }

    #[test]
    fn test_display_starts_with_reason() {
        let cases = vec![
            Disqualification::NonIntegerResult {
                declared: "String".to_string(),
            },
            Disqualification::NoArguments,
            Disqualification::NullSoleArgument,
            Disqualification::NoSplittableEntry,
            Disqualification::AmbiguousSplittableEntries {
                keys: vec!["a".to_string(), "b".to_string()],
            },
            Disqualification::UnsupportedSoleArgument { found: "string" },
            Disqualification::NoSequenceArgument,
            Disqualification::BelowThreshold {
                len: 3,
                threshold: 10,
            },
            Disqualification::InvalidThreshold(0),
            Disqualification::InvalidChunkSize(-1),
        ];

        for case in cases {
            assert!(
                case.to_string().starts_with(case.reason()),
                "{case} should start with {}",
                case.reason()
            );
        }
    }

    #[test]
    fn test_only_below_threshold_is_expected() {
        assert!(Disqualification::BelowThreshold {
            len: 1,
            threshold: 2
        }
        .is_expected());
        assert!(!Disqualification::InvalidChunkSize(0).is_expected());
        assert!(!Disqualification::NoArguments.is_expected());
    }

    #[test]
    fn test_invocation_error_is_transparent() {
        let err: SplitError<std::io::Error> =
            SplitError::Invocation(std::io::Error::other("disk full"));
        assert_eq!(err.to_string(), "disk full");
        assert!(err.is_invocation());

        let inner = err.into_invocation().expect("invocation error");
        assert_eq!(inner.to_string(), "disk full");
    }
}
