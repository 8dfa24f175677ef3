//! # Argument Classifier
//!
//! Decides whether a call can be split and, if so, which single argument (or which
//! entry of a keyed-collection argument) holds the sequence to chunk.
//!
//! Rules are applied in order and the first match wins:
//!
//! 1. The operation must return an integer.
//! 2. There must be at least one argument.
//! 3. A sole argument must be a sequence, or a keyed collection with exactly one
//!    sequence-valued entry.
//! 4. With several arguments, exactly one must hold a sequence, or exactly one of the
//!    sequence arguments must carry the designation marker.

use super::descriptor::{value_kind, ArgumentVector, OperationDescriptor};
use crate::error::Disqualification;
use serde_json::Value;

/// Where the sequence to split lives within the argument vector
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SplitTarget {
    /// The argument at `index` is itself the sequence
    Argument { index: usize },
    /// The argument at `index` is a keyed collection and the sequence sits under `key`
    Entry { index: usize, key: String },
}

impl SplitTarget {
    pub fn index(&self) -> usize {
        match self {
            SplitTarget::Argument { index } | SplitTarget::Entry { index, .. } => *index,
        }
    }

    /// Borrow the referenced sequence, if it is present and is a sequence.
    pub fn resolve<'a>(&self, args: &'a [Value]) -> Option<&'a Vec<Value>> {
        let slot = args.get(self.index())?;
        let value = match self {
            SplitTarget::Argument { .. } => slot,
            SplitTarget::Entry { key, .. } => slot.as_object()?.get(key)?,
        };
        value.as_array()
    }

    /// Build a new argument vector with the referenced slot replaced by `chunk`.
    ///
    /// `args` is left untouched; every other argument is cloned as-is.
    pub fn substitute(&self, args: &[Value], chunk: Vec<Value>) -> ArgumentVector {
        let mut next = args.to_vec();
        match self {
            SplitTarget::Argument { index } => {
                if let Some(slot) = next.get_mut(*index) {
                    *slot = Value::Array(chunk);
                }
            }
            SplitTarget::Entry { index, key } => {
                if let Some(Value::Object(map)) = next.get_mut(*index) {
                    map.insert(key.clone(), Value::Array(chunk));
                }
            }
        }
        next
    }
}

impl std::fmt::Display for SplitTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SplitTarget::Argument { index } => write!(f, "arg[{index}]"),
            SplitTarget::Entry { index, key } => write!(f, "arg[{index}][{key:?}]"),
        }
    }
}

/// Identify the single splittable argument of a call.
pub fn classify(
    descriptor: &OperationDescriptor,
    args: &[Value],
) -> Result<SplitTarget, Disqualification> {
    if !descriptor.return_kind.is_integer() {
        return Err(Disqualification::NonIntegerResult {
            declared: descriptor.return_kind.type_name().to_string(),
        });
    }

    match args {
        [] => Err(Disqualification::NoArguments),
        [sole] => classify_sole_argument(sole),
        _ => classify_multiple_arguments(descriptor, args),
    }
}

fn classify_sole_argument(sole: &Value) -> Result<SplitTarget, Disqualification> {
    match sole {
        Value::Null => Err(Disqualification::NullSoleArgument),
        Value::Array(_) => Ok(SplitTarget::Argument { index: 0 }),
        Value::Object(map) => {
            let mut keys: Vec<&String> = map
                .iter()
                .filter(|(_, value)| value.is_array())
                .map(|(key, _)| key)
                .collect();

            match keys.len() {
                0 => Err(Disqualification::NoSplittableEntry),
                1 => Ok(SplitTarget::Entry {
                    index: 0,
                    key: keys.remove(0).clone(),
                }),
                _ => Err(Disqualification::AmbiguousSplittableEntries {
                    keys: keys.into_iter().cloned().collect(),
                }),
            }
        }
        other => Err(Disqualification::UnsupportedSoleArgument {
            found: value_kind(other),
        }),
    }
}

fn classify_multiple_arguments(
    descriptor: &OperationDescriptor,
    args: &[Value],
) -> Result<SplitTarget, Disqualification> {
    let candidates: Vec<usize> = args
        .iter()
        .enumerate()
        .filter(|(_, value)| value.is_array())
        .map(|(index, _)| index)
        .collect();

    match candidates.as_slice() {
        [] => return Err(Disqualification::NoSequenceArgument),
        [index] => return Ok(SplitTarget::Argument { index: *index }),
        _ => {}
    }

    // A marker on a non-sequence argument does not count
    let designated: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|index| descriptor.is_designated(*index))
        .collect();

    match designated.as_slice() {
        [] => Err(Disqualification::AmbiguousSequenceArguments { candidates }),
        [index] => Ok(SplitTarget::Argument { index: *index }),
        _ => Err(Disqualification::MultipleDesignatedArguments { designated }),
    }
}
