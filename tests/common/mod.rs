//! Shared helpers for batch splitter integration tests
#![allow(dead_code)]

pub mod strategies;

use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// A sequence of `len` numbered elements
pub fn numbered(len: usize) -> Value {
    Value::Array((0..len).map(|i| json!(i)).collect())
}

/// Records every argument vector the wrapped operation receives
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<Vec<Value>>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, args: &[Value]) {
        self.calls.lock().unwrap().push(args.to_vec());
    }

    pub fn calls(&self) -> Vec<Vec<Value>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Length of the sequence at `index` in each recorded call
    pub fn sequence_lengths(&self, index: usize) -> Vec<usize> {
        self.calls()
            .iter()
            .map(|args| args[index].as_array().map_or(0, Vec::len))
            .collect()
    }
}
