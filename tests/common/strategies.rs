use proptest::prelude::*;
use serde_json::{json, Value};

/// Strategy for generating sequences of up to `max_len` JSON integers
pub fn sequence_strategy(max_len: usize) -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(any::<i32>().prop_map(|n| json!(n)), 0..=max_len)
}

/// Strategy for generating positive (threshold, chunk_size) pairs, chunk size
/// sometimes larger than the threshold
pub fn batch_config_strategy() -> impl Strategy<Value = (i64, i64)> {
    (1i64..=64, 1i64..=96)
}

/// Strategy for generating scalar arguments that are never sequences
pub fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z]{0,12}".prop_map(Value::String),
        Just(json!({"tenant": "acme"})),
    ]
}
