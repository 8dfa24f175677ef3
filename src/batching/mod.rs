//! # Batching Module
//!
//! Splits calls whose bulk argument exceeds a configured threshold into several
//! smaller calls and sums their integer results.
//!
//! ## Architecture
//!
//! - **Classifier**: finds the single argument (or keyed-collection entry) holding
//!   the sequence to split
//! - **Planner**: applies the threshold and computes chunk boundaries
//! - **Driver**: invokes the wrapped operation once per chunk, in order
//! - **Processor**: ties the three together and falls back to one unmodified call
//!   whenever splitting does not apply
//!
//! ## Usage
//!
//! ```rust,no_run
//! use batch_splitter::batching::{process, OperationDescriptor, ReturnKind};
//! use batch_splitter::config::BatchConfig;
//! use serde_json::{json, Value};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let descriptor = OperationDescriptor::new("UserMapper:insert_all", ReturnKind::Integer)
//!     .param("List<User>");
//! let users: Vec<Value> = (0..2500).map(|id| json!({ "id": id })).collect();
//!
//! let config = BatchConfig::default();
//! let outcome = process(&descriptor, vec![Value::Array(users)], &config, |args| async move {
//!     // One INSERT per chunk
//!     let rows = args[0].as_array().map_or(0, Vec::len);
//!     Ok::<_, std::io::Error>(json!(rows))
//! })
//! .await?;
//!
//! assert_eq!(outcome.into_value(), json!(2500));
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod descriptor;
pub mod driver;
pub mod planner;
pub mod processor;
pub mod splitter;

pub use classifier::{classify, SplitTarget};
pub use descriptor::{ArgumentVector, OperationDescriptor, ParameterDescriptor, ReturnKind};
pub use driver::execute;
pub use planner::{plan, ChunkPlan};
pub use processor::{prepare, process, process_blocking, Outcome};
pub use splitter::{BatchOperation, BatchSplitter};
