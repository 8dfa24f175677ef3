#![allow(clippy::doc_markdown)] // Allow technical terms like MyBatis, JDBC in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Batch Splitter
//!
//! Call-splitting middleware for operations whose single bulk argument may exceed a
//! downstream size limit, such as the bind-parameter ceiling of a SQL driver.
//!
//! ## Overview
//!
//! A host intercepts a call and hands the splitter the operation's metadata, the
//! actual arguments, the operation's batch configuration and a way to invoke the
//! real operation. When the bulk sequence reaches the configured threshold it is cut
//! into chunks, the operation runs once per chunk in order, and the integer results
//! are summed. In every other case the operation runs once with the original
//! arguments and its result is returned unchanged.
//!
//! ## Module Organization
//!
//! - [`batching`] - Classification, planning, execution and the host-facing splitter
//! - [`config`] - Per-operation thresholds and chunk sizes, file/env loading
//! - [`error`] - Disqualification reasons and call failures
//! - [`logging`] - Structured logging setup
//! - [`constants`] - Defaults and reason strings
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use batch_splitter::{
//!     BatchConfig, BatchSettings, BatchSplitter, OperationDescriptor, ReturnKind,
//! };
//! use serde_json::{json, Value};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let name = OperationDescriptor::qualify("UserMapper", "delete_by_ids");
//! let splitter = BatchSplitter::new(
//!     BatchSettings::default().with_operation(name.clone(), BatchConfig::new(1000, 200)),
//! );
//! let descriptor = OperationDescriptor::new(name, ReturnKind::Integer).param("List<Long>");
//! let ids: Vec<Value> = (0..1500).map(|id| json!(id)).collect();
//!
//! let deleted = splitter
//!     .call_with(&descriptor, vec![Value::Array(ids)], |args| async move {
//!         Ok::<_, std::io::Error>(json!(args[0].as_array().map_or(0, Vec::len)))
//!     })
//!     .await?;
//!
//! println!("deleted {}", deleted.into_value());
//! # Ok(())
//! # }
//! ```

pub mod batching;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;

pub use batching::{
    classify, execute, plan, prepare, process, process_blocking, ArgumentVector, BatchOperation,
    BatchSplitter, ChunkPlan, OperationDescriptor, Outcome, ParameterDescriptor, ReturnKind,
    SplitTarget,
};
pub use config::{BatchConfig, BatchSettings, ConfigLoader, ConfigurationError};
pub use error::{Disqualification, SplitError, SplitResult};
