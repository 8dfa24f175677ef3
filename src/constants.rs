//! # System Constants
//!
//! Defaults and fixed names that define the operational boundaries of the
//! batch splitter.

/// Sequence length at which splitting kicks in when nothing else is configured.
///
/// Just under the 2100 bind-parameter ceiling of SQL Server style drivers.
pub const DEFAULT_THRESHOLD: i64 = 2000;

/// Maximum number of elements handed to the wrapped operation per sub-call.
pub const DEFAULT_CHUNK_SIZE: i64 = 500;

/// Prefix for environment variable overrides (`BATCH_SPLITTER_DEFAULTS__THRESHOLD=...`).
pub const ENV_PREFIX: &str = "BATCH_SPLITTER";

/// Environment variables consulted, in order, to determine the runtime environment.
pub const ENVIRONMENT_VARIABLES: [&str; 2] = ["BATCH_SPLITTER_ENV", "APP_ENV"];

/// Human readable reasons reported when a call is passed through unsplit.
pub mod reasons {
    pub const NON_INTEGER_RESULT: &str = "non-integer result";
    pub const NO_ARGUMENTS: &str = "no arguments";
    pub const NULL_SOLE_ARGUMENT: &str = "null sole argument";
    pub const NO_SPLITTABLE_ENTRY: &str = "no splittable entry";
    pub const AMBIGUOUS_SPLITTABLE_ENTRIES: &str = "ambiguous splittable entries";
    pub const UNSUPPORTED_SOLE_ARGUMENT: &str = "sole argument not a sequence or keyed collection";
    pub const NO_SEQUENCE_ARGUMENT: &str = "no sequence argument found";
    pub const AMBIGUOUS_SEQUENCE_ARGUMENTS: &str = "ambiguous sequence arguments, no designation";
    pub const MULTIPLE_DESIGNATED_ARGUMENTS: &str = "multiple designated sequence arguments";
    pub const BELOW_THRESHOLD: &str = "sequence below threshold";
    pub const INVALID_THRESHOLD: &str = "invalid threshold";
    pub const INVALID_CHUNK_SIZE: &str = "invalid chunk size";
}
