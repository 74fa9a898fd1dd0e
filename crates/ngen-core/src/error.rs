//! # Error Types — Shared Error Hierarchy
//!
//! Defines the error types used throughout the genesis pipeline. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Schema violations are aggregated, never fail-fast; the violation list
//!   lives in `ngen-schema` where it is produced.
//! - Timestamp errors carry the offending string so the caller can show it.
//! - Contract violations (a transformer invoked with data that never passed
//!   validation) are a distinct, fatal class defined in `ngen-distribute`.

use thiserror::Error;

/// Top-level error type for the genesis pipeline core.
#[derive(Error, Debug)]
pub enum NgenError {
    /// A timestamp string could not be interpreted as ISO-8601.
    #[error("timestamp error: {0}")]
    Timestamp(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
