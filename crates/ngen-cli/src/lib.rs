//! # ngen-cli — Narrative Genesis Command-Line Interface
//!
//! Thin front-end over the library crates: load a brief from disk, run
//! validation, print the report, and (unless `--validate-only`) write the
//! agent configuration artifacts into the output directory.
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the run logic.
//! - No business logic here — everything delegates to `ngen-validate` and
//!   `ngen-distribute`.
//! - File loading errors (missing file, malformed JSON) are reported
//!   before the core pipeline runs.

pub mod run;
pub mod sink;
