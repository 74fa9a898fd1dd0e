//! # ngen-schema — Narrative Input Parsing & Structural Validation
//!
//! Converts a raw, untyped JSON mapping into the strongly-typed
//! [`ngen_core::NarrativeInput`], or fails with a [`SchemaError`] carrying
//! every field-level violation found in one pass.
//!
//! ## Collect, Then Decide
//!
//! The parser never fails fast. Every missing field, empty string, short
//! list, enum mismatch, and malformed timestamp is recorded as a
//! [`Violation`] with a dotted path (e.g.
//! `autonomous_character_seed.evolution_parameters.autonomy_level`), and
//! the typed value is constructed only when the violation list is empty.
//! This is what lets a caller show an author every problem at once instead
//! of one per round trip.
//!
//! ## Crate Policy
//!
//! - Depends only on `ngen-core` internally.
//! - Parsing is pure: no I/O, no clock, no mutation of the input value.
//! - Unknown keys are ignored — the brief format tolerates annotation
//!   fields like `comment` blocks.

pub mod parse;
pub mod violation;

pub use parse::parse;
pub use violation::{SchemaError, SchemaViolations, Violation};
