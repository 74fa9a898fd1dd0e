//! # ngen-validate — Validation Orchestration
//!
//! The single callable surface of the validation stage is [`validate`]:
//! schema parsing via `ngen-schema`, then cross-field business rules in a
//! fixed order, producing a [`ValidationReport`].
//!
//! ## Errors vs Warnings
//!
//! Structural violations and the tone-overlap rule are blocking errors;
//! the remaining rules are quality heuristics that warn without affecting
//! `is_valid`. Warnings always surface alongside a passing result and
//! never block generation.
//!
//! ## Purity
//!
//! Validation is a pure function of the raw mapping: no I/O, no clock, no
//! state across calls. An interactive front-end may call [`validate`] on
//! every keystroke-debounce and treat each call as independent.
//!
//! ## Crate Policy
//!
//! - Business rules run only on structurally valid documents; on a
//!   `SchemaError` the report carries the schema violations and rules are
//!   skipped.
//! - Rule order is fixed and observable through the report's error and
//!   warning ordering.

pub mod report;
pub mod rules;
pub mod validator;

pub use report::{ValidationReport, ValidationStats, Warning};
pub use validator::validate;
