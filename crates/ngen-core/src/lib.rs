//! # ngen-core — Foundational Types for the Narrative Genesis Pipeline
//!
//! This crate is the bedrock of the genesis pipeline. It defines the typed
//! representation of one validated narrative brief and the primitives the
//! rest of the workspace builds on. Every other crate depends on
//! `ngen-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One typed model, constructed only by the parser.** `NarrativeInput`
//!    and its sub-entities are plain data with public fields, but the only
//!    supported construction path is `ngen-schema::parse` — transformers
//!    assume a document that survived validation.
//!
//! 2. **Exact-match enums where the contract is strict.** `AutonomyLevel`
//!    accepts `Low`/`Medium`/`High` and nothing else — `"high"` is a
//!    schema violation, not a convenience coercion.
//!
//! 3. **Legacy leniency isolated behind named predicates.** The
//!    `hallucination_permission` field is free text validated by token
//!    containment; that rule lives in exactly one place
//!    ([`HallucinationGrant::from_free_text`]) so it stays visible and
//!    independently testable.
//!
//! 4. **Timestamps are injected, never sampled.** The core holds no clock.
//!    [`Timestamp`] parses flexibly on ingest and renders
//!    `YYYY-MM-DDTHH:MM:SSZ` on output; callers that need "now" sample it
//!    themselves and pass it in.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ngen-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod input;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::NgenError;
pub use input::{
    AutonomousCharacterSeed, AutonomyLevel, BasePersona, BrandIdentityCore, ChangeVehicle,
    Enemy, EvolutionParameters, HallucinationGrant, LanguageModel, LoreSeed, Meta,
    NarrativeInput, ProductRelation, PromisedLand, StrategicNarrativeFramework,
    TargetAudienceContext, ToneGuardrails, TransformationThesis, World,
};
pub use temporal::Timestamp;
