//! # ngen-distribute — Artifact Assembly
//!
//! The output stage of the pipeline. From one validated brief it builds:
//!
//! - the **Pillar 3 logic context** (`output_pillar3_logic_context.json`),
//!   the primary artifact for the AI scriptwriter agent;
//! - the **legacy scriptwriter config** (`scriptwriter_config.json`),
//!   kept for agents that predate the Pillar 3 format;
//! - the **distribution report** (`distribution_report.json`) summarizing
//!   the run.
//!
//! ## Crate Policy
//!
//! - Timestamps are injected by the caller; nothing here reads a wall
//!   clock, so a fixed timestamp yields byte-identical artifacts.
//! - All I/O goes through the [`ArtifactSink`] trait. The library never
//!   touches the file system.
//! - Inputs that bypassed the parser and break its invariants surface as
//!   [`ContractViolation`], never a panic.
//! - Artifact key names and nesting are a wire contract shared with the
//!   consuming agents; changing them is a breaking change.

pub mod artifact;
pub mod distributor;
pub mod error;
pub mod legacy;
pub mod pillar3;
pub mod summary;

#[cfg(test)]
mod testutil;

pub use artifact::{
    ArtifactSink, GeneratedArtifact, MemorySink, LEGACY_FILE_NAME, PILLAR3_FILE_NAME,
    REPORT_FILE_NAME,
};
pub use distributor::distribute;
pub use error::{ContractViolation, DistributeError};
pub use legacy::{build_legacy_config, LegacyScriptwriterConfig};
pub use pillar3::{build_pillar3_config, BuildOptions, Pillar3LogicContext};
pub use summary::{build_summary, ArtifactSummary, DistributionReport, QuickReference};
