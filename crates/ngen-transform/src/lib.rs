//! # ngen-transform — Pure Transformers
//!
//! Turns a validated [`NarrativeInput`](ngen_core::NarrativeInput) into the
//! building blocks of the downstream agent configurations:
//!
//! - [`prompt`] — the ordered-section system prompt and its concise variant
//! - [`voice`] — syntax constraints, vocabulary lists, tone modifiers
//! - [`phases`] — the snapshot-only narrative phase machine
//! - [`orlic`] — the framework rendered as a script structure template
//! - [`lore`] — obsessions, episodic memory, hallucination guidance
//! - [`presets`] — the static tables the above draw from
//!
//! ## Crate Policy
//!
//! - Every builder is a pure function of `(&input, params)`: no I/O, no
//!   clock, no global state. Same input, same bytes out.
//! - Builders assume a parser-produced input and do not re-validate;
//!   hand-constructed inputs are checked at the distribution boundary.
//! - Preset copy is part of the product contract and is never reworded.

pub mod lore;
pub mod orlic;
pub mod phases;
pub mod presets;
pub mod prompt;
pub mod voice;

#[cfg(test)]
mod testutil;

pub use lore::{build_lore_engine, LoreEngine, MemoryEntry, MemoryKind};
pub use orlic::{build_script_framework, OrlicFramework, ScriptStep, ScriptStructure, StepType};
pub use phases::{
    phase_snapshot, BrandIntegrationLevel, BrandIntegrationRule, NarrativePhase, PhaseSnapshot,
};
pub use prompt::{build_concise_prompt, build_system_prompt, prompt_sections, PromptSection};
pub use voice::{build_voice_engine, StylePreset, ToneModifiers, TonePreset, ToneScalar, VoiceEngine};
