//! # Pillar 3 Logic Context
//!
//! The primary artifact: everything the AI scriptwriter agent needs in
//! one document. Assembly is delegated to the transformers; this module
//! fixes the key layout and threads the build options through.

use serde::Serialize;

use ngen_core::{NarrativeInput, Timestamp};
use ngen_transform::{
    build_lore_engine, build_script_framework, build_voice_engine, phase_snapshot,
    BrandIntegrationLevel, LoreEngine, MemoryEntry, NarrativePhase, OrlicFramework,
    PhaseSnapshot, ScriptStructure, StylePreset, TonePreset, VoiceEngine,
};

use crate::error::{check_contract, ContractViolation};

/// Knobs for one Pillar 3 build. `Default` matches the standard
/// first-episode configuration: phase 1, ambient integration,
/// conversational style, archetype-derived tone, three-step arc, empty
/// memory.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub phase: NarrativePhase,
    pub integration_level: BrandIntegrationLevel,
    pub style: StylePreset,
    /// Overrides the archetype-derived tone preset when set.
    pub tone_override: Option<TonePreset>,
    pub script_structure: ScriptStructure,
    /// Episodic memory carried over from earlier sessions.
    pub memory_buffer: Vec<MemoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pillar3LogicContext {
    pub meta: Pillar3Meta,
    pub agent_system_prompt_config: AgentSystemPromptConfig,
    pub narrative_state_machine: PhaseSnapshot,
    pub orlic_framework_implementation: OrlicFramework,
    pub truth_terminal_lore_engine: LoreEngine,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pillar3Meta {
    pub generated_for: &'static str,
    pub source_input: &'static str,
    pub generation_timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentSystemPromptConfig {
    pub role_definition: String,
    pub voice_engine: VoiceEngine,
}

/// Assemble the Pillar 3 logic context.
///
/// `generated_at` is injected by the caller; building twice with the same
/// timestamp and options yields byte-identical artifacts.
pub fn build_pillar3_config(
    input: &NarrativeInput,
    options: &BuildOptions,
    generated_at: Timestamp,
) -> Result<Pillar3LogicContext, ContractViolation> {
    check_contract(input)?;

    let persona = &input.autonomous_character_seed.base_persona;
    let role_definition = format!(
        "Kamu adalah {}, {}. {}",
        persona.name, persona.role, persona.demographics
    );

    Ok(Pillar3LogicContext {
        meta: Pillar3Meta {
            generated_for: "Pillar 3 (AI Scriptwriter Agent)",
            source_input: "NarrativeGenesisInput_v2.0",
            generation_timestamp: generated_at.to_iso8601(),
        },
        agent_system_prompt_config: AgentSystemPromptConfig {
            role_definition,
            voice_engine: build_voice_engine(input, options.style, options.tone_override),
        },
        narrative_state_machine: phase_snapshot(input, options.phase, options.integration_level),
        orlic_framework_implementation: build_script_framework(
            &input.strategic_narrative_framework,
            options.script_structure,
        ),
        truth_terminal_lore_engine: build_lore_engine(
            &input.autonomous_character_seed,
            options.memory_buffer.clone(),
        ),
    })
}
