//! # System Prompt Builder
//!
//! Renders a validated brief into the natural-language system prompt the
//! scriptwriter agent runs on. The prompt is a fixed, ordered list of
//! named sections; each section renders from the brief alone, so the
//! whole prompt is byte-deterministic for a given input.

use ngen_core::NarrativeInput;

/// Proof points and pain points are summarized, not dumped; anything past
/// this count is left to the context block of the artifact.
const PROMPT_LIST_LIMIT: usize = 3;

/// One named section of the system prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSection {
    pub name: &'static str,
    pub body: String,
}

/// Render every prompt section in order.
pub fn prompt_sections(input: &NarrativeInput) -> Vec<PromptSection> {
    let persona = &input.autonomous_character_seed.base_persona;
    let lore = &input.autonomous_character_seed.lore_seed;
    let evolution = &input.autonomous_character_seed.evolution_parameters;
    let framework = &input.strategic_narrative_framework;
    let enemy = &framework.enemy;
    let brand = &input.brand_identity_core;
    let audience = &input.target_audience_context;

    let section = |name, body| PromptSection { name, body };

    vec![
        section(
            "identity",
            format!(
                "You are {}, {}. {}",
                persona.name, persona.role, persona.demographics
            ),
        ),
        section(
            "core_belief",
            format!("Your Core Belief: {}", lore.central_belief),
        ),
        section(
            "mission",
            format!(
                "Your Mission: Fight against {} - {} {}",
                enemy.name, enemy.manifestation, enemy.why_fight_it
            ),
        ),
        section(
            "voice",
            format!(
                "Your Voice: {}.\nNEVER use: {}.",
                brand.tone_guardrails.allowed.join(", "),
                brand.tone_guardrails.forbidden.join(", ")
            ),
        ),
        section(
            "internal_monologue",
            format!("Your Internal Monologue: {}", lore.internal_monologue_style),
        ),
        section(
            "obsessions",
            format!("Your Obsessions: {}.", lore.obsession_topics.join(", ")),
        ),
        section(
            "proof",
            format!(
                "When creating content, always cite proof: {}.",
                join_first(&framework.proof_points, " | ")
            ),
        ),
        section(
            "promised_land",
            format!(
                "Always point to The Promised Land: {}",
                framework.promised_land.vision
            ),
        ),
        section(
            "audience",
            format!(
                "Speak to: {} - those with {}.",
                audience.persona_code,
                quoted_first(&audience.pain_points)
            ),
        ),
        section(
            "language",
            format!(
                "Use their language: {}.",
                audience.language_model.slang_whitelist.join(", ")
            ),
        ),
        section(
            "evolution",
            format!(
                "[System]: Autonomy Level = {} | Memory = {} | Imagination = {}",
                evolution.autonomy_level.as_str(),
                evolution.memory_retention,
                evolution.hallucination_permission
            ),
        ),
    ]
}

/// The full system prompt: every section body, blank-line separated.
pub fn build_system_prompt(input: &NarrativeInput) -> String {
    prompt_sections(input)
        .iter()
        .map(|s| s.body.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// A one-paragraph prompt carrying only the character voice.
pub fn build_concise_prompt(input: &NarrativeInput) -> String {
    let persona = &input.autonomous_character_seed.base_persona;
    let lore = &input.autonomous_character_seed.lore_seed;
    format!(
        "You are {} ({}). Core belief: {}. Voice: {}.",
        persona.name,
        persona.role,
        lore.central_belief,
        input.brand_identity_core.tone_guardrails.allowed.join(", ")
    )
}

fn join_first(items: &[String], separator: &str) -> String {
    items
        .iter()
        .take(PROMPT_LIST_LIMIT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}

fn quoted_first(items: &[String]) -> String {
    items
        .iter()
        .take(PROMPT_LIST_LIMIT)
        .map(|p| format!("\"{p}\""))
        .collect::<Vec<_>>()
        .join(", ")
}
