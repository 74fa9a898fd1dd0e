//! # Legacy Scriptwriter Configuration
//!
//! The backward-compatible artifact older scriptwriter agents load. Key
//! names and nesting are a wire contract; field order here is the order
//! they serialize in.

use serde::Serialize;

use ngen_core::{AutonomyLevel, NarrativeInput, Timestamp};
use ngen_transform::build_system_prompt;

use crate::error::{check_contract, ContractViolation};

const CONFIG_VERSION: &str = "1.0";

const FORBIDDEN_STYLES: &[&str] = &[
    "Corporate Speak",
    "Generic Motivational",
    "Condescending",
    "Overly Polished",
];

/// Themes appended after the enemy in `required_themes`.
const STANDING_THEMES: &[&str] = &["Financial Consciousness", "System Awareness"];

const HOW_TO_USE: &[&str] = &[
    "1. Load this config at the start of scriptwriting session",
    "2. Use system_prompt_base.full_prompt as the AI system prompt",
    "3. Before generating script, check guardrails.forbidden_words",
    "4. After generating, validate against guardrails and context",
    "5. Ensure character consistency using character_seed parameters",
];

const SCRIPT_STRUCTURE_REQUIREMENTS: &[&str] = &[
    "Must address 'The Enemy' explicitly",
    "Must paint 'The Promised Land' vision",
    "Must use target audience slang naturally",
    "Must cite at least one proof point",
    "Must maintain character voice throughout",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegacyScriptwriterConfig {
    pub agent_type: &'static str,
    pub version: &'static str,
    pub generated_at: String,
    pub source_project: String,
    pub system_prompt_base: SystemPromptBase,
    pub guardrails: Guardrails,
    pub context: ContextBlock,
    pub content_generation_params: ContentGenerationParams,
    pub usage_instructions: UsageInstructions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemPromptBase {
    pub full_prompt: String,
    pub brand_voice: BrandVoice,
    pub narrative_framework: NarrativeFrameworkBlock,
    pub character_seed: CharacterSeedBlock,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandVoice {
    pub product_name: String,
    pub archetype: String,
    pub philosophy: String,
    pub tone_allowed: Vec<String>,
    pub tone_forbidden: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NarrativeFrameworkBlock {
    pub framework_type: &'static str,
    pub world_status_quo: String,
    pub consensus_reality: String,
    pub enemy: EnemyBlock,
    pub change_vehicle: ChangeVehicleBlock,
    pub promised_land: PromisedLandBlock,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnemyBlock {
    pub name: String,
    pub manifestation: String,
    pub why_fight: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeVehicleBlock {
    pub mechanism: String,
    pub new_insight: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromisedLandBlock {
    pub vision: String,
    pub emotional_payoff: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterSeedBlock {
    pub name: String,
    pub role: String,
    pub demographics: String,
    pub core_belief: String,
    pub internal_style: String,
    pub obsessions: Vec<String>,
    pub autonomy_level: String,
    pub memory_retention: String,
    pub hallucination_permission: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Guardrails {
    pub forbidden_words: Vec<String>,
    pub forbidden_styles: Vec<&'static str>,
    pub required_themes: Vec<String>,
    pub character_consistency_rules: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextBlock {
    pub enemy: ContextEnemy,
    pub promised_land: ContextPromisedLand,
    pub target_audience: ContextAudience,
    pub proof_and_credibility: ProofAndCredibility,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextEnemy {
    pub name: String,
    pub how_it_shows_up: String,
    pub why_we_fight: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextPromisedLand {
    pub vision: String,
    pub emotional_benefit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextAudience {
    pub persona_code: String,
    pub pain_points: Vec<String>,
    pub slang_to_use: Vec<String>,
    pub cultural_references: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProofAndCredibility {
    pub proof_points: Vec<String>,
    pub proof_points_formatted: Vec<String>,
}

/// Booleans derived from the evolution parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentGenerationParams {
    pub remember_past_scripts: bool,
    pub allow_character_evolution: bool,
    pub use_cumulative_memory: bool,
    pub can_imagine_scenarios: bool,
    pub must_cite_proof: bool,
    pub always_reference_enemy: bool,
    pub always_point_to_promised_land: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageInstructions {
    pub how_to_use: Vec<&'static str>,
    pub script_structure_requirements: Vec<&'static str>,
}

/// Assemble the legacy scriptwriter configuration.
///
/// `generated_at` is injected by the caller; building twice with the same
/// timestamp yields byte-identical artifacts.
pub fn build_legacy_config(
    input: &NarrativeInput,
    generated_at: Timestamp,
) -> Result<LegacyScriptwriterConfig, ContractViolation> {
    check_contract(input)?;

    let brand = &input.brand_identity_core;
    let framework = &input.strategic_narrative_framework;
    let character = &input.autonomous_character_seed;
    let audience = &input.target_audience_context;
    let persona = &character.base_persona;
    let lore = &character.lore_seed;
    let evolution = &character.evolution_parameters;

    let mut required_themes = vec![framework.enemy.name.clone()];
    required_themes.extend(STANDING_THEMES.iter().map(|t| t.to_string()));

    Ok(LegacyScriptwriterConfig {
        agent_type: "scriptwriter",
        version: CONFIG_VERSION,
        generated_at: generated_at.to_iso8601(),
        source_project: input.meta.project_name.clone(),
        system_prompt_base: SystemPromptBase {
            full_prompt: build_system_prompt(input),
            brand_voice: BrandVoice {
                product_name: brand.product_name.clone(),
                archetype: brand.archetype.clone(),
                philosophy: brand.core_philosophy.clone(),
                tone_allowed: brand.tone_guardrails.allowed.clone(),
                tone_forbidden: brand.tone_guardrails.forbidden.clone(),
            },
            narrative_framework: NarrativeFrameworkBlock {
                framework_type: "Matt Orlić - Storytelling that Sells",
                world_status_quo: framework.world.status_quo.clone(),
                consensus_reality: framework.world.consensus_reality.clone(),
                enemy: EnemyBlock {
                    name: framework.enemy.name.clone(),
                    manifestation: framework.enemy.manifestation.clone(),
                    why_fight: framework.enemy.why_fight_it.clone(),
                },
                change_vehicle: ChangeVehicleBlock {
                    mechanism: framework.change_vehicle.mechanism.clone(),
                    new_insight: framework.change_vehicle.new_insight.clone(),
                },
                promised_land: PromisedLandBlock {
                    vision: framework.promised_land.vision.clone(),
                    emotional_payoff: framework.promised_land.emotional_payoff.clone(),
                },
            },
            character_seed: CharacterSeedBlock {
                name: persona.name.clone(),
                role: persona.role.clone(),
                demographics: persona.demographics.clone(),
                core_belief: lore.central_belief.clone(),
                internal_style: lore.internal_monologue_style.clone(),
                obsessions: lore.obsession_topics.clone(),
                autonomy_level: evolution.autonomy_level.as_str().to_string(),
                memory_retention: evolution.memory_retention.clone(),
                hallucination_permission: evolution.hallucination_permission.clone(),
            },
        },
        guardrails: Guardrails {
            forbidden_words: brand.tone_guardrails.forbidden.clone(),
            forbidden_styles: FORBIDDEN_STYLES.to_vec(),
            required_themes,
            character_consistency_rules: vec![
                format!("Always speak as {}", persona.name),
                format!("Maintain {} style", lore.internal_monologue_style),
                format!(
                    "Reference obsessions: {}",
                    lore.obsession_topics.join(", ")
                ),
            ],
        },
        context: ContextBlock {
            enemy: ContextEnemy {
                name: framework.enemy.name.clone(),
                how_it_shows_up: framework.enemy.manifestation.clone(),
                why_we_fight: framework.enemy.why_fight_it.clone(),
            },
            promised_land: ContextPromisedLand {
                vision: framework.promised_land.vision.clone(),
                emotional_benefit: framework.promised_land.emotional_payoff.clone(),
            },
            target_audience: ContextAudience {
                persona_code: audience.persona_code.clone(),
                pain_points: audience.pain_points.clone(),
                slang_to_use: audience.language_model.slang_whitelist.clone(),
                cultural_references: audience.language_model.cultural_references.clone(),
            },
            proof_and_credibility: ProofAndCredibility {
                proof_points: framework.proof_points.clone(),
                proof_points_formatted: framework
                    .proof_points
                    .iter()
                    .map(|p| format!("• {p}"))
                    .collect(),
            },
        },
        content_generation_params: ContentGenerationParams {
            remember_past_scripts: true,
            allow_character_evolution: evolution.autonomy_level == AutonomyLevel::High,
            use_cumulative_memory: evolution.uses_cumulative_memory(),
            can_imagine_scenarios: evolution
                .hallucination_permission
                .to_lowercase()
                .contains("allowed"),
            must_cite_proof: true,
            always_reference_enemy: true,
            always_point_to_promised_land: true,
        },
        usage_instructions: UsageInstructions {
            how_to_use: HOW_TO_USE.to_vec(),
            script_structure_requirements: SCRIPT_STRUCTURE_REQUIREMENTS.to_vec(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{sample_input, sample_timestamp};

    #[test]
    fn test_top_level_keys_are_exact() {
        let config = build_legacy_config(&sample_input(), sample_timestamp()).unwrap();
        let value = serde_json::to_value(&config).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "agent_type",
                "version",
                "generated_at",
                "source_project",
                "system_prompt_base",
                "guardrails",
                "context",
                "content_generation_params",
                "usage_instructions",
            ]
        );
        assert_eq!(value["agent_type"], "scriptwriter");
    }

    #[test]
    fn test_generated_at_is_injected_timestamp() {
        let config = build_legacy_config(&sample_input(), sample_timestamp()).unwrap();
        assert_eq!(config.generated_at, "2024-01-15T10:30:00Z");
    }

    #[test]
    fn test_required_themes_lead_with_enemy() {
        let config = build_legacy_config(&sample_input(), sample_timestamp()).unwrap();
        assert_eq!(
            config.guardrails.required_themes,
            vec![
                "Lifestyle Inflation",
                "Financial Consciousness",
                "System Awareness",
            ]
        );
    }

    #[test]
    fn test_evolution_derived_booleans() {
        let input = sample_input();
        let config = build_legacy_config(&input, sample_timestamp()).unwrap();
        let params = config.content_generation_params;
        assert!(params.allow_character_evolution); // autonomy High
        assert!(params.use_cumulative_memory);
        assert!(params.can_imagine_scenarios);
        assert!(params.remember_past_scripts);
    }

    #[test]
    fn test_low_autonomy_blocks_evolution() {
        let mut input = sample_input();
        input
            .autonomous_character_seed
            .evolution_parameters
            .autonomy_level = AutonomyLevel::Low;
        let config = build_legacy_config(&input, sample_timestamp()).unwrap();
        assert!(!config.content_generation_params.allow_character_evolution);
    }

    #[test]
    fn test_proof_points_formatted_as_bullets() {
        let config = build_legacy_config(&sample_input(), sample_timestamp()).unwrap();
        let proof = &config.context.proof_and_credibility;
        assert_eq!(proof.proof_points.len(), proof.proof_points_formatted.len());
        assert!(proof.proof_points_formatted[0].starts_with("• "));
    }

    #[test]
    fn test_empty_proof_points_is_contract_violation() {
        let mut input = sample_input();
        input.strategic_narrative_framework.proof_points.clear();
        let err = build_legacy_config(&input, sample_timestamp()).unwrap_err();
        assert_eq!(err, ContractViolation::EmptyProofPoints);
    }

    #[test]
    fn test_deterministic_with_fixed_timestamp() {
        let input = sample_input();
        let a = build_legacy_config(&input, sample_timestamp()).unwrap();
        let b = build_legacy_config(&input, sample_timestamp()).unwrap();
        assert_eq!(
            serde_json::to_vec(&a).unwrap(),
            serde_json::to_vec(&b).unwrap()
        );
    }
}
