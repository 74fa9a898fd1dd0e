//! # Narrative Phase Machine
//!
//! The character journey is a fixed linear progression of three phases.
//! The machine is snapshot-only: callers say which phase the character is
//! in and get that phase's rules back with the brief's enemy interpolated.
//! Nothing here tracks time or episode counts, and no transition fires on
//! its own.

use serde::Serialize;

use ngen_core::NarrativeInput;

use crate::presets::{self, PhaseRules};
use crate::voice::ToneModifiers;

/// One stage of the character journey, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum NarrativePhase {
    /// Aware of the problem, still in denial/anger.
    #[default]
    #[serde(rename = "PHASE_1_THE_WAKE_UP_CALL")]
    WakeUpCall,
    /// Trying solutions, still trial-and-error.
    #[serde(rename = "PHASE_2_THE_EXPERIMENTATION")]
    Experimentation,
    /// Has a working system and measurable results.
    #[serde(rename = "PHASE_3_THE_MASTERY")]
    Mastery,
}

impl NarrativePhase {
    /// The wire key of this phase.
    pub fn key(&self) -> &'static str {
        match self {
            Self::WakeUpCall => "PHASE_1_THE_WAKE_UP_CALL",
            Self::Experimentation => "PHASE_2_THE_EXPERIMENTATION",
            Self::Mastery => "PHASE_3_THE_MASTERY",
        }
    }

    /// The phase after this one, if any.
    pub fn next(&self) -> Option<NarrativePhase> {
        match self {
            Self::WakeUpCall => Some(Self::Experimentation),
            Self::Experimentation => Some(Self::Mastery),
            Self::Mastery => None,
        }
    }

    /// All phases in journey order.
    pub fn all() -> &'static [NarrativePhase] {
        &[Self::WakeUpCall, Self::Experimentation, Self::Mastery]
    }

    fn rules(&self) -> &'static PhaseRules {
        match self {
            Self::WakeUpCall => &presets::PHASE_WAKE_UP_CALL,
            Self::Experimentation => &presets::PHASE_EXPERIMENTATION,
            Self::Mastery => &presets::PHASE_MASTERY,
        }
    }
}

/// How prominently the product may appear in generated scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum BrandIntegrationLevel {
    /// Product mentioned only as a tool, never a savior. The default.
    #[default]
    #[serde(rename = "LEVEL_0_AMBIENT")]
    Ambient,
    /// One soft recommendation per script.
    #[serde(rename = "LEVEL_1_MENTION")]
    Mention,
    /// Product is part of the offered solution.
    #[serde(rename = "LEVEL_2_SHOWCASE")]
    Showcase,
    /// Product is the focus, features demonstrated.
    #[serde(rename = "LEVEL_3_FEATURE")]
    Feature,
}

impl BrandIntegrationLevel {
    /// The wire key of this level.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Ambient => "LEVEL_0_AMBIENT",
            Self::Mention => "LEVEL_1_MENTION",
            Self::Showcase => "LEVEL_2_SHOWCASE",
            Self::Feature => "LEVEL_3_FEATURE",
        }
    }

    /// Human-readable rule text for this level.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Ambient => presets::INTEGRATION_AMBIENT,
            Self::Mention => presets::INTEGRATION_MENTION,
            Self::Showcase => presets::INTEGRATION_SHOWCASE,
            Self::Feature => presets::INTEGRATION_FEATURE,
        }
    }
}

/// The brand integration rule as it appears in the Pillar 3 context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrandIntegrationRule {
    pub level: BrandIntegrationLevel,
    pub description: &'static str,
}

/// A snapshot of the phase machine for one script generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseSnapshot {
    pub current_phase: NarrativePhase,
    pub description: &'static str,
    /// Goal templates with the enemy name interpolated.
    pub allowed_narrative_goals: Vec<String>,
    pub forbidden_narrative_goals: Vec<String>,
    pub tone_profile: ToneModifiers,
    pub brand_integration_rule: BrandIntegrationRule,
}

/// Take a snapshot of the given phase for a validated brief.
pub fn phase_snapshot(
    input: &NarrativeInput,
    phase: NarrativePhase,
    integration: BrandIntegrationLevel,
) -> PhaseSnapshot {
    let enemy = &input.strategic_narrative_framework.enemy.name;
    let rules = phase.rules();
    PhaseSnapshot {
        current_phase: phase,
        description: rules.description,
        allowed_narrative_goals: interpolate_goals(rules.allowed_goals, enemy),
        forbidden_narrative_goals: interpolate_goals(rules.forbidden_goals, enemy),
        tone_profile: rules.tone_profile,
        brand_integration_rule: BrandIntegrationRule {
            level: integration,
            description: integration.description(),
        },
    }
}

fn interpolate_goals(templates: &[&str], enemy: &str) -> Vec<String> {
    templates
        .iter()
        .map(|t| t.replace("{enemy}", enemy))
        .collect()
}
