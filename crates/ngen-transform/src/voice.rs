//! # Voice Engine
//!
//! Builds the voice engine block of the Pillar 3 context: syntax
//! constraints from a style preset, vocabulary whitelist/blacklist, and
//! the three tone modifier axes.

use serde::Serialize;

use ngen_core::NarrativeInput;

use crate::presets;

/// Syntax style preset selecting a fixed constraint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StylePreset {
    /// Short sentences, intrusive-thought parentheticals. The default.
    #[default]
    Conversational,
    /// Complete sentences, restrained slang.
    Formal,
    /// Fragments and emoji permitted.
    Casual,
}

impl StylePreset {
    /// The constraint lines for this style.
    pub fn syntax_constraints(&self) -> &'static [&'static str] {
        match self {
            Self::Conversational => presets::SYNTAX_CONVERSATIONAL,
            Self::Formal => presets::SYNTAX_FORMAL,
            Self::Casual => presets::SYNTAX_CASUAL,
        }
    }
}

/// One tone axis: a qualitative label plus a 0-10 intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToneScalar {
    /// Qualitative reading of the level, sometimes annotated.
    pub label: &'static str,
    /// Intensity on a 0-10 scale.
    pub level: u8,
}

impl ToneScalar {
    pub const fn new(label: &'static str, level: u8) -> Self {
        Self { label, level }
    }
}

/// The three tone axes of a character voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToneModifiers {
    pub sarcasm: ToneScalar,
    pub optimism: ToneScalar,
    pub paranoia: ToneScalar,
}

/// Named tone modifier preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TonePreset {
    /// High sarcasm, low optimism. Default for rebel-archetype brands.
    Rebellious,
    /// Mid everything. Default for every other archetype.
    Balanced,
    /// Low sarcasm, high optimism.
    Hopeful,
}

impl TonePreset {
    /// The modifier values of this preset.
    pub fn modifiers(&self) -> ToneModifiers {
        match self {
            Self::Rebellious => presets::TONE_REBELLIOUS,
            Self::Balanced => presets::TONE_BALANCED,
            Self::Hopeful => presets::TONE_HOPEFUL,
        }
    }

    /// Pick a preset from the brand archetype: anything containing
    /// `rebel` (case-insensitive) is rebellious, the rest balanced.
    pub fn for_archetype(archetype: &str) -> Self {
        if archetype.to_lowercase().contains("rebel") {
            Self::Rebellious
        } else {
            Self::Balanced
        }
    }
}

/// The assembled voice engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoiceEngine {
    /// Constraint lines from the selected style preset.
    pub syntax_constraints: Vec<String>,
    /// Audience slang, verbatim and in input order.
    pub vocabulary_whitelist: Vec<String>,
    /// Common violation phrases followed by the brand's forbidden tones.
    pub vocabulary_blacklist: Vec<String>,
    /// The three tone axes.
    pub tone_modifiers: ToneModifiers,
}

/// Build the voice engine for a validated brief.
///
/// `tone` overrides the archetype-derived preset when given. The
/// blacklist is the fixed common table with the brand's forbidden tones
/// appended; duplicates are kept so the brand's own wording always
/// appears.
pub fn build_voice_engine(
    input: &NarrativeInput,
    style: StylePreset,
    tone: Option<TonePreset>,
) -> VoiceEngine {
    let brand = &input.brand_identity_core;
    let preset = tone.unwrap_or_else(|| TonePreset::for_archetype(&brand.archetype));

    let mut vocabulary_blacklist: Vec<String> = presets::COMMON_VOCABULARY_BLACKLIST
        .iter()
        .map(|s| s.to_string())
        .collect();
    vocabulary_blacklist.extend(brand.tone_guardrails.forbidden.iter().cloned());

    VoiceEngine {
        syntax_constraints: style
            .syntax_constraints()
            .iter()
            .map(|s| s.to_string())
            .collect(),
        vocabulary_whitelist: input
            .target_audience_context
            .language_model
            .slang_whitelist
            .clone(),
        vocabulary_blacklist,
        tone_modifiers: preset.modifiers(),
    }
}
