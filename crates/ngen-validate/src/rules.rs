//! # Cross-Field Business Rules
//!
//! Rules the field-level schema cannot express alone. They run in a fixed
//! order on a structurally valid document, each appending to either the
//! blocking error list or the warning list:
//!
//! 1. Tone overlap (error)
//! 2. Archetype/tone mismatch (warning)
//! 3. Proof point strength (warning)
//! 4. Audience/persona alignment (warning)

use ngen_core::NarrativeInput;
use ngen_schema::Violation;
use serde_json::json;

use crate::report::Warning;

/// Tones that signal a rebellious brand voice.
const REBELLIOUS_TONE_KEYWORDS: [&str; 3] = ["sarcastic", "raw", "unfiltered"];

/// Proof points at or under this many characters draw a warning.
const PROOF_POINT_MIN_CHARS: usize = 20;

/// Demographics words shorter than this are ignored by the alignment
/// heuristic; articles and pronouns produce false matches.
const ALIGNMENT_MIN_WORD_LEN: usize = 4;

/// Apply all business rules in their fixed order.
pub(crate) fn apply(
    input: &NarrativeInput,
    errors: &mut Vec<Violation>,
    warnings: &mut Vec<Warning>,
) {
    check_tone_overlap(input, errors);
    check_archetype_tone_mismatch(input, warnings);
    check_proof_point_strength(input, warnings);
    check_audience_alignment(input, warnings);
}

/// Blocking: a tone cannot be both allowed and forbidden. Comparison is
/// case-insensitive; each overlapping term is named with both spellings.
fn check_tone_overlap(input: &NarrativeInput, errors: &mut Vec<Violation>) {
    for (allowed, forbidden) in input
        .brand_identity_core
        .tone_guardrails
        .overlapping_terms()
    {
        errors.push(Violation::with_value(
            "brand_identity_core.tone_guardrails",
            format!(
                "tone cannot be both allowed and forbidden: \
                 \"{allowed}\" (allowed) overlaps \"{forbidden}\" (forbidden)"
            ),
            json!([allowed, forbidden]),
        ));
    }
}

/// Warning: a rebellion-signifying archetype should come with at least one
/// rebellion-signifying allowed tone.
fn check_archetype_tone_mismatch(input: &NarrativeInput, warnings: &mut Vec<Warning>) {
    let archetype = input.brand_identity_core.archetype.to_lowercase();
    if !archetype.contains("rebel") {
        return;
    }
    let has_rebellious_tone = input
        .brand_identity_core
        .tone_guardrails
        .allowed
        .iter()
        .any(|tone| {
            let tone = tone.to_lowercase();
            REBELLIOUS_TONE_KEYWORDS.iter().any(|kw| tone.contains(kw))
        });
    if !has_rebellious_tone {
        warnings.push(Warning::new(
            "brand_identity_core.tone_guardrails.allowed",
            "archetype suggests rebellion but no allowed tone is rebellious \
             (e.g. Sarcastic, Raw, Unfiltered)",
        ));
    }
}

/// Warning: short proof points read as unsubstantiated claims.
fn check_proof_point_strength(input: &NarrativeInput, warnings: &mut Vec<Warning>) {
    for (i, point) in input
        .strategic_narrative_framework
        .proof_points
        .iter()
        .enumerate()
    {
        let chars = point.chars().count();
        if chars <= PROOF_POINT_MIN_CHARS {
            warnings.push(Warning::new(
                format!("strategic_narrative_framework.proof_points.{i}"),
                format!(
                    "proof point {i} is short ({chars} chars, recommend >{PROOF_POINT_MIN_CHARS})"
                ),
            ));
        }
    }
}

/// Warning: the character should share at least one concern with the
/// audience. Checked as substring-level overlap between demographics words
/// and pain points.
fn check_audience_alignment(input: &NarrativeInput, warnings: &mut Vec<Warning>) {
    let demographics = input
        .autonomous_character_seed
        .base_persona
        .demographics
        .to_lowercase();
    let pain_points: Vec<String> = input
        .target_audience_context
        .pain_points
        .iter()
        .map(|p| p.to_lowercase())
        .collect();

    let aligned = demographics
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|word| word.chars().count() >= ALIGNMENT_MIN_WORD_LEN)
        .any(|word| pain_points.iter().any(|p| p.contains(word)));

    if !aligned {
        warnings.push(Warning::new(
            "autonomous_character_seed.base_persona.demographics",
            "character demographics do not reference any target audience pain point",
        ));
    }
}
