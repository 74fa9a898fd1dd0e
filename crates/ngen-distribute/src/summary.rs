//! # Distribution Report
//!
//! The third artifact: what was generated, how large each artifact is,
//! the validation warnings carried over, and a quick-reference card for
//! whoever wires the configs into an agent.

use serde::Serialize;

use ngen_core::{NarrativeInput, Timestamp};

use crate::artifact::GeneratedArtifact;

/// How many tones the quick-reference card shows per list.
const QUICK_REF_TONE_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionReport {
    pub generated_at: String,
    pub source_project: String,
    pub input_version: String,
    pub artifacts: Vec<ArtifactSummary>,
    /// Validation warnings carried over from the report, pre-rendered.
    pub warnings: Vec<String>,
    pub quick_reference: QuickReference,
}

/// One generated artifact, by name and compact serialized size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtifactSummary {
    pub file_name: String,
    pub size_bytes: usize,
}

/// Condensed key facts for a human reader.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickReference {
    pub product: String,
    pub character: String,
    pub mission: String,
    pub goal: String,
    pub voice: String,
    pub avoid: String,
}

/// Summarize a finished distribution run.
pub fn build_summary(
    input: &NarrativeInput,
    artifacts: &[GeneratedArtifact],
    warnings: &[String],
    generated_at: Timestamp,
) -> DistributionReport {
    let brand = &input.brand_identity_core;
    let persona = &input.autonomous_character_seed.base_persona;
    let framework = &input.strategic_narrative_framework;

    DistributionReport {
        generated_at: generated_at.to_iso8601(),
        source_project: input.meta.project_name.clone(),
        input_version: input.meta.version.clone(),
        artifacts: artifacts
            .iter()
            .map(|a| ArtifactSummary {
                file_name: a.file_name.to_string(),
                size_bytes: a.serialized_size(),
            })
            .collect(),
        warnings: warnings.to_vec(),
        quick_reference: QuickReference {
            product: brand.product_name.clone(),
            character: format!("{} ({})", persona.name, persona.role),
            mission: format!("Fight {}", framework.enemy.name),
            goal: framework.promised_land.vision.clone(),
            voice: join_first(&brand.tone_guardrails.allowed),
            avoid: join_first(&brand.tone_guardrails.forbidden),
        },
    }
}

fn join_first(items: &[String]) -> String {
    items
        .iter()
        .take(QUICK_REF_TONE_LIMIT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::PILLAR3_FILE_NAME;
    use crate::testutil::{sample_input, sample_timestamp};
    use serde_json::json;

    #[test]
    fn test_quick_reference_card() {
        let report = build_summary(&sample_input(), &[], &[], sample_timestamp());
        let card = &report.quick_reference;
        assert_eq!(card.product, "FrugalFin");
        assert_eq!(card.character, "Rio (a 24-year-old junior office worker)");
        assert_eq!(card.mission, "Fight Lifestyle Inflation");
        assert_eq!(card.voice, "Sarcastic, Raw, Honest");
        assert_eq!(card.avoid, "Preachy, Corporate, Motivational");
    }

    #[test]
    fn test_artifact_sizes_reported() {
        let artifact = GeneratedArtifact {
            file_name: PILLAR3_FILE_NAME,
            value: json!({"k": "v"}),
        };
        let report = build_summary(&sample_input(), &[artifact], &[], sample_timestamp());
        assert_eq!(report.artifacts.len(), 1);
        assert_eq!(report.artifacts[0].file_name, PILLAR3_FILE_NAME);
        assert_eq!(report.artifacts[0].size_bytes, r#"{"k":"v"}"#.len());
    }

    #[test]
    fn test_warnings_carried_through() {
        let warnings = vec!["proof point 0 is short (2 chars, recommend >20)".to_string()];
        let report = build_summary(&sample_input(), &[], &warnings, sample_timestamp());
        assert_eq!(report.warnings, warnings);
    }

    #[test]
    fn test_quick_reference_caps_tone_lists() {
        let mut input = sample_input();
        input.brand_identity_core.tone_guardrails.allowed = vec![
            "One".into(),
            "Two".into(),
            "Three".into(),
            "Four".into(),
        ];
        let report = build_summary(&input, &[], &[], sample_timestamp());
        assert_eq!(report.quick_reference.voice, "One, Two, Three");
    }
}
