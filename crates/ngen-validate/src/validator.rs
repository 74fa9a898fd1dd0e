//! # Validator Entry Point
//!
//! [`validate`] is the one function callers use: schema parse, then
//! business rules, returning a [`ValidationReport`]. It never reads or
//! writes anything outside its arguments.

use serde_json::Value;

use crate::report::ValidationReport;
use crate::rules;

/// Validate a raw JSON mapping.
///
/// On schema failure the report carries the aggregated violations and the
/// cross-field rules are skipped — they assume a structurally valid
/// document. On success the rules run in fixed order and the normalized
/// document is attached to the report.
pub fn validate(raw: &Value) -> ValidationReport {
    let input = match ngen_schema::parse(raw) {
        Ok(input) => input,
        Err(err) => {
            let violations = err.violations.into_inner();
            tracing::debug!(violation_count = violations.len(), "schema parse failed");
            return ValidationReport::schema_failure(violations);
        }
    };

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    rules::apply(&input, &mut errors, &mut warnings);

    tracing::debug!(
        project = %input.meta.project_name,
        errors = errors.len(),
        warnings = warnings.len(),
        "business rules applied"
    );

    ValidationReport::from_rules(input, errors, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_input() -> Value {
        json!({
            "meta": {
                "project_name": "FrugalFin",
                "version": "2.0",
                "input_by": "Brand Team",
                "timestamp": "2024-01-15T10:30:00Z"
            },
            "brand_identity_core": {
                "product_name": "FrugalFin",
                "archetype": "The Rebel",
                "core_philosophy": "Financial honesty over hustle-culture fantasy.",
                "tone_guardrails": {
                    "allowed": ["Sarcastic", "Raw", "Honest"],
                    "forbidden": ["Preachy", "Corporate", "Motivational"]
                }
            },
            "strategic_narrative_framework": {
                "world": {
                    "status_quo": "Paychecks evaporate within a week of landing.",
                    "consensus_reality": "Self-reward spending is seen as normal and deserved."
                },
                "enemy": {
                    "name": "Lifestyle Inflation",
                    "manifestation": "Payday discount notifications engineered to empty accounts.",
                    "why_fight_it": "It keeps an entire generation broke while feeling rich."
                },
                "change_vehicle": {
                    "new_insight": "Spending data beats willpower.",
                    "mechanism": "Automatic expense tracking that shows the pattern before the regret."
                },
                "promised_land": {
                    "vision": "Money left over at the end of the month without feeling poor.",
                    "emotional_payoff": "Calm instead of payday anxiety."
                },
                "proof_points": [
                    "Users report saving 23% of income within three months.",
                    "Featured on two national personal-finance podcasts."
                ]
            },
            "autonomous_character_seed": {
                "base_persona": {
                    "name": "Rio",
                    "role": "a 24-year-old junior office worker",
                    "demographics": "24, urban, first salary, drowning in paylater debt"
                },
                "lore_seed": {
                    "central_belief": "The system is designed to keep you broke.",
                    "internal_monologue_style": "Cynical running commentary with sudden sincerity",
                    "obsession_topics": ["hedonic treadmill", "payday discount traps"]
                },
                "evolution_parameters": {
                    "autonomy_level": "High",
                    "memory_retention": "Cumulative (remembers past scripts)",
                    "hallucination_permission": "Allowed (dystopian futures only)"
                }
            },
            "target_audience_context": {
                "persona_code": "GENZ_URBAN_ID",
                "pain_points": [
                    "salary gone before the 15th",
                    "paylater bills stacking up"
                ],
                "language_model": {
                    "slang_whitelist": ["gaji", "ngenes", "auto-miskin"],
                    "cultural_references": ["payday mie instan"]
                }
            }
        })
    }

    #[test]
    fn test_clean_document_passes_without_warnings() {
        let report = validate(&sample_input());
        assert!(report.is_valid());
        assert!(report.errors().is_empty());
        assert!(report.warnings().is_empty());
        assert!(report.normalized().is_some());
    }

    #[test]
    fn test_idempotent_reports() {
        let raw = sample_input();
        let first = validate(&raw);
        let second = validate(&raw);
        assert_eq!(first, second);
    }

    #[test]
    fn test_tone_overlap_blocks() {
        let mut doc = sample_input();
        doc["brand_identity_core"]["tone_guardrails"] = json!({
            "allowed": ["Sarcastic"],
            "forbidden": ["sarcastic"]
        });
        let report = validate(&doc);
        assert!(!report.is_valid());
        assert_eq!(report.errors().len(), 1);
        let error = &report.errors()[0];
        assert_eq!(error.path, "brand_identity_core.tone_guardrails");
        assert!(error.message.contains("\"Sarcastic\""));
        assert!(error.message.contains("\"sarcastic\""));
        // Failed reports never hand out the document.
        assert!(report.normalized().is_none());
    }

    #[test]
    fn test_short_proof_point_warns_but_passes() {
        let mut doc = sample_input();
        doc["strategic_narrative_framework"]["proof_points"] = json!(["ok"]);
        let report = validate(&doc);
        assert!(report.is_valid());
        assert_eq!(report.warnings().len(), 1);
        let warning = &report.warnings()[0];
        assert_eq!(warning.path, "strategic_narrative_framework.proof_points.0");
        assert_eq!(
            warning.message,
            "proof point 0 is short (2 chars, recommend >20)"
        );
        // Warnings never gate the normalized document.
        assert!(report.normalized().is_some());
    }

    #[test]
    fn test_proof_point_at_21_chars_is_fine() {
        let mut doc = sample_input();
        doc["strategic_narrative_framework"]["proof_points"] =
            json!(["exactly twenty-one ch"]);
        let report = validate(&doc);
        assert!(report.warnings().is_empty());
    }

    #[test]
    fn test_rebel_archetype_without_rebellious_tone_warns() {
        let mut doc = sample_input();
        doc["brand_identity_core"]["tone_guardrails"]["allowed"] =
            json!(["Warm", "Gentle"]);
        let report = validate(&doc);
        assert!(report.is_valid());
        assert_eq!(report.warnings().len(), 1);
        assert_eq!(
            report.warnings()[0].path,
            "brand_identity_core.tone_guardrails.allowed"
        );
    }

    #[test]
    fn test_non_rebel_archetype_never_checks_tones() {
        let mut doc = sample_input();
        doc["brand_identity_core"]["archetype"] = json!("The Sage");
        doc["brand_identity_core"]["tone_guardrails"]["allowed"] =
            json!(["Warm", "Gentle"]);
        let report = validate(&doc);
        assert!(report.warnings().is_empty());
    }

    #[test]
    fn test_misaligned_audience_warns() {
        let mut doc = sample_input();
        doc["autonomous_character_seed"]["base_persona"]["demographics"] =
            json!("suburban retiree, golf on weekends");
        let report = validate(&doc);
        assert!(report.is_valid());
        assert_eq!(report.warnings().len(), 1);
        assert_eq!(
            report.warnings()[0].path,
            "autonomous_character_seed.base_persona.demographics"
        );
    }

    #[test]
    fn test_schema_failure_skips_business_rules() {
        let mut doc = sample_input();
        doc["meta"].as_object_mut().unwrap().remove("timestamp");
        // This overlap would be a business-rule error on a valid document.
        doc["brand_identity_core"]["tone_guardrails"] = json!({
            "allowed": ["Sarcastic"],
            "forbidden": ["sarcastic"]
        });
        let report = validate(&doc);
        assert!(!report.is_valid());
        assert_eq!(report.errors().len(), 1);
        assert_eq!(report.errors()[0].path, "meta.timestamp");
        assert!(report.warnings().is_empty());
    }

    #[test]
    fn test_warning_order_follows_rule_order() {
        let mut doc = sample_input();
        doc["brand_identity_core"]["tone_guardrails"]["allowed"] =
            json!(["Warm", "Gentle"]);
        doc["strategic_narrative_framework"]["proof_points"] = json!(["short one"]);
        let report = validate(&doc);
        assert_eq!(report.warnings().len(), 2);
        assert!(report.warnings()[0].path.starts_with("brand_identity_core"));
        assert!(report.warnings()[1]
            .path
            .starts_with("strategic_narrative_framework"));
    }

    #[test]
    fn test_stats_on_passing_report() {
        let report = validate(&sample_input());
        let stats = report.stats().unwrap();
        assert_eq!(stats.product_name, "FrugalFin");
        assert_eq!(stats.character_name, "Rio");
        assert_eq!(stats.proof_points_count, 2);
        assert_eq!(stats.autonomy_level, "High");
    }

    #[test]
    fn test_report_display_lists_every_error() {
        let mut doc = sample_input();
        doc["meta"].as_object_mut().unwrap().remove("project_name");
        doc["meta"].as_object_mut().unwrap().remove("input_by");
        let report = validate(&doc);
        let text = report.to_string();
        assert!(text.contains("Found 2 error(s)"));
        assert!(text.contains("meta.project_name"));
        assert!(text.contains("meta.input_by"));
    }
}
