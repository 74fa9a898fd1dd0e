//! # Validation Report
//!
//! Transient value object summarizing one validation call: pass/fail,
//! ordered errors, ordered warnings, and (when parsing succeeded) the
//! normalized typed document. Created fresh per call, never persisted.

use std::fmt;

use serde::Serialize;

use ngen_core::NarrativeInput;
use ngen_schema::Violation;

/// A non-blocking quality hint attached to a field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Warning {
    /// Dotted path to the field the hint concerns.
    pub path: String,
    /// Human-readable suggestion.
    pub message: String,
}

impl Warning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {}: {}", self.path, self.message)
    }
}

/// The outcome of one [`crate::validate`] call.
///
/// `errors` aggregates schema violations and blocking business-rule
/// failures; `warnings` never affect [`ValidationReport::is_valid`]. The
/// normalized document is exposed only through the gated accessors so a
/// caller cannot accidentally feed a failed document into the
/// transformers.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    is_valid: bool,
    errors: Vec<Violation>,
    warnings: Vec<Warning>,
    normalized_data: Option<NarrativeInput>,
}

impl ValidationReport {
    /// Report for a document that failed schema parsing; business rules
    /// were skipped.
    pub(crate) fn schema_failure(errors: Vec<Violation>) -> Self {
        Self {
            is_valid: false,
            errors,
            warnings: Vec::new(),
            normalized_data: None,
        }
    }

    /// Report for a structurally valid document with business rules applied.
    pub(crate) fn from_rules(
        normalized: NarrativeInput,
        errors: Vec<Violation>,
        warnings: Vec<Warning>,
    ) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            normalized_data: Some(normalized),
        }
    }

    /// True when no blocking error was found. Warnings do not count.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Blocking errors in discovery order (schema first, then business rules).
    pub fn errors(&self) -> &[Violation] {
        &self.errors
    }

    /// Non-blocking warnings in rule order.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// The normalized document, available only on a passing report.
    pub fn normalized(&self) -> Option<&NarrativeInput> {
        if self.is_valid {
            self.normalized_data.as_ref()
        } else {
            None
        }
    }

    /// Consume the report, yielding the normalized document of a passing
    /// validation.
    pub fn into_normalized(self) -> Option<NarrativeInput> {
        if self.is_valid {
            self.normalized_data
        } else {
            None
        }
    }

    /// Summary counts for a passing report.
    pub fn stats(&self) -> Option<ValidationStats> {
        let data = self.normalized()?;
        Some(ValidationStats {
            product_name: data.brand_identity_core.product_name.clone(),
            character_name: data.autonomous_character_seed.base_persona.name.clone(),
            target_persona: data.target_audience_context.persona_code.clone(),
            proof_points_count: data.strategic_narrative_framework.proof_points.len(),
            allowed_tones: data.brand_identity_core.tone_guardrails.allowed.len(),
            forbidden_tones: data.brand_identity_core.tone_guardrails.forbidden.len(),
            slang_count: data
                .target_audience_context
                .language_model
                .slang_whitelist
                .len(),
            autonomy_level: data
                .autonomous_character_seed
                .evolution_parameters
                .autonomy_level
                .as_str()
                .to_string(),
        })
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid {
            writeln!(f, "Validation PASSED - input is valid")?;
        } else {
            writeln!(f, "Validation FAILED")?;
            writeln!(f, "Found {} error(s):", self.errors.len())?;
            for (i, error) in self.errors.iter().enumerate() {
                writeln!(f)?;
                writeln!(f, "{}. {}", i + 1, error.path)?;
                writeln!(f, "   Message: {}", error.message)?;
                if let Some(value) = &error.offending_value {
                    writeln!(f, "   Input value: {value}")?;
                }
            }
        }
        if !self.warnings.is_empty() {
            writeln!(f)?;
            writeln!(f, "Warnings (non-blocking):")?;
            for warning in &self.warnings {
                writeln!(f, "{warning}")?;
            }
        }
        Ok(())
    }
}

/// Machine-readable summary of a validated input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationStats {
    pub product_name: String,
    pub character_name: String,
    pub target_persona: String,
    pub proof_points_count: usize,
    pub allowed_tones: usize,
    pub forbidden_tones: usize,
    pub slang_count: usize,
    pub autonomy_level: String,
}
