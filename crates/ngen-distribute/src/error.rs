//! # Distribution Errors
//!
//! Two classes: [`ContractViolation`] for hand-constructed inputs that
//! bypassed the parser, and [`DistributeError`] wrapping everything that
//! can fail while assembling or storing artifacts.

use thiserror::Error;

use ngen_core::NarrativeInput;

/// The input breaks an invariant the parser guarantees.
///
/// Cannot occur for validator-produced inputs; surfacing it instead of
/// panicking keeps hand-constructed inputs (tests, embedding callers) on
/// the error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("proof_points must not be empty")]
    EmptyProofPoints,
    #[error("obsession_topics must not be empty")]
    EmptyObsessions,
    #[error("tone_guardrails.allowed must not be empty")]
    EmptyAllowedTones,
    #[error("tone_guardrails.forbidden must not be empty")]
    EmptyForbiddenTones,
}

/// Anything that can fail during distribution.
#[derive(Debug, Error)]
pub enum DistributeError {
    #[error("input violates distribution contract: {0}")]
    Contract(#[from] ContractViolation),
    #[error("artifact serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("artifact sink failed: {0}")]
    Sink(#[from] std::io::Error),
}

/// Check the invariants the artifact builders rely on.
pub(crate) fn check_contract(input: &NarrativeInput) -> Result<(), ContractViolation> {
    if input.strategic_narrative_framework.proof_points.is_empty() {
        return Err(ContractViolation::EmptyProofPoints);
    }
    if input
        .autonomous_character_seed
        .lore_seed
        .obsession_topics
        .is_empty()
    {
        return Err(ContractViolation::EmptyObsessions);
    }
    let tones = &input.brand_identity_core.tone_guardrails;
    if tones.allowed.is_empty() {
        return Err(ContractViolation::EmptyAllowedTones);
    }
    if tones.forbidden.is_empty() {
        return Err(ContractViolation::EmptyForbiddenTones);
    }
    Ok(())
}
