//! # Narrative Input Model
//!
//! The typed representation of one Narrative Genesis brief — the single
//! document this pipeline ingests. A value of [`NarrativeInput`] is only
//! meaningful when produced by `ngen-schema::parse`, which enforces the
//! field constraints; downstream transformers read it and never mutate it.
//!
//! ## Field Conventions
//!
//! - All strings are whitespace-trimmed at parse time; "non-empty" means
//!   non-empty after trimming.
//! - Ordered lists stay `Vec<String>` in input order — proof points and
//!   obsession topics are cited by index in warnings and copied verbatim
//!   into artifacts.
//! - Optional fields (`transformation_thesis`, `product_relation`,
//!   `social_setting`, `affliction`, `aspiration`) deepen the character
//!   when present but are never required.

use serde::{Deserialize, Serialize};

/// Root of one validated narrative brief.
///
/// Immutable once constructed: owned by the pipeline invocation that
/// produced it, read by transformers, never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeInput {
    /// Document metadata (project, author, timestamp).
    pub meta: Meta,
    /// Brand identity and tone guardrails.
    pub brand_identity_core: BrandIdentityCore,
    /// The Orlić storytelling framework: world, enemy, change, promised land.
    pub strategic_narrative_framework: StrategicNarrativeFramework,
    /// The autonomous character seed (Truth Terminal concept).
    pub autonomous_character_seed: AutonomousCharacterSeed,
    /// Who the content speaks to and in what language.
    pub target_audience_context: TargetAudienceContext,
}

/// Metadata about the brief itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// Project name; non-empty.
    pub project_name: String,
    /// Free-form version string.
    pub version: String,
    /// Author of the brief; non-empty.
    pub input_by: String,
    /// ISO-8601 timestamp, kept verbatim (post-trim). Validated parseable
    /// by `Timestamp::parse_flexible` at schema time.
    pub timestamp: String,
}

/// Core brand identity and philosophy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandIdentityCore {
    /// Product name; non-empty.
    pub product_name: String,
    /// Brand archetype (e.g. "The Rebel"); non-empty.
    pub archetype: String,
    /// Core brand philosophy; non-empty.
    pub core_philosophy: String,
    /// Allowed/forbidden tone characteristics.
    pub tone_guardrails: ToneGuardrails,
}

/// Tone guidelines for the brand voice.
///
/// Both lists are non-empty; case-insensitive disjointness of the two is a
/// blocking business rule enforced by the validator, not by the parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneGuardrails {
    /// Allowed tone characteristics.
    pub allowed: Vec<String>,
    /// Forbidden tone characteristics.
    pub forbidden: Vec<String>,
}

impl ToneGuardrails {
    /// Case-insensitive overlap between allowed and forbidden tones, in
    /// first-seen allowed-list order. Each overlap is reported as
    /// `(allowed_term, forbidden_term)` with original casing preserved.
    pub fn overlapping_terms(&self) -> Vec<(String, String)> {
        let mut overlaps = Vec::new();
        for allowed in &self.allowed {
            let lower = allowed.to_lowercase();
            if let Some(forbidden) = self
                .forbidden
                .iter()
                .find(|f| f.to_lowercase() == lower)
            {
                overlaps.push((allowed.clone(), forbidden.clone()));
            }
        }
        overlaps
    }
}

/// The Orlić strategic narrative framework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategicNarrativeFramework {
    /// The status quo the audience lives in.
    pub world: World,
    /// The antagonist the brand fights.
    pub enemy: Enemy,
    /// The mechanism of transformation.
    pub change_vehicle: ChangeVehicle,
    /// The desired future state.
    pub promised_land: PromisedLand,
    /// Evidence and validation points; at least one.
    pub proof_points: Vec<String>,
    /// Emotional journey from pain to payoff, when the brief supplies one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transformation_thesis: Option<TransformationThesis>,
}

/// Current state of reality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    /// Description of the status quo.
    pub status_quo: String,
    /// What everyone believes to be normal.
    pub consensus_reality: String,
}

/// The antagonist or problem being fought.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Name of the enemy.
    pub name: String,
    /// How the enemy shows up in daily life.
    pub manifestation: String,
    /// Why this enemy must be defeated.
    pub why_fight_it: String,
}

/// The mechanism of transformation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeVehicle {
    /// The new insight or tool that enables change.
    pub new_insight: String,
    /// How the change vehicle works.
    pub mechanism: String,
}

/// The desired future state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromisedLand {
    /// Vision of the future.
    pub vision: String,
    /// Emotional benefit of arriving there.
    pub emotional_payoff: String,
}

/// Emotional transformation from pain state to desired state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformationThesis {
    /// Emotional starting point.
    pub from_state: String,
    /// Desired emotional outcome.
    pub to_state: String,
}

/// The autonomous character seed (Truth Terminal concept): a persona with
/// its own beliefs, obsessions, and bounded creative license.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutonomousCharacterSeed {
    /// Demographics and role.
    pub base_persona: BasePersona,
    /// Core beliefs and internal world.
    pub lore_seed: LoreSeed,
    /// Autonomy and evolution controls.
    pub evolution_parameters: EvolutionParameters,
}

/// Character demographics and role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasePersona {
    /// Character name; non-empty.
    pub name: String,
    /// Character role; non-empty.
    pub role: String,
    /// Demographics text; non-empty. Compared word-wise against audience
    /// pain points by the alignment heuristic.
    pub demographics: String,
    /// How the character currently relates to the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_relation: Option<ProductRelation>,
    /// Primary social setting or environment, when supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_setting: Option<String>,
}

/// The character's relationship to the product, on the journey from
/// unaware to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductRelation {
    /// Has never heard of the product or the problem space.
    #[serde(rename = "The Unaware/Novice")]
    TheUnawareNovice,
    /// Knows the product, doubts it works.
    #[serde(rename = "The Skeptic")]
    TheSkeptic,
    /// Trying and failing, open to help.
    #[serde(rename = "The Stumbler")]
    TheStumbler,
    /// Already convinced, living the change.
    #[serde(rename = "The Convert")]
    TheConvert,
}

impl ProductRelation {
    /// The wire spelling of this relation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TheUnawareNovice => "The Unaware/Novice",
            Self::TheSkeptic => "The Skeptic",
            Self::TheStumbler => "The Stumbler",
            Self::TheConvert => "The Convert",
        }
    }

    /// Parse the exact wire spelling.
    pub fn from_str_exact(s: &str) -> Option<Self> {
        match s {
            "The Unaware/Novice" => Some(Self::TheUnawareNovice),
            "The Skeptic" => Some(Self::TheSkeptic),
            "The Stumbler" => Some(Self::TheStumbler),
            "The Convert" => Some(Self::TheConvert),
            _ => None,
        }
    }
}

/// The character's core beliefs and internal world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoreSeed {
    /// The one belief everything else hangs on; non-empty.
    pub central_belief: String,
    /// How the character talks to itself; non-empty.
    pub internal_monologue_style: String,
    /// Topics the character returns to compulsively; at least one.
    pub obsession_topics: Vec<String>,
    /// Internal wound or recurring emotional pain, when supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affliction: Option<String>,
    /// Specific goal the character wants to achieve, when supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspiration: Option<String>,
}

/// Parameters controlling character autonomy and evolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionParameters {
    /// How much creative latitude the character has. Exact-case enum.
    pub autonomy_level: AutonomyLevel,
    /// How the character remembers past events; non-empty free text.
    pub memory_retention: String,
    /// Permission to imagine scenarios. Free text that must contain one of
    /// the tokens `Allowed`, `Not Allowed`, `Limited`; see
    /// [`HallucinationGrant::from_free_text`].
    pub hallucination_permission: String,
}

impl EvolutionParameters {
    /// Classify the free-text hallucination permission.
    ///
    /// `None` only for hand-constructed values that bypassed the parser.
    pub fn hallucination_grant(&self) -> Option<HallucinationGrant> {
        HallucinationGrant::from_free_text(&self.hallucination_permission)
    }

    /// True when the memory retention text opts into cumulative memory.
    pub fn uses_cumulative_memory(&self) -> bool {
        self.memory_retention.to_lowercase().contains("cumulative")
    }
}

/// Character autonomy level. Exact case: `"high"` does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AutonomyLevel {
    /// Scripted; the character stays on rails.
    Low,
    /// Some improvisation within the brief.
    Medium,
    /// Free to evolve voice and takes over time.
    High,
}

impl AutonomyLevel {
    /// The wire spelling of this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Parse the exact wire spelling. Case-sensitive by contract.
    pub fn from_str_exact(s: &str) -> Option<Self> {
        match s {
            "Low" => Some(Self::Low),
            "Medium" => Some(Self::Medium),
            "High" => Some(Self::High),
            _ => None,
        }
    }

    /// All levels, in the order named by violation messages.
    pub fn all() -> &'static [AutonomyLevel] {
        &[Self::Low, Self::Medium, Self::High]
    }
}

/// Classified hallucination (creative license) grant.
///
/// The input field is deliberately loose free text like
/// `"Allowed (Boleh berimajinasi tentang 'Dystopian Future')"` — the brief
/// author annotates the grant inline. Classification is by token
/// containment, with `Not Allowed` checked before `Allowed` since the
/// former contains the latter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HallucinationGrant {
    /// Free to imagine scenarios.
    Allowed,
    /// Facts and data only.
    NotAllowed,
    /// Realistic imagination grounded in data.
    Limited,
}

impl HallucinationGrant {
    /// The permission tokens a valid `hallucination_permission` must contain,
    /// in the order named by violation messages.
    pub const TOKENS: [&'static str; 3] = ["Allowed", "Not Allowed", "Limited"];

    /// Classify a free-text permission by token containment.
    ///
    /// This is the single named predicate for the legacy text-matching
    /// rule: the containment check is a deliberate leniency, preserved
    /// exactly, not tightened into an equality match.
    pub fn from_free_text(text: &str) -> Option<Self> {
        if text.contains("Not Allowed") {
            Some(Self::NotAllowed)
        } else if text.contains("Allowed") {
            Some(Self::Allowed)
        } else if text.contains("Limited") {
            Some(Self::Limited)
        } else {
            None
        }
    }

    /// True when the free text names any permission token.
    pub fn text_is_valid(text: &str) -> bool {
        Self::from_free_text(text).is_some()
    }
}

/// Target audience definition and language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetAudienceContext {
    /// Audience persona code (e.g. `GENZ_URBAN_ID`); non-empty.
    pub persona_code: String,
    /// What hurts; at least one.
    pub pain_points: Vec<String>,
    /// How they talk.
    pub language_model: LanguageModel,
}

/// Language patterns for the target audience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageModel {
    /// Slang the character may use; each entry non-empty and under 50
    /// characters.
    pub slang_whitelist: Vec<String>,
    /// Cultural touchstones the audience recognizes.
    pub cultural_references: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autonomy_level_exact_case() {
        assert_eq!(AutonomyLevel::from_str_exact("High"), Some(AutonomyLevel::High));
        assert_eq!(AutonomyLevel::from_str_exact("high"), None);
        assert_eq!(AutonomyLevel::from_str_exact("HIGH"), None);
    }

    #[test]
    fn test_autonomy_level_serde_spelling() {
        let json = serde_json::to_string(&AutonomyLevel::Medium).unwrap();
        assert_eq!(json, "\"Medium\"");
        assert!(serde_json::from_str::<AutonomyLevel>("\"medium\"").is_err());
    }

    #[test]
    fn test_hallucination_grant_not_allowed_wins() {
        // "Not Allowed" contains "Allowed"; classification order matters.
        assert_eq!(
            HallucinationGrant::from_free_text("Not Allowed (Tetap pada fakta)"),
            Some(HallucinationGrant::NotAllowed)
        );
    }

    #[test]
    fn test_hallucination_grant_annotated_text() {
        assert_eq!(
            HallucinationGrant::from_free_text(
                "Allowed (Boleh berimajinasi tentang 'Dystopian Future')"
            ),
            Some(HallucinationGrant::Allowed)
        );
        assert_eq!(
            HallucinationGrant::from_free_text("Limited (Hanya imajinasi realistis)"),
            Some(HallucinationGrant::Limited)
        );
    }

    #[test]
    fn test_hallucination_grant_rejects_lowercase() {
        // Token containment is case-sensitive, matching the legacy rule.
        assert_eq!(HallucinationGrant::from_free_text("allowed"), None);
        assert!(!HallucinationGrant::text_is_valid("unrestricted"));
    }

    #[test]
    fn test_tone_overlap_case_insensitive() {
        let tones = ToneGuardrails {
            allowed: vec!["Sarcastic".into(), "Raw".into()],
            forbidden: vec!["sarcastic".into(), "Preachy".into()],
        };
        let overlaps = tones.overlapping_terms();
        assert_eq!(overlaps, vec![("Sarcastic".to_string(), "sarcastic".to_string())]);
    }

    #[test]
    fn test_tone_overlap_disjoint() {
        let tones = ToneGuardrails {
            allowed: vec!["Sarcastic".into()],
            forbidden: vec!["Preachy".into()],
        };
        assert!(tones.overlapping_terms().is_empty());
    }

    #[test]
    fn test_product_relation_wire_spelling() {
        let json = serde_json::to_string(&ProductRelation::TheUnawareNovice).unwrap();
        assert_eq!(json, "\"The Unaware/Novice\"");
        assert_eq!(
            ProductRelation::from_str_exact("The Skeptic"),
            Some(ProductRelation::TheSkeptic)
        );
        assert_eq!(ProductRelation::from_str_exact("Skeptic"), None);
    }

    #[test]
    fn test_cumulative_memory_detection() {
        let params = EvolutionParameters {
            autonomy_level: AutonomyLevel::High,
            memory_retention: "Cumulative (remembers all past scripts)".into(),
            hallucination_permission: "Allowed".into(),
        };
        assert!(params.uses_cumulative_memory());
        assert_eq!(params.hallucination_grant(), Some(HallucinationGrant::Allowed));
    }
}
