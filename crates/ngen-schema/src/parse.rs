//! # Typed-Struct Parser
//!
//! Walks the raw JSON mapping field by field, recording every violation
//! with its dotted path, and constructs the typed [`NarrativeInput`] only
//! when the document is clean.
//!
//! The walk is lenient about extra keys (annotation fields like `comment`
//! are common in hand-authored briefs) and strict about everything the
//! schema declares: required-ness, non-emptiness after trimming, list
//! minimums, exact-case enums, and ISO-8601 timestamps.

use serde_json::{Map, Value};

use ngen_core::{
    AutonomousCharacterSeed, AutonomyLevel, BasePersona, BrandIdentityCore, ChangeVehicle,
    Enemy, EvolutionParameters, HallucinationGrant, LanguageModel, LoreSeed, Meta,
    NarrativeInput, ProductRelation, PromisedLand, StrategicNarrativeFramework,
    TargetAudienceContext, Timestamp, ToneGuardrails, TransformationThesis, World,
};

use crate::violation::{SchemaError, SchemaViolations, Violation};

/// Maximum length of a slang whitelist entry, exclusive.
const SLANG_MAX_CHARS: usize = 50;

/// Parse a raw JSON mapping into a typed [`NarrativeInput`].
///
/// # Errors
///
/// Returns a [`SchemaError`] carrying every field-level violation found in
/// this pass. The typed value is constructed only if no violation was
/// recorded.
pub fn parse(raw: &Value) -> Result<NarrativeInput, SchemaError> {
    let mut c = Collector::new();

    let root = match raw.as_object() {
        Some(map) => map,
        None => {
            c.violations
                .push(Violation::with_value("", "must be a JSON object", raw.clone()));
            return Err(SchemaError {
                violations: c.violations,
            });
        }
    };

    let meta = parse_meta(&mut c, root);
    let brand = parse_brand(&mut c, root);
    let framework = parse_framework(&mut c, root);
    let character = parse_character(&mut c, root);
    let audience = parse_audience(&mut c, root);

    match (meta, brand, framework, character, audience) {
        (Some(meta), Some(brand), Some(framework), Some(character), Some(audience))
            if c.violations.is_empty() =>
        {
            Ok(NarrativeInput {
                meta,
                brand_identity_core: brand,
                strategic_narrative_framework: framework,
                autonomous_character_seed: character,
                target_audience_context: audience,
            })
        }
        _ => Err(SchemaError {
            violations: c.violations,
        }),
    }
}

/// Accumulates violations while field parsers run to completion.
///
/// Every helper records its own violations and returns `None` on failure;
/// callers evaluate all fields of an entity before combining, so one bad
/// field never hides its siblings.
struct Collector {
    violations: SchemaViolations,
}

impl Collector {
    fn new() -> Self {
        Self {
            violations: SchemaViolations::new(),
        }
    }

    /// Required nested object directly under the document root.
    fn section<'a>(
        &mut self,
        root: &'a Map<String, Value>,
        key: &str,
    ) -> Option<&'a Map<String, Value>> {
        self.object(root, "", key)
    }

    /// Required nested object.
    fn object<'a>(
        &mut self,
        obj: &'a Map<String, Value>,
        prefix: &str,
        key: &str,
    ) -> Option<&'a Map<String, Value>> {
        let path = join(prefix, key);
        match obj.get(key) {
            None => {
                self.violations.push(Violation::new(path, "field required"));
                None
            }
            Some(Value::Object(inner)) => Some(inner),
            Some(other) => {
                self.violations.push(Violation::with_value(
                    path,
                    "must be a JSON object",
                    other.clone(),
                ));
                None
            }
        }
    }

    /// Optional nested object: absent is fine, wrong type is a violation.
    fn optional_object<'a>(
        &mut self,
        obj: &'a Map<String, Value>,
        prefix: &str,
        key: &str,
    ) -> Option<&'a Map<String, Value>> {
        match obj.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::Object(inner)) => Some(inner),
            Some(other) => {
                self.violations.push(Violation::with_value(
                    join(prefix, key),
                    "must be a JSON object",
                    other.clone(),
                ));
                None
            }
        }
    }

    /// Required string of any content, trimmed.
    fn string(&mut self, obj: &Map<String, Value>, prefix: &str, key: &str) -> Option<String> {
        let path = join(prefix, key);
        match obj.get(key) {
            None => {
                self.violations.push(Violation::new(path, "field required"));
                None
            }
            Some(Value::String(s)) => Some(s.trim().to_string()),
            Some(other) => {
                self.violations.push(Violation::with_value(
                    path,
                    "must be a string",
                    other.clone(),
                ));
                None
            }
        }
    }

    /// Required non-empty (post-trim) string.
    fn non_empty_string(
        &mut self,
        obj: &Map<String, Value>,
        prefix: &str,
        key: &str,
    ) -> Option<String> {
        let s = self.string(obj, prefix, key)?;
        if s.is_empty() {
            self.violations.push(Violation::with_value(
                join(prefix, key),
                "must not be empty",
                Value::String(String::new()),
            ));
            None
        } else {
            Some(s)
        }
    }

    /// Optional string: absent (or null) is fine, wrong type is a violation.
    fn optional_string(
        &mut self,
        obj: &Map<String, Value>,
        prefix: &str,
        key: &str,
    ) -> Option<String> {
        match obj.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.trim().to_string()),
            Some(other) => {
                self.violations.push(Violation::with_value(
                    join(prefix, key),
                    "must be a string",
                    other.clone(),
                ));
                None
            }
        }
    }

    /// Required list of strings with a declared minimum length.
    ///
    /// Entries are trimmed; per-entry content rules (emptiness, length
    /// bounds) are the caller's concern where the schema declares them.
    fn string_list(
        &mut self,
        obj: &Map<String, Value>,
        prefix: &str,
        key: &str,
        min: usize,
    ) -> Option<Vec<String>> {
        let path = join(prefix, key);
        let items = match obj.get(key) {
            None => {
                self.violations.push(Violation::new(path, "field required"));
                return None;
            }
            Some(Value::Array(items)) => items,
            Some(other) => {
                self.violations.push(Violation::with_value(
                    path,
                    "must be a list of strings",
                    other.clone(),
                ));
                return None;
            }
        };

        let mut out = Vec::with_capacity(items.len());
        let mut all_strings = true;
        for (i, item) in items.iter().enumerate() {
            match item {
                Value::String(s) => out.push(s.trim().to_string()),
                other => {
                    all_strings = false;
                    self.violations.push(Violation::with_value(
                        format!("{path}.{i}"),
                        "must be a string",
                        other.clone(),
                    ));
                }
            }
        }
        if items.len() < min {
            self.violations.push(Violation::new(
                path,
                format!("must contain at least {min} item(s)"),
            ));
            return None;
        }
        if all_strings {
            Some(out)
        } else {
            None
        }
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn parse_meta(c: &mut Collector, root: &Map<String, Value>) -> Option<Meta> {
    let obj = c.section(root, "meta")?;
    let project_name = c.non_empty_string(obj, "meta", "project_name");
    let version = c.string(obj, "meta", "version");
    let input_by = c.non_empty_string(obj, "meta", "input_by");
    let timestamp = parse_timestamp_field(c, obj);
    Some(Meta {
        project_name: project_name?,
        version: version?,
        input_by: input_by?,
        timestamp: timestamp?,
    })
}

/// The timestamp is kept verbatim (post-trim) but must be interpretable as
/// ISO-8601 in any of the accepted shapes.
fn parse_timestamp_field(c: &mut Collector, meta: &Map<String, Value>) -> Option<String> {
    let raw = c.string(meta, "meta", "timestamp")?;
    if Timestamp::parse_flexible(&raw).is_err() {
        c.violations.push(Violation::with_value(
            "meta.timestamp",
            "must be ISO-8601 timestamp",
            Value::String(raw),
        ));
        return None;
    }
    Some(raw)
}

fn parse_brand(c: &mut Collector, root: &Map<String, Value>) -> Option<BrandIdentityCore> {
    let obj = c.section(root, "brand_identity_core")?;
    let prefix = "brand_identity_core";
    let product_name = c.non_empty_string(obj, prefix, "product_name");
    let archetype = c.non_empty_string(obj, prefix, "archetype");
    let core_philosophy = c.non_empty_string(obj, prefix, "core_philosophy");
    let tone_guardrails = parse_tone_guardrails(c, obj);
    Some(BrandIdentityCore {
        product_name: product_name?,
        archetype: archetype?,
        core_philosophy: core_philosophy?,
        tone_guardrails: tone_guardrails?,
    })
}

fn parse_tone_guardrails(
    c: &mut Collector,
    brand: &Map<String, Value>,
) -> Option<ToneGuardrails> {
    let obj = c.object(brand, "brand_identity_core", "tone_guardrails")?;
    let prefix = "brand_identity_core.tone_guardrails";
    let allowed = c.string_list(obj, prefix, "allowed", 1);
    let forbidden = c.string_list(obj, prefix, "forbidden", 1);
    Some(ToneGuardrails {
        allowed: allowed?,
        forbidden: forbidden?,
    })
}

fn parse_framework(
    c: &mut Collector,
    root: &Map<String, Value>,
) -> Option<StrategicNarrativeFramework> {
    let obj = c.section(root, "strategic_narrative_framework")?;
    let prefix = "strategic_narrative_framework";

    let world = c.object(obj, prefix, "world").and_then(|w| {
        let p = "strategic_narrative_framework.world";
        let status_quo = c.non_empty_string(w, p, "status_quo");
        let consensus_reality = c.non_empty_string(w, p, "consensus_reality");
        Some(World {
            status_quo: status_quo?,
            consensus_reality: consensus_reality?,
        })
    });

    let enemy = c.object(obj, prefix, "enemy").and_then(|e| {
        let p = "strategic_narrative_framework.enemy";
        let name = c.non_empty_string(e, p, "name");
        let manifestation = c.non_empty_string(e, p, "manifestation");
        let why_fight_it = c.non_empty_string(e, p, "why_fight_it");
        Some(Enemy {
            name: name?,
            manifestation: manifestation?,
            why_fight_it: why_fight_it?,
        })
    });

    let change_vehicle = c.object(obj, prefix, "change_vehicle").and_then(|v| {
        let p = "strategic_narrative_framework.change_vehicle";
        let new_insight = c.non_empty_string(v, p, "new_insight");
        let mechanism = c.non_empty_string(v, p, "mechanism");
        Some(ChangeVehicle {
            new_insight: new_insight?,
            mechanism: mechanism?,
        })
    });

    let promised_land = c.object(obj, prefix, "promised_land").and_then(|l| {
        let p = "strategic_narrative_framework.promised_land";
        let vision = c.non_empty_string(l, p, "vision");
        let emotional_payoff = c.non_empty_string(l, p, "emotional_payoff");
        Some(PromisedLand {
            vision: vision?,
            emotional_payoff: emotional_payoff?,
        })
    });

    let proof_points = c.string_list(obj, prefix, "proof_points", 1);

    let transformation_thesis =
        c.optional_object(obj, prefix, "transformation_thesis").and_then(|t| {
            let p = "strategic_narrative_framework.transformation_thesis";
            let from_state = c.non_empty_string(t, p, "from_state");
            let to_state = c.non_empty_string(t, p, "to_state");
            Some(TransformationThesis {
                from_state: from_state?,
                to_state: to_state?,
            })
        });

    Some(StrategicNarrativeFramework {
        world: world?,
        enemy: enemy?,
        change_vehicle: change_vehicle?,
        promised_land: promised_land?,
        proof_points: proof_points?,
        transformation_thesis,
    })
}

fn parse_character(
    c: &mut Collector,
    root: &Map<String, Value>,
) -> Option<AutonomousCharacterSeed> {
    let obj = c.section(root, "autonomous_character_seed")?;
    let prefix = "autonomous_character_seed";

    let base_persona = c.object(obj, prefix, "base_persona").and_then(|p| {
        let pp = "autonomous_character_seed.base_persona";
        let name = c.non_empty_string(p, pp, "name");
        let role = c.non_empty_string(p, pp, "role");
        let demographics = c.non_empty_string(p, pp, "demographics");
        let product_relation = parse_product_relation(c, p, pp);
        let social_setting = c.optional_string(p, pp, "social_setting");
        Some(BasePersona {
            name: name?,
            role: role?,
            demographics: demographics?,
            product_relation,
            social_setting,
        })
    });

    let lore_seed = c.object(obj, prefix, "lore_seed").and_then(|l| {
        let lp = "autonomous_character_seed.lore_seed";
        let central_belief = c.non_empty_string(l, lp, "central_belief");
        let internal_monologue_style = c.non_empty_string(l, lp, "internal_monologue_style");
        let obsession_topics = c.string_list(l, lp, "obsession_topics", 1);
        let affliction = c.optional_string(l, lp, "affliction");
        let aspiration = c.optional_string(l, lp, "aspiration");
        Some(LoreSeed {
            central_belief: central_belief?,
            internal_monologue_style: internal_monologue_style?,
            obsession_topics: obsession_topics?,
            affliction,
            aspiration,
        })
    });

    let evolution_parameters = c.object(obj, prefix, "evolution_parameters").and_then(|e| {
        let ep = "autonomous_character_seed.evolution_parameters";
        let autonomy_level = parse_autonomy_level(c, e, ep);
        let memory_retention = c.non_empty_string(e, ep, "memory_retention");
        let hallucination_permission = parse_hallucination_permission(c, e, ep);
        Some(EvolutionParameters {
            autonomy_level: autonomy_level?,
            memory_retention: memory_retention?,
            hallucination_permission: hallucination_permission?,
        })
    });

    Some(AutonomousCharacterSeed {
        base_persona: base_persona?,
        lore_seed: lore_seed?,
        evolution_parameters: evolution_parameters?,
    })
}

fn parse_product_relation(
    c: &mut Collector,
    persona: &Map<String, Value>,
    prefix: &str,
) -> Option<ProductRelation> {
    let raw = c.optional_string(persona, prefix, "product_relation")?;
    match ProductRelation::from_str_exact(&raw) {
        Some(relation) => Some(relation),
        None => {
            c.violations.push(Violation::with_value(
                join(prefix, "product_relation"),
                "must be one of: The Unaware/Novice, The Skeptic, The Stumbler, The Convert",
                Value::String(raw),
            ));
            None
        }
    }
}

fn parse_autonomy_level(
    c: &mut Collector,
    params: &Map<String, Value>,
    prefix: &str,
) -> Option<AutonomyLevel> {
    let raw = c.string(params, prefix, "autonomy_level")?;
    match AutonomyLevel::from_str_exact(&raw) {
        Some(level) => Some(level),
        None => {
            c.violations.push(Violation::with_value(
                join(prefix, "autonomy_level"),
                "must be one of: Low, Medium, High (exact case)",
                Value::String(raw),
            ));
            None
        }
    }
}

/// Legacy token-containment rule: the free text is valid as long as it
/// names one of the permission tokens somewhere.
fn parse_hallucination_permission(
    c: &mut Collector,
    params: &Map<String, Value>,
    prefix: &str,
) -> Option<String> {
    let raw = c.non_empty_string(params, prefix, "hallucination_permission")?;
    if !HallucinationGrant::text_is_valid(&raw) {
        c.violations.push(Violation::with_value(
            join(prefix, "hallucination_permission"),
            "must contain one of: Allowed, Not Allowed, Limited",
            Value::String(raw),
        ));
        return None;
    }
    Some(raw)
}

fn parse_audience(
    c: &mut Collector,
    root: &Map<String, Value>,
) -> Option<TargetAudienceContext> {
    let obj = c.section(root, "target_audience_context")?;
    let prefix = "target_audience_context";

    let persona_code = c.non_empty_string(obj, prefix, "persona_code");
    let pain_points = c.string_list(obj, prefix, "pain_points", 1);

    let language_model = c.object(obj, prefix, "language_model").and_then(|l| {
        let lp = "target_audience_context.language_model";
        let slang_whitelist = c.string_list(l, lp, "slang_whitelist", 1).map(|list| {
            check_slang_entries(c, lp, &list);
            list
        });
        let cultural_references = c.string_list(l, lp, "cultural_references", 1);
        Some(LanguageModel {
            slang_whitelist: slang_whitelist?,
            cultural_references: cultural_references?,
        })
    });

    Some(TargetAudienceContext {
        persona_code: persona_code?,
        pain_points: pain_points?,
        language_model: language_model?,
    })
}

/// Slang entries must be non-empty and under [`SLANG_MAX_CHARS`] characters.
fn check_slang_entries(c: &mut Collector, prefix: &str, entries: &[String]) {
    for (i, entry) in entries.iter().enumerate() {
        let path = format!("{}.{i}", join(prefix, "slang_whitelist"));
        if entry.is_empty() {
            c.violations.push(Violation::new(path, "must not be empty"));
        } else if entry.chars().count() >= SLANG_MAX_CHARS {
            c.violations.push(Violation::with_value(
                path,
                format!("must be shorter than {SLANG_MAX_CHARS} characters"),
                Value::String(entry.clone()),
            ));
        }
    }
}
