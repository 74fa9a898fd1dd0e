//! Shared test fixture: a complete, valid brief.

use ngen_core::NarrativeInput;
use serde_json::json;

pub fn sample_input() -> NarrativeInput {
    let raw = json!({
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
    });
    ngen_schema::parse(&raw).expect("fixture must parse")
}
