//! # Orlic Script Structure
//!
//! Turns the strategic framework into an actionable script template: an
//! ordered list of steps, each with an instruction interpolated from the
//! brief. Two shapes exist, a standard three-step arc and an extended
//! five-step arc with per-step duration guides.

use serde::Serialize;

use ngen_core::StrategicNarrativeFramework;

/// Which script arc to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptStructure {
    /// Hook, conflict, realization. The default.
    #[default]
    ThreeStep,
    /// Adds a turning point and closing vision, with duration guides.
    FiveStep,
}

/// Dramatic function of one script step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepType {
    Hook,
    Conflict,
    Realization,
    TurningPoint,
    SolutionGlimpse,
    Vision,
}

/// One step of the script structure template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScriptStep {
    /// 1-based position in the arc.
    pub sequence: u8,
    pub step_type: StepType,
    pub instruction: String,
    /// Seconds-range guide; only the five-step arc carries these.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_guide: Option<&'static str>,
}

/// The framework rendered as a script template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrlicFramework {
    pub identified_enemy: String,
    pub world_view: String,
    pub script_structure_template: Vec<ScriptStep>,
}

/// Build the script framework for a validated brief.
pub fn build_script_framework(
    framework: &StrategicNarrativeFramework,
    structure: ScriptStructure,
) -> OrlicFramework {
    let steps = match structure {
        ScriptStructure::ThreeStep => three_step(framework),
        ScriptStructure::FiveStep => five_step(framework),
    };
    OrlicFramework {
        identified_enemy: framework.enemy.name.clone(),
        world_view: framework.world.status_quo.clone(),
        script_structure_template: steps,
    }
}

fn three_step(framework: &StrategicNarrativeFramework) -> Vec<ScriptStep> {
    vec![
        ScriptStep {
            sequence: 1,
            step_type: StepType::Hook,
            instruction: format!(
                "Mulai dengan observasi sinis tentang: {}",
                framework.world.consensus_reality
            ),
            duration_guide: None,
        },
        ScriptStep {
            sequence: 2,
            step_type: StepType::Conflict,
            instruction: format!("Tunjukkan bagaimana {}", framework.enemy.manifestation),
            duration_guide: None,
        },
        ScriptStep {
            sequence: 3,
            step_type: StepType::Realization,
            instruction: format!("Momen 'Glitch': {}", framework.change_vehicle.new_insight),
            duration_guide: None,
        },
    ]
}

fn five_step(framework: &StrategicNarrativeFramework) -> Vec<ScriptStep> {
    vec![
        ScriptStep {
            sequence: 1,
            step_type: StepType::Hook,
            instruction: format!(
                "Status quo yang dianggap normal: {}",
                framework.world.status_quo
            ),
            duration_guide: Some("8-10 detik"),
        },
        ScriptStep {
            sequence: 2,
            step_type: StepType::Conflict,
            instruction: format!(
                "Musuh revealed dengan contoh konkret: {}",
                framework.enemy.manifestation
            ),
            duration_guide: Some("10-12 detik"),
        },
        ScriptStep {
            sequence: 3,
            step_type: StepType::TurningPoint,
            instruction: "Moment of truth - must choose to fight or stay".to_string(),
            duration_guide: Some("8-10 detik"),
        },
        ScriptStep {
            sequence: 4,
            step_type: StepType::SolutionGlimpse,
            instruction: format!(
                "Tunjukkan ada cara lain: {}",
                framework.change_vehicle.mechanism
            ),
            duration_guide: Some("8-10 detik"),
        },
        ScriptStep {
            sequence: 5,
            step_type: StepType::Vision,
            instruction: format!(
                "Paint the future if they join the fight: {}",
                framework.promised_land.vision
            ),
            duration_guide: Some("6-8 detik"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::sample_input;

    #[test]
    fn test_three_step_instructions_interpolate_framework() {
        let input = sample_input();
        let orlic = build_script_framework(
            &input.strategic_narrative_framework,
            ScriptStructure::default(),
        );
        assert_eq!(orlic.identified_enemy, "Lifestyle Inflation");
        assert_eq!(orlic.script_structure_template.len(), 3);
        assert_eq!(
            orlic.script_structure_template[2].instruction,
            "Momen 'Glitch': Spending data beats willpower."
        );
        assert!(orlic.script_structure_template[0]
            .instruction
            .starts_with("Mulai dengan observasi sinis tentang: "));
    }

    #[test]
    fn test_three_step_has_no_duration_guides() {
        let input = sample_input();
        let orlic = build_script_framework(
            &input.strategic_narrative_framework,
            ScriptStructure::ThreeStep,
        );
        assert!(orlic
            .script_structure_template
            .iter()
            .all(|s| s.duration_guide.is_none()));
    }

    #[test]
    fn test_five_step_sequences_and_guides() {
        let input = sample_input();
        let orlic = build_script_framework(
            &input.strategic_narrative_framework,
            ScriptStructure::FiveStep,
        );
        let steps = &orlic.script_structure_template;
        assert_eq!(steps.len(), 5);
        let sequences: Vec<u8> = steps.iter().map(|s| s.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3, 4, 5]);
        assert_eq!(steps[4].step_type, StepType::Vision);
        assert_eq!(steps[4].duration_guide, Some("6-8 detik"));
    }

    #[test]
    fn test_step_type_wire_spelling() {
        let json = serde_json::to_string(&StepType::SolutionGlimpse).unwrap();
        assert_eq!(json, "\"SOLUTION_GLIMPSE\"");
        let json = serde_json::to_string(&StepType::Hook).unwrap();
        assert_eq!(json, "\"HOOK\"");
    }
}
