//! Workflow step indicators.
//!
//! Steps are a pure function of a project's current phase: every phase
//! before it is completed, the phase itself is current, the rest are
//! neither. [`derive_steps`] is the only place that computes them.

use serde::{Deserialize, Serialize};

use crate::project::{Phase, PlanningData};

/// Display indicator for one phase of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStep {
    pub id: Phase,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub completed: bool,
    pub current: bool,
}

/// Static name, description and icon for a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInfo {
    pub phase: Phase,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Step catalog in pipeline order.
pub const STEP_CATALOG: [StepInfo; 6] = [
    StepInfo {
        phase: Phase::Planning,
        name: "Planning",
        description: "Settle the theme, audience, style and running time",
        icon: "📋",
    },
    StepInfo {
        phase: Phase::Script,
        name: "Script",
        description: "Write the story outline and the detailed script",
        icon: "✍️",
    },
    StepInfo {
        phase: Phase::Storyboard,
        name: "Storyboard",
        description: "Break the script into shots and describe each frame",
        icon: "🎨",
    },
    StepInfo {
        phase: Phase::Assets,
        name: "Assets",
        description: "Gather the images, footage and audio the shots need",
        icon: "🎬",
    },
    StepInfo {
        phase: Phase::Editing,
        name: "Editing",
        description: "Cut, grade, and lay in sound and effects",
        icon: "✂️",
    },
    StepInfo {
        phase: Phase::Export,
        name: "Export",
        description: "Render the final video and share it",
        icon: "📤",
    },
];

/// Catalog entry for a phase.
pub fn step_info(phase: Phase) -> &'static StepInfo {
    &STEP_CATALOG[phase.index()]
}

/// Derive the six step indicators for a project sitting at `current`.
pub fn derive_steps(current: Phase) -> Vec<WorkflowStep> {
    let current_index = current.index();

    STEP_CATALOG
        .iter()
        .enumerate()
        .map(|(index, info)| WorkflowStep {
            id: info.phase,
            name: info.name.to_string(),
            description: info.description.to_string(),
            icon: info.icon.to_string(),
            completed: index < current_index,
            current: index == current_index,
        })
        .collect()
}

/// Steps shown before any project has been selected.
pub fn initial_steps() -> Vec<WorkflowStep> {
    derive_steps(Phase::Planning)
}

/// One line of the planning checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub id: &'static str,
    pub label: &'static str,
    pub completed: bool,
}

/// Planning checklist, each item ticked once its answer is filled in.
pub fn planning_checklist(planning: &PlanningData) -> Vec<ChecklistItem> {
    fn filled(s: &str) -> bool {
        !s.trim().is_empty()
    }

    vec![
        ChecklistItem {
            id: "theme",
            label: "Settle the video theme",
            completed: filled(&planning.theme),
        },
        ChecklistItem {
            id: "audience",
            label: "Define the target audience",
            completed: filled(&planning.target_audience),
        },
        ChecklistItem {
            id: "duration",
            label: "Set the running time",
            completed: filled(&planning.duration),
        },
        ChecklistItem {
            id: "style",
            label: "Choose a visual style",
            completed: filled(&planning.style),
        },
        ChecklistItem {
            id: "objectives",
            label: "List the production objectives",
            completed: planning.objectives.iter().any(|o| filled(o)),
        },
    ]
}

/// Writing tips for a phase. Empty for phases without guidance.
pub fn phase_tips(phase: Phase) -> &'static [&'static str] {
    match phase {
        Phase::Script => &[
            "Keep every scene short and clear",
            "Name the characters and their lines",
            "Mark scene changes",
            "Describe the action",
            "Note how long each scene runs",
        ],
        Phase::Storyboard => &[
            "Give every shot a clear purpose",
            "Generate reference images from the prompt",
            "Note the camera movement",
            "Mark each shot's duration",
            "Say how each shot transitions out",
        ],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_follows_phase_order() {
        for (info, phase) in STEP_CATALOG.iter().zip(Phase::ORDER) {
            assert_eq!(info.phase, phase);
        }
    }

    #[test]
    fn derivation_marks_earlier_steps_completed() {
        for current in Phase::ORDER {
            let k = current.index();
            let steps = derive_steps(current);
            assert_eq!(steps.len(), 6);
            for (i, step) in steps.iter().enumerate() {
                assert_eq!(step.completed, i < k, "completed at {i} for {current}");
                assert_eq!(step.current, i == k, "current at {i} for {current}");
            }
        }
    }

    #[test]
    fn exactly_one_current_step() {
        for current in Phase::ORDER {
            let steps = derive_steps(current);
            assert_eq!(steps.iter().filter(|s| s.current).count(), 1);
        }
    }

    #[test]
    fn initial_steps_start_at_planning() {
        let steps = initial_steps();
        assert!(steps[0].current);
        assert!(steps.iter().all(|s| !s.completed));
    }

    #[test]
    fn step_serializes_phase_id() {
        let steps = derive_steps(Phase::Script);
        let json = serde_json::to_value(&steps[1]).unwrap();
        assert_eq!(json["id"], "script");
        assert_eq!(json["current"], true);
    }

    #[test]
    fn checklist_tracks_filled_answers() {
        let planning = PlanningData {
            theme: "Night markets".to_string(),
            objectives: vec!["   ".to_string()],
            ..Default::default()
        };
        let checklist = planning_checklist(&planning);

        assert_eq!(checklist.len(), 5);
        assert!(checklist[0].completed);
        assert!(!checklist[1].completed);
        assert!(!checklist[4].completed);
    }

    #[test]
    fn tips_only_for_writing_phases() {
        assert!(!phase_tips(Phase::Script).is_empty());
        assert!(!phase_tips(Phase::Storyboard).is_empty());
        assert!(phase_tips(Phase::Export).is_empty());
    }
}
