//! Shared helpers for commands.
//!
//! Opening the store, resolving ids typed on the command line, and
//! rendering steps and frames the same way everywhere.

use anyhow::anyhow;

use crate::config::DataPaths;
use crate::error::{Result, StoryplanError};
use crate::project::{Project, StoryboardFrame};
use crate::store::{FileBackend, ProjectStore, StateBackend};
use crate::storyboard;
use crate::ui::UserInterface;
use crate::workflow::WorkflowStep;

/// Store over the state file in the data directory.
pub type FileStore = ProjectStore<FileBackend>;

/// Open the project store under `paths`.
pub fn open_store(paths: &DataPaths) -> Result<FileStore> {
    ProjectStore::open(paths.state_backend())
}

/// The selected project, or [`StoryplanError::NoCurrentProject`].
pub fn require_current<B: StateBackend>(store: &ProjectStore<B>) -> Result<&Project> {
    store
        .current_project()
        .ok_or(StoryplanError::NoCurrentProject)
}

/// Resolve a full project id from an exact id or a unique prefix.
pub fn resolve_project_id<B: StateBackend>(store: &ProjectStore<B>, query: &str) -> Result<String> {
    if let Some(project) = store.project(query) {
        return Ok(project.id.clone());
    }

    let matches: Vec<&Project> = store
        .projects()
        .iter()
        .filter(|p| !query.is_empty() && p.id.starts_with(query))
        .collect();

    match matches.as_slice() {
        [project] => Ok(project.id.clone()),
        [] => Err(StoryplanError::ProjectNotFound {
            id: query.to_string(),
        }),
        many => Err(anyhow!(
            "Project id '{}' is ambiguous: it matches {} projects",
            query,
            many.len()
        )
        .into()),
    }
}

/// Resolve a frame by frame number or by id (exact or unique prefix),
/// returning its position in `frames`.
///
/// An all-digit query is always a frame number and never an id prefix.
pub fn resolve_frame(frames: &[StoryboardFrame], query: &str) -> Result<usize> {
    let not_found = || StoryplanError::FrameNotFound {
        id: query.to_string(),
    };

    if let Ok(number) = query.parse::<u32>() {
        return frames
            .iter()
            .position(|f| f.frame_number == number)
            .ok_or_else(not_found);
    }

    if let Some(index) = storyboard::position(frames, query) {
        return Ok(index);
    }

    let matches: Vec<usize> = frames
        .iter()
        .enumerate()
        .filter(|(_, f)| !query.is_empty() && f.id.starts_with(query))
        .map(|(i, _)| i)
        .collect();

    match matches.as_slice() {
        [index] => Ok(*index),
        [] => Err(not_found()),
        many => Err(anyhow!(
            "Frame id '{}' is ambiguous: it matches {} frames",
            query,
            many.len()
        )
        .into()),
    }
}

/// First eight characters of an id, for tables.
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// Marker for a step: done, current, or still ahead.
pub fn step_marker(step: &WorkflowStep) -> &'static str {
    if step.completed {
        "✓"
    } else if step.current {
        "▶"
    } else {
        "○"
    }
}

/// Print the workflow steps, one line each.
pub fn show_steps(ui: &mut dyn UserInterface, steps: &[WorkflowStep]) {
    for step in steps {
        let line = format!(
            "  {} {} {}  {}",
            step_marker(step),
            step.icon,
            step.name,
            step.description
        );
        if step.completed {
            ui.success(&line);
        } else if step.current {
            let styled = ui.theme().current.apply_to(line).to_string();
            ui.message(&styled);
        } else {
            let styled = ui.theme().dim.apply_to(line).to_string();
            ui.message(&styled);
        }
    }
}

/// One-line summary of a frame.
pub fn frame_line(frame: &StoryboardFrame) -> String {
    let title = if frame.title.is_empty() {
        "(untitled)"
    } else {
        frame.title.as_str()
    };
    format!(
        "#{:<3} scene {:<3} {:<12} {:>3}s  {}",
        frame.frame_number,
        frame.scene_number,
        frame.shot_type.as_str(),
        frame.duration,
        title
    )
}

/// Print every field of a frame.
pub fn show_frame(ui: &mut dyn UserInterface, frame: &StoryboardFrame) {
    let fields = [
        ("Id", frame.id.clone()),
        ("Frame", frame.frame_number.to_string()),
        ("Scene", frame.scene_number.to_string()),
        ("Title", frame.title.clone()),
        ("Description", frame.description.clone()),
        ("Shot", frame.shot_type.as_str().to_string()),
        ("Movement", frame.camera_movement.as_str().to_string()),
        ("Duration", format!("{}s", frame.duration)),
        ("Transition", frame.transition.as_str().to_string()),
        ("Dialogue", frame.dialogue.clone()),
        ("Sound", frame.sound_effects.clone()),
        ("Notes", frame.notes.clone()),
        ("Prompt", frame.image_prompt.clone()),
        ("Image", frame.image_url.clone().unwrap_or_default()),
        ("Reference", frame.reference_image_url.clone().unwrap_or_default()),
    ];

    for (key, value) in fields {
        if value.is_empty() {
            continue;
        }
        let line = ui.theme().format_field(key, &value);
        ui.message(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBackend;
    use crate::storyboard::add_frame;
    use crate::ui::MockUI;
    use crate::workflow::derive_steps;
    use crate::project::Phase;

    fn frames(n: usize) -> Vec<StoryboardFrame> {
        (0..n).fold(Vec::new(), |acc, _| add_frame(&acc, StoryboardFrame::new()))
    }

    /// Frames numbered 1..=3 whose ids start with digits.
    fn frames_with_digit_ids() -> Vec<StoryboardFrame> {
        let ids = [
            "9f2c1e4a-0000-4000-8000-000000000001",
            "2b7d90c3-0000-4000-8000-000000000002",
            "a3e1f5d7-0000-4000-8000-000000000003",
        ];
        frames(3)
            .into_iter()
            .zip(ids)
            .map(|(mut frame, id)| {
                frame.id = id.to_string();
                frame
            })
            .collect()
    }

    #[test]
    fn require_current_without_selection() {
        let store = ProjectStore::open(MemoryBackend::new()).unwrap();
        assert!(matches!(
            require_current(&store),
            Err(StoryplanError::NoCurrentProject)
        ));
    }

    #[test]
    fn resolves_project_by_prefix() {
        let mut store = ProjectStore::open(MemoryBackend::new()).unwrap();
        let project = store.create_project("Demo", "").unwrap();

        assert_eq!(resolve_project_id(&store, &project.id).unwrap(), project.id);
        assert_eq!(
            resolve_project_id(&store, short_id(&project.id)).unwrap(),
            project.id
        );
        assert!(matches!(
            resolve_project_id(&store, "zzzz"),
            Err(StoryplanError::ProjectNotFound { .. })
        ));
        assert!(resolve_project_id(&store, "").is_err());
    }

    #[test]
    fn resolves_frame_by_number_then_id() {
        let frames = frames_with_digit_ids();
        assert_eq!(resolve_frame(&frames, "2").unwrap(), 1);
        assert_eq!(resolve_frame(&frames, &frames[2].id).unwrap(), 2);
        assert_eq!(resolve_frame(&frames, "9f2c1e4a").unwrap(), 0);
        assert_eq!(resolve_frame(&frames, "a3e").unwrap(), 2);
    }

    #[test]
    fn unknown_frame_number_never_matches_an_id() {
        let frames = frames_with_digit_ids();
        assert!(matches!(
            resolve_frame(&frames, "9"),
            Err(StoryplanError::FrameNotFound { .. })
        ));
    }

    #[test]
    fn frame_number_follows_stored_numbers() {
        // Deleting does not renumber, so #3 can sit at position 1.
        let mut frames = frames_with_digit_ids();
        frames.remove(1);
        assert_eq!(resolve_frame(&frames, "3").unwrap(), 1);
        assert!(matches!(
            resolve_frame(&frames, "2"),
            Err(StoryplanError::FrameNotFound { .. })
        ));
    }

    #[test]
    fn short_id_handles_short_input() {
        assert_eq!(short_id("abc"), "abc");
        assert_eq!(short_id("0123456789"), "01234567");
    }

    #[test]
    fn markers_follow_step_state() {
        let steps = derive_steps(Phase::Script);
        assert_eq!(step_marker(&steps[0]), "✓");
        assert_eq!(step_marker(&steps[1]), "▶");
        assert_eq!(step_marker(&steps[2]), "○");
    }

    #[test]
    fn show_steps_prints_every_phase() {
        let mut ui = MockUI::new();
        show_steps(&mut ui, &derive_steps(Phase::Storyboard));
        assert_eq!(ui.successes().len(), 2);
        assert_eq!(ui.messages().len(), 4);
        assert!(ui.has_message("Storyboard"));
    }

    #[test]
    fn show_frame_skips_empty_fields() {
        let mut ui = MockUI::new();
        let mut frame = StoryboardFrame::new();
        frame.title = "Opening".to_string();

        show_frame(&mut ui, &frame);

        assert!(ui.has_message("Title: Opening"));
        assert!(!ui.has_message("Dialogue"));
    }

    #[test]
    fn frame_line_shows_untitled() {
        let frame = StoryboardFrame::new();
        let line = frame_line(&frame);
        assert!(line.starts_with("#1"));
        assert!(line.contains("medium"));
        assert!(line.contains("(untitled)"));
    }
}
