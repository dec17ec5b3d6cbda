//! Plan and script command implementations.
//!
//! `storyplan plan` fills in the planning answers and shows the planning
//! checklist. `storyplan script` sets the story outline.

use crate::cli::args::{PlanArgs, ScriptArgs};
use crate::config::DataPaths;
use crate::error::Result;
use crate::project::{Phase, PlanningData, PlanningPatch, ScriptPatch};
use crate::ui::UserInterface;
use crate::workflow::{phase_tips, planning_checklist};

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The plan command implementation.
pub struct PlanCommand {
    paths: DataPaths,
    args: PlanArgs,
}

impl PlanCommand {
    /// Create a new plan command.
    pub fn new(paths: DataPaths, args: PlanArgs) -> Self {
        Self { paths, args }
    }

    fn patch(&self) -> Option<PlanningPatch> {
        let args = &self.args;
        let patch = PlanningPatch {
            theme: args.theme.clone(),
            target_audience: args.audience.clone(),
            duration: args.duration.clone(),
            style: args.style.clone(),
            objectives: args
                .objectives
                .as_deref()
                .map(PlanningPatch::objectives_from_text),
        };
        if patch == PlanningPatch::default() {
            None
        } else {
            Some(patch)
        }
    }
}

fn show_planning(ui: &mut dyn UserInterface, planning: &PlanningData) {
    let answers = [
        ("Theme", planning.theme.as_str()),
        ("Audience", planning.target_audience.as_str()),
        ("Duration", planning.duration.as_str()),
        ("Style", planning.style.as_str()),
    ];
    for (key, value) in answers {
        let line = ui.theme().format_field(key, value);
        ui.message(&line);
    }
    for objective in &planning.objectives {
        ui.message(&format!("    - {}", objective));
    }

    ui.message("");
    let checklist = planning_checklist(planning);
    let done = checklist.iter().filter(|item| item.completed).count();
    for item in &checklist {
        let mark = if item.completed { "✓" } else { "○" };
        ui.message(&format!("  {} {}", mark, item.label));
    }
    ui.message(&format!("  {}/{} done", done, checklist.len()));
}

impl Command for PlanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = display::open_store(&self.paths)?;
        display::require_current(&store)?;

        if let Some(patch) = self.patch() {
            store.update_phase_data(patch)?;
            ui.success("Planning updated");
        }

        let project = display::require_current(&store)?;
        ui.show_header(&format!("{} - Planning", project.name));
        show_planning(ui, &project.phases.planning);

        Ok(CommandResult::success())
    }
}

/// The script command implementation.
pub struct ScriptCommand {
    paths: DataPaths,
    args: ScriptArgs,
}

impl ScriptCommand {
    /// Create a new script command.
    pub fn new(paths: DataPaths, args: ScriptArgs) -> Self {
        Self { paths, args }
    }
}

impl Command for ScriptCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = display::open_store(&self.paths)?;
        display::require_current(&store)?;

        store.update_phase_data(ScriptPatch {
            outline: Some(self.args.outline.clone()),
            ..Default::default()
        })?;
        ui.success("Script outline saved");

        if ui.output_mode().shows_details() {
            for tip in phase_tips(Phase::Script) {
                ui.message(&format!("  • {}", tip));
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoryplanError;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn setup() -> (TempDir, DataPaths) {
        let temp = TempDir::new().unwrap();
        let paths = DataPaths::new(temp.path());
        display::open_store(&paths)
            .unwrap()
            .create_project("Demo", "")
            .unwrap();
        (temp, paths)
    }

    #[test]
    fn plan_sets_only_given_answers() {
        let (_temp, paths) = setup();
        let args = PlanArgs {
            theme: Some("Night markets".to_string()),
            objectives: Some("show the food\n\nmeet the cooks".to_string()),
            ..Default::default()
        };
        let mut ui = MockUI::new();

        PlanCommand::new(paths.clone(), args)
            .execute(&mut ui)
            .unwrap();

        let store = display::open_store(&paths).unwrap();
        let planning = &store.current_project().unwrap().phases.planning;
        assert_eq!(planning.theme, "Night markets");
        assert_eq!(planning.objectives, vec!["show the food", "meet the cooks"]);
        assert!(planning.style.is_empty());
        assert!(ui.has_message("2/5 done"));
    }

    #[test]
    fn plan_without_flags_only_shows() {
        let (_temp, paths) = setup();
        let before = std::fs::read_to_string(paths.state_file()).unwrap();
        let mut ui = MockUI::new();

        PlanCommand::new(paths.clone(), PlanArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(ui.successes().is_empty());
        assert!(ui.has_message("0/5 done"));
        assert_eq!(std::fs::read_to_string(paths.state_file()).unwrap(), before);
    }

    #[test]
    fn script_sets_outline() {
        let (_temp, paths) = setup();
        let args = ScriptArgs {
            outline: "Dusk falls over the market".to_string(),
        };

        ScriptCommand::new(paths.clone(), args)
            .execute(&mut MockUI::new())
            .unwrap();

        let store = display::open_store(&paths).unwrap();
        let script = &store.current_project().unwrap().phases.script;
        assert_eq!(script.outline, "Dusk falls over the market");
        assert!(script.scenes.is_empty());
    }

    #[test]
    fn plan_requires_selection() {
        let temp = TempDir::new().unwrap();
        let result = PlanCommand::new(DataPaths::new(temp.path()), PlanArgs::default())
            .execute(&mut MockUI::new());
        assert!(matches!(result, Err(StoryplanError::NoCurrentProject)));
    }
}
