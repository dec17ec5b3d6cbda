//! Phase command implementation.
//!
//! The `storyplan phase` command moves the selected project to another
//! phase. Any phase may be chosen directly; `next` and `prev` step along
//! the pipeline.

use crate::cli::args::PhaseSubcommand;
use crate::config::DataPaths;
use crate::error::Result;
use crate::project::Phase;
use crate::ui::UserInterface;
use crate::workflow::step_info;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The phase command implementation.
pub struct PhaseCommand {
    paths: DataPaths,
    command: PhaseSubcommand,
}

impl PhaseCommand {
    /// Create a new phase command.
    pub fn new(paths: DataPaths, command: PhaseSubcommand) -> Self {
        Self { paths, command }
    }

    fn target(&self, current: Phase) -> Option<Phase> {
        match self.command {
            PhaseSubcommand::Set { phase } => Some(phase),
            PhaseSubcommand::Next => current.next(),
            PhaseSubcommand::Prev => current.previous(),
        }
    }
}

impl Command for PhaseCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = display::open_store(&self.paths)?;
        let current = display::require_current(&store)?.current_phase;

        let Some(target) = self.target(current) else {
            let edge = if matches!(self.command, PhaseSubcommand::Next) {
                "last"
            } else {
                "first"
            };
            ui.warning(&format!("Already at the {} phase ({})", edge, current));
            return Ok(CommandResult::success());
        };

        store.update_project_phase(target)?;

        let info = step_info(target);
        ui.success(&format!("Now in {} {}", info.icon, info.name));
        if ui.output_mode().shows_details() {
            display::show_steps(ui, store.workflow_steps());
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoryplanError;
    use crate::ui::MockUI;
    use crate::workflow::derive_steps;
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

    fn run(paths: &DataPaths, command: PhaseSubcommand) -> MockUI {
        let mut ui = MockUI::new();
        PhaseCommand::new(paths.clone(), command)
            .execute(&mut ui)
            .unwrap();
        ui
    }

    fn current_phase(paths: &DataPaths) -> Phase {
        let store = display::open_store(paths).unwrap();
        store.current_project().unwrap().current_phase
    }

    #[test]
    fn set_jumps_anywhere() {
        let (_temp, paths) = setup();
        run(
            &paths,
            PhaseSubcommand::Set {
                phase: Phase::Editing,
            },
        );

        assert_eq!(current_phase(&paths), Phase::Editing);
        let store = display::open_store(&paths).unwrap();
        assert_eq!(store.workflow_steps(), derive_steps(Phase::Editing).as_slice());
    }

    #[test]
    fn next_and_prev_step_along() {
        let (_temp, paths) = setup();
        run(&paths, PhaseSubcommand::Next);
        run(&paths, PhaseSubcommand::Next);
        assert_eq!(current_phase(&paths), Phase::Storyboard);

        run(&paths, PhaseSubcommand::Prev);
        assert_eq!(current_phase(&paths), Phase::Script);
    }

    #[test]
    fn prev_at_first_phase_warns() {
        let (_temp, paths) = setup();
        let ui = run(&paths, PhaseSubcommand::Prev);

        assert_eq!(current_phase(&paths), Phase::Planning);
        assert!(ui.warnings()[0].contains("first phase"));
    }

    #[test]
    fn requires_selection() {
        let temp = TempDir::new().unwrap();
        let result = PhaseCommand::new(DataPaths::new(temp.path()), PhaseSubcommand::Next)
            .execute(&mut MockUI::new());
        assert!(matches!(result, Err(StoryplanError::NoCurrentProject)));
    }
}
