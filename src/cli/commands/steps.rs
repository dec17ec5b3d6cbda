//! Steps command implementation.
//!
//! The `storyplan steps` command prints the workflow indicators held by the
//! store, which follow the selected project's phase.

use crate::config::DataPaths;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The steps command implementation.
pub struct StepsCommand {
    paths: DataPaths,
}

impl StepsCommand {
    /// Create a new steps command.
    pub fn new(paths: DataPaths) -> Self {
        Self { paths }
    }
}

impl Command for StepsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = display::open_store(&self.paths)?;

        match store.current_project() {
            Some(project) => ui.show_header(&project.name),
            None => ui.show_header("No project selected"),
        }
        display::show_steps(ui, store.workflow_steps());

        Ok(CommandResult::success())
    }
}
