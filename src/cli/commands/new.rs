//! New command implementation.
//!
//! The `storyplan new` command creates a project and selects it.

use crate::cli::args::NewArgs;
use crate::config::DataPaths;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The new command implementation.
pub struct NewCommand {
    paths: DataPaths,
    args: NewArgs,
}

impl NewCommand {
    /// Create a new `new` command.
    pub fn new(paths: DataPaths, args: NewArgs) -> Self {
        Self { paths, args }
    }
}

impl Command for NewCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let name = self.args.name.trim();
        if name.is_empty() {
            ui.error("Project name cannot be empty");
            return Ok(CommandResult::failure(1));
        }

        let mut store = display::open_store(&self.paths)?;
        let project = store.create_project(name, self.args.description.trim())?;

        if ui.output_mode().shows_status() {
            ui.success(&format!("Created project '{}'", project.name));
            let hint = ui.theme().highlight.apply_to("storyplan plan").to_string();
            ui.message(&format!("  Next: answer the planning questions with {}", hint));
        }
        ui.data(&project.id);

        Ok(CommandResult::success())
    }
}
