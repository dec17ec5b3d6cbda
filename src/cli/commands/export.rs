//! Export command implementation.
//!
//! The `storyplan export` command writes the selected project's storyboard
//! to `<project name>_storyboard.json`.

use crate::cli::args::ExportArgs;
use crate::config::DataPaths;
use crate::error::Result;
use crate::export::export_storyboard;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The export command implementation.
pub struct ExportCommand {
    paths: DataPaths,
    args: ExportArgs,
}

impl ExportCommand {
    /// Create a new export command.
    pub fn new(paths: DataPaths, args: ExportArgs) -> Self {
        Self { paths, args }
    }
}

impl Command for ExportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = display::open_store(&self.paths)?;
        let project = display::require_current(&store)?;

        if project.phases.storyboard.frames.is_empty() {
            ui.warning("The storyboard has no frames yet");
        }

        let path = export_storyboard(project, &self.args.out)?;
        ui.success(&format!(
            "Exported {} frame(s)",
            project.phases.storyboard.frames.len()
        ));
        ui.data(&path.display().to_string());

        Ok(CommandResult::success())
    }
}
