//! Delete command implementation.

use crate::cli::args::DeleteArgs;
use crate::config::DataPaths;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The delete command implementation.
pub struct DeleteCommand {
    paths: DataPaths,
    args: DeleteArgs,
}

impl DeleteCommand {
    /// Create a new delete command.
    pub fn new(paths: DataPaths, args: DeleteArgs) -> Self {
        Self { paths, args }
    }
}

impl Command for DeleteCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = display::open_store(&self.paths)?;
        let id = display::resolve_project_id(&store, &self.args.id)?;
        let name = store
            .project(&id)
            .map(|p| p.name.clone())
            .unwrap_or_default();
        let was_current = store.current_project_id() == Some(id.as_str());

        store.delete_project(&id)?;

        ui.success(&format!("Deleted project '{}'", name));
        if was_current {
            ui.message("No project is selected now.");
        }

        Ok(CommandResult::success())
    }
}
