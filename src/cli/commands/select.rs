//! Select command implementation.
//!
//! The `storyplan select` command points the selection at a project or
//! clears it.

use crate::cli::args::SelectArgs;
use crate::config::DataPaths;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::workflow::step_info;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The select command implementation.
pub struct SelectCommand {
    paths: DataPaths,
    args: SelectArgs,
}

impl SelectCommand {
    /// Create a new select command.
    pub fn new(paths: DataPaths, args: SelectArgs) -> Self {
        Self { paths, args }
    }
}

impl Command for SelectCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = display::open_store(&self.paths)?;

        let query = match (&self.args.id, self.args.clear) {
            (Some(query), false) => query,
            _ => {
                store.set_current_project(None)?;
                ui.success("Selection cleared");
                return Ok(CommandResult::success());
            }
        };

        let id = display::resolve_project_id(&store, query)?;
        store.set_current_project(Some(&id))?;

        let project = display::require_current(&store)?;
        let info = step_info(project.current_phase);
        ui.success(&format!(
            "Selected '{}' ({} {})",
            project.name, info.icon, info.name
        ));

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoryplanError;
    use crate::project::Phase;
    use crate::ui::MockUI;
    use crate::workflow::derive_steps;
    use tempfile::TempDir;

    fn select(paths: &DataPaths, id: Option<&str>, clear: bool) -> Result<CommandResult> {
        let args = SelectArgs {
            id: id.map(String::from),
            clear,
        };
        SelectCommand::new(paths.clone(), args).execute(&mut MockUI::new())
    }

    #[test]
    fn selecting_derives_steps_from_project() {
        let temp = TempDir::new().unwrap();
        let paths = DataPaths::new(temp.path());
        let mut store = display::open_store(&paths).unwrap();
        let first = store.create_project("First", "").unwrap();
        store.update_project_phase(Phase::Editing).unwrap();
        store.create_project("Second", "").unwrap();

        select(&paths, Some(display::short_id(&first.id)), false).unwrap();

        let store = display::open_store(&paths).unwrap();
        assert_eq!(store.current_project_id(), Some(first.id.as_str()));
        assert_eq!(store.workflow_steps(), derive_steps(Phase::Editing).as_slice());
    }

    #[test]
    fn clear_removes_selection() {
        let temp = TempDir::new().unwrap();
        let paths = DataPaths::new(temp.path());
        display::open_store(&paths)
            .unwrap()
            .create_project("Demo", "")
            .unwrap();

        select(&paths, None, true).unwrap();

        let store = display::open_store(&paths).unwrap();
        assert!(store.current_project_id().is_none());
        assert_eq!(store.projects().len(), 1);
    }

    #[test]
    fn unknown_id_is_an_error() {
        let temp = TempDir::new().unwrap();
        let paths = DataPaths::new(temp.path());

        assert!(matches!(
            select(&paths, Some("missing"), false),
            Err(StoryplanError::ProjectNotFound { .. })
        ));
    }
}
