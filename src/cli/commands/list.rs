//! List command implementation.
//!
//! The `storyplan list` command shows every project, marking the selected
//! one. It is also what runs when no command is given.

use anyhow::Context;

use crate::cli::args::ListArgs;
use crate::config::DataPaths;
use crate::error::Result;
use crate::ui::{Table, UserInterface};
use crate::workflow::step_info;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The list command implementation.
pub struct ListCommand {
    paths: DataPaths,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(paths: DataPaths, args: ListArgs) -> Self {
        Self { paths, args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = display::open_store(&self.paths)?;

        if self.args.json {
            let json = serde_json::to_string_pretty(store.projects())
                .context("Failed to serialize projects")?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        if store.projects().is_empty() {
            ui.message("No projects yet. Create one with `storyplan new <NAME>`.");
            return Ok(CommandResult::success());
        }

        ui.show_header("Projects");

        let current = store.current_project_id();
        let mut table =
            Table::new(vec!["", "Id", "Name", "Phase", "Frames", "Updated"]).align_right(4);
        for project in store.projects() {
            let marker = if Some(project.id.as_str()) == current {
                "*"
            } else {
                ""
            };
            let info = step_info(project.current_phase);
            let phase = format!("{} {}", info.icon, info.name);
            let frames = project.phases.storyboard.frames.len().to_string();
            let updated = project.updated_at.format("%Y-%m-%d %H:%M").to_string();
            table.add_row(vec![
                marker,
                display::short_id(&project.id),
                &project.name,
                &phase,
                &frames,
                &updated,
            ]);
        }
        ui.message(&table.render());

        if current.is_none() {
            ui.message("");
            ui.message("No project selected. Pick one with `storyplan select <ID>`.");
        }

        Ok(CommandResult::success())
    }
}
