//! Update command implementation.
//!
//! The `storyplan update` command merges a JSON object into one phase
//! payload of the selected project. Fields left out keep their values.

use crate::cli::args::UpdateArgs;
use crate::config::DataPaths;
use crate::error::{Result, StoryplanError};
use crate::project::PhasePatch;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The update command implementation.
pub struct UpdateCommand {
    paths: DataPaths,
    args: UpdateArgs,
}

impl UpdateCommand {
    /// Create a new update command.
    pub fn new(paths: DataPaths, args: UpdateArgs) -> Self {
        Self { paths, args }
    }
}

impl Command for UpdateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let phase = self.args.phase;
        let value: serde_json::Value =
            serde_json::from_str(&self.args.data).map_err(|e| StoryplanError::InvalidPhaseData {
                phase: phase.to_string(),
                message: format!("invalid JSON: {}", e),
            })?;
        let patch = PhasePatch::from_json(phase, value)?;

        let mut store = display::open_store(&self.paths)?;
        display::require_current(&store)?;
        store.update_phase_data(patch)?;

        ui.success(&format!("Updated {} data", phase));
        Ok(CommandResult::success())
    }
}
