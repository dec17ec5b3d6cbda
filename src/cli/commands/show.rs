//! Show command implementation.
//!
//! The `storyplan show` command prints the selected project: its details,
//! workflow progress, and a summary of every phase payload.

use anyhow::Context;

use crate::cli::args::ShowArgs;
use crate::config::DataPaths;
use crate::error::Result;
use crate::project::Project;
use crate::storyboard::total_duration;
use crate::ui::UserInterface;
use crate::workflow::{derive_steps, phase_tips, planning_checklist};

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The show command implementation.
pub struct ShowCommand {
    paths: DataPaths,
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(paths: DataPaths, args: ShowArgs) -> Self {
        Self { paths, args }
    }

    fn show_summary(&self, ui: &mut dyn UserInterface, project: &Project) {
        ui.show_header(&project.name);
        if !project.description.is_empty() {
            ui.message(&format!("  {}", project.description));
            ui.message("");
        }

        let fields = [
            ("Id", project.id.clone()),
            ("Created", project.created_at.format("%Y-%m-%d %H:%M").to_string()),
            ("Updated", project.updated_at.format("%Y-%m-%d %H:%M").to_string()),
        ];
        for (key, value) in fields {
            let line = ui.theme().format_field(key, &value);
            ui.message(&line);
        }

        ui.message("");
        display::show_steps(ui, &derive_steps(project.current_phase));

        ui.message("");
        let heading = ui.theme().key.apply_to("Planning").to_string();
        ui.message(&heading);
        for item in planning_checklist(&project.phases.planning) {
            let mark = if item.completed { "✓" } else { "○" };
            ui.message(&format!("  {} {}", mark, item.label));
        }

        let phases = &project.phases;
        let outline = if phases.script.outline.is_empty() {
            "(none)".to_string()
        } else {
            phases.script.outline.lines().next().unwrap_or_default().to_string()
        };
        let summary = [
            ("Outline", outline),
            ("Scenes", phases.script.scenes.len().to_string()),
            (
                "Frames",
                format!(
                    "{} ({}s)",
                    phases.storyboard.frames.len(),
                    total_duration(&phases.storyboard.frames)
                ),
            ),
            (
                "Assets",
                (phases.assets.images.len() + phases.assets.videos.len() + phases.assets.audios.len())
                    .to_string(),
            ),
            ("Timeline", phases.editing.timeline.len().to_string()),
            (
                "Export",
                format!(
                    "{} {} {}",
                    phases.export.format, phases.export.resolution, phases.export.quality
                ),
            ),
        ];
        ui.message("");
        for (key, value) in summary {
            let line = ui.theme().format_field(key, &value);
            ui.message(&line);
        }

        let tips = phase_tips(project.current_phase);
        if ui.output_mode().shows_details() && !tips.is_empty() {
            ui.message("");
            let heading = ui.theme().key.apply_to("Tips").to_string();
            ui.message(&heading);
            for tip in tips {
                ui.message(&format!("  • {}", tip));
            }
        }
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = display::open_store(&self.paths)?;
        let project = display::require_current(&store)?;

        if let Some(phase) = self.args.phase {
            let value = project
                .phases
                .to_json(phase)
                .with_context(|| format!("Failed to serialize {} data", phase))?;
            let json = serde_json::to_string_pretty(&value)
                .with_context(|| format!("Failed to serialize {} data", phase))?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        if self.args.json {
            let json =
                serde_json::to_string_pretty(project).context("Failed to serialize project")?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        self.show_summary(ui, project);
        Ok(CommandResult::success())
    }
}
