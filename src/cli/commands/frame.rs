//! Frame command implementation.
//!
//! The `storyplan frame` subcommands edit the selected project's
//! storyboard. Each edit builds a new frame list and hands the whole list
//! to the store as a storyboard update.

use crate::cli::args::FrameSubcommand;
use crate::config::DataPaths;
use crate::error::Result;
use crate::project::{Phase, StoryboardFrame, StoryboardPatch};
use crate::storyboard::{
    add_frame, delete_frame, duplicate_frame, move_frame, save_frame, total_duration,
    MoveDirection,
};
use crate::ui::UserInterface;
use crate::workflow::phase_tips;

use super::dispatcher::{Command, CommandResult};
use super::display::{self, FileStore};

/// The frame command implementation.
pub struct FrameCommand {
    paths: DataPaths,
    command: FrameSubcommand,
}

impl FrameCommand {
    /// Create a new frame command.
    pub fn new(paths: DataPaths, command: FrameSubcommand) -> Self {
        Self { paths, command }
    }
}

fn save_frames(store: &mut FileStore, frames: Vec<StoryboardFrame>) -> Result<()> {
    store.update_phase_data(StoryboardPatch::frames(frames))
}

fn list_frames(ui: &mut dyn UserInterface, frames: &[StoryboardFrame]) {
    if frames.is_empty() {
        ui.message("No frames yet. Add one with `storyplan frame add`.");
        return;
    }

    for frame in frames {
        ui.message(&display::frame_line(frame));
        if ui.output_mode().shows_details() {
            ui.message(&format!("       {}", display::short_id(&frame.id)));
        }
    }
    ui.message("");
    ui.message(&format!(
        "  {} frame(s), {}s total",
        frames.len(),
        total_duration(frames)
    ));

    if ui.output_mode().shows_details() {
        ui.message("");
        for tip in phase_tips(Phase::Storyboard) {
            ui.message(&format!("  • {}", tip));
        }
    }
}

impl Command for FrameCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = display::open_store(&self.paths)?;
        let frames = display::require_current(&store)?
            .phases
            .storyboard
            .frames
            .clone();

        match &self.command {
            FrameSubcommand::List => list_frames(ui, &frames),

            FrameSubcommand::Add(fields) => {
                let mut frame = StoryboardFrame::new();
                fields.apply_to(&mut frame);
                let updated = add_frame(&frames, frame);
                let number = updated.last().map(|f| f.frame_number).unwrap_or_default();
                let id = updated.last().map(|f| f.id.clone()).unwrap_or_default();
                save_frames(&mut store, updated)?;

                ui.success(&format!("Added frame #{}", number));
                ui.data(&id);
            }

            FrameSubcommand::Edit { frame, fields } => {
                let index = display::resolve_frame(&frames, frame)?;
                let mut edited = frames[index].clone();
                fields.apply_to(&mut edited);
                let number = edited.frame_number;
                save_frames(&mut store, save_frame(&frames, edited))?;

                ui.success(&format!("Updated frame #{}", number));
            }

            FrameSubcommand::Delete { frame } => {
                let index = display::resolve_frame(&frames, frame)?;
                let removed = &frames[index];
                save_frames(&mut store, delete_frame(&frames, &removed.id))?;

                ui.success(&format!("Deleted frame #{}", removed.frame_number));
            }

            FrameSubcommand::Duplicate { frame } => {
                let index = display::resolve_frame(&frames, frame)?;
                let source = frames[index].frame_number;
                let updated = duplicate_frame(&frames, &frames[index].id);
                let copy = updated.last().map(|f| f.frame_number).unwrap_or_default();
                save_frames(&mut store, updated)?;

                ui.success(&format!("Duplicated frame #{} as #{}", source, copy));
            }

            FrameSubcommand::Move { frame, direction } => {
                let index = display::resolve_frame(&frames, frame)?;
                let direction = MoveDirection::from(*direction);
                let updated = move_frame(&frames, index, direction);
                if updated == frames {
                    let edge = match direction {
                        MoveDirection::Up => "first",
                        MoveDirection::Down => "last",
                    };
                    ui.warning(&format!("Frame is already {}", edge));
                    return Ok(CommandResult::success());
                }
                save_frames(&mut store, updated)?;

                let moved = match direction {
                    MoveDirection::Up => index,
                    MoveDirection::Down => index + 2,
                };
                ui.success(&format!("Moved frame to #{}", moved));
                if ui.output_mode().shows_details() {
                    let frames = display::require_current(&store)?
                        .phases
                        .storyboard
                        .frames
                        .clone();
                    list_frames(ui, &frames);
                }
            }

            FrameSubcommand::Prompt { frame } => {
                let index = display::resolve_frame(&frames, frame)?;
                let mut edited = frames[index].clone();
                if edited.description.trim().is_empty() {
                    ui.error("Frame has no description to build a prompt from");
                    return Ok(CommandResult::failure(1));
                }
                edited.image_prompt = edited.generate_image_prompt();
                let prompt = edited.image_prompt.clone();
                save_frames(&mut store, save_frame(&frames, edited))?;

                ui.data(&prompt);
            }
        }

        Ok(CommandResult::success())
    }
}
