//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::DATA_DIR_ENV;
use crate::project::{CameraMovement, Phase, ShotType, StoryboardFrame, TransitionType};
use crate::storyboard::MoveDirection;

/// storyplan - Plan short video productions phase by phase.
#[derive(Debug, Parser)]
#[command(name = "storyplan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding projects and settings
    #[arg(long, global = true, env = DATA_DIR_ENV, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a project and select it
    New(NewArgs),

    /// List projects (default if no command specified)
    List(ListArgs),

    /// Select the project to work on
    Select(SelectArgs),

    /// Delete a project
    Delete(DeleteArgs),

    /// Show the selected project
    Show(ShowArgs),

    /// Show workflow progress of the selected project
    Steps,

    /// Move the selected project between phases
    Phase(PhaseArgs),

    /// Merge JSON fields into a phase's data
    Update(UpdateArgs),

    /// Fill in planning answers
    Plan(PlanArgs),

    /// Edit the script outline
    Script(ScriptArgs),

    /// Edit storyboard frames
    Frame(FrameArgs),

    /// Export the storyboard as JSON
    Export(ExportArgs),

    /// Manage local tool settings
    Settings(SettingsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `new` command.
#[derive(Debug, Clone, clap::Args)]
pub struct NewArgs {
    /// Project name
    pub name: String,

    /// Short description
    #[arg(short, long, default_value = "")]
    pub description: String,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `select` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SelectArgs {
    /// Project id or unique id prefix
    #[arg(required_unless_present = "clear")]
    pub id: Option<String>,

    /// Clear the selection
    #[arg(long, conflicts_with = "id")]
    pub clear: bool,
}

/// Arguments for the `delete` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DeleteArgs {
    /// Project id or unique id prefix
    pub id: String,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Output the project as JSON
    #[arg(long)]
    pub json: bool,

    /// Show only this phase's data
    #[arg(long, value_name = "PHASE")]
    pub phase: Option<Phase>,
}

/// Arguments for the `phase` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PhaseArgs {
    #[command(subcommand)]
    pub command: PhaseSubcommand,
}

/// Phase subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum PhaseSubcommand {
    /// Jump to any phase
    Set {
        /// Target phase
        phase: Phase,
    },
    /// Advance to the next phase
    Next,
    /// Go back to the previous phase
    Prev,
}

/// Arguments for the `update` command.
#[derive(Debug, Clone, clap::Args)]
pub struct UpdateArgs {
    /// Phase whose data to update
    pub phase: Phase,

    /// JSON object of camelCase fields to merge, e.g. '{"theme": "Night markets"}'
    pub data: String,
}

/// Arguments for the `plan` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PlanArgs {
    /// Video theme
    #[arg(long)]
    pub theme: Option<String>,

    /// Target audience
    #[arg(long)]
    pub audience: Option<String>,

    /// Planned running time, e.g. "60s"
    #[arg(long)]
    pub duration: Option<String>,

    /// Visual style
    #[arg(long)]
    pub style: Option<String>,

    /// Objectives, one per line
    #[arg(long)]
    pub objectives: Option<String>,
}

/// Arguments for the `script` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ScriptArgs {
    /// Story outline
    #[arg(long)]
    pub outline: String,
}

/// Arguments for the `frame` command.
#[derive(Debug, Clone, clap::Args)]
pub struct FrameArgs {
    #[command(subcommand)]
    pub command: FrameSubcommand,
}

/// Frame subcommands.
///
/// `FRAME` is a frame number or a unique id prefix.
#[derive(Debug, Clone, Subcommand)]
pub enum FrameSubcommand {
    /// List frames in order
    List,
    /// Append a new frame
    Add(FrameFields),
    /// Change fields of a frame
    Edit {
        /// Frame to edit
        frame: String,
        #[command(flatten)]
        fields: FrameFields,
    },
    /// Delete a frame
    Delete {
        /// Frame to delete
        frame: String,
    },
    /// Append a copy of a frame
    Duplicate {
        /// Frame to copy
        frame: String,
    },
    /// Move a frame one place up or down
    Move {
        /// Frame to move
        frame: String,
        /// Direction to move
        #[arg(value_enum)]
        direction: DirectionArg,
    },
    /// Generate a frame's image prompt from its description
    Prompt {
        /// Frame to generate for
        frame: String,
    },
}

/// Frame fields settable from the command line.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FrameFields {
    /// Shot title
    #[arg(long)]
    pub title: Option<String>,

    /// What happens in the shot
    #[arg(long)]
    pub description: Option<String>,

    /// Scene the shot belongs to
    #[arg(long)]
    pub scene: Option<u32>,

    /// Shot framing (wide, medium, close-up, ...)
    #[arg(long)]
    pub shot: Option<ShotType>,

    /// Camera movement (static, pan-left, dolly-in, ...)
    #[arg(long)]
    pub movement: Option<CameraMovement>,

    /// Shot length in seconds (1-60)
    #[arg(long, value_parser = clap::value_parser!(u32).range(
        i64::from(StoryboardFrame::MIN_DURATION)..=i64::from(StoryboardFrame::MAX_DURATION)
    ))]
    pub duration: Option<u32>,

    /// Transition out (cut, fade, dissolve, ...)
    #[arg(long)]
    pub transition: Option<TransitionType>,

    /// Dialogue or narration
    #[arg(long)]
    pub dialogue: Option<String>,

    /// Sound effects and music
    #[arg(long = "sound")]
    pub sound_effects: Option<String>,

    /// Extra notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Image-generation prompt
    #[arg(long = "prompt")]
    pub image_prompt: Option<String>,

    /// Generated image URL
    #[arg(long)]
    pub image_url: Option<String>,

    /// Reference image URL
    #[arg(long = "reference-url")]
    pub reference_image_url: Option<String>,
}

impl FrameFields {
    /// Overwrite the frame fields that were given.
    pub fn apply_to(&self, frame: &mut StoryboardFrame) {
        if let Some(title) = &self.title {
            frame.title = title.clone();
        }
        if let Some(description) = &self.description {
            frame.description = description.clone();
        }
        if let Some(scene) = self.scene {
            frame.scene_number = scene;
        }
        if let Some(shot) = self.shot {
            frame.shot_type = shot;
        }
        if let Some(movement) = self.movement {
            frame.camera_movement = movement;
        }
        if let Some(duration) = self.duration {
            frame.duration = duration;
        }
        if let Some(transition) = self.transition {
            frame.transition = transition;
        }
        if let Some(dialogue) = &self.dialogue {
            frame.dialogue = dialogue.clone();
        }
        if let Some(sound) = &self.sound_effects {
            frame.sound_effects = sound.clone();
        }
        if let Some(notes) = &self.notes {
            frame.notes = notes.clone();
        }
        if let Some(prompt) = &self.image_prompt {
            frame.image_prompt = prompt.clone();
        }
        if let Some(url) = &self.image_url {
            frame.image_url = non_empty(url);
        }
        if let Some(url) = &self.reference_image_url {
            frame.reference_image_url = non_empty(url);
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Direction for `frame move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    Up,
    Down,
}

impl From<DirectionArg> for MoveDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Up => MoveDirection::Up,
            DirectionArg::Down => MoveDirection::Down,
        }
    }
}

/// Arguments for the `export` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ExportArgs {
    /// Directory to write the export into
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,
}

/// Arguments for the `settings` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsSubcommand,
}

/// Settings subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum SettingsSubcommand {
    /// Show settings with keys masked
    Show,
    /// Store an API key (openai, banana, jimeng)
    Set {
        /// Setting name
        key: String,
        /// Value to store; empty clears it
        value: String,
    },
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
