//! Error types for storyplan operations.
//!
//! This module defines [`StoryplanError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Store operations never fail on bad input; their `Result` carries
//!   persistence failures only
//! - The CLI turns not-found conditions into `ProjectNotFound`,
//!   `NoCurrentProject` and `FrameNotFound` so the user gets a message
//! - Use `anyhow::Error` (via `StoryplanError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for storyplan operations.
#[derive(Debug, Error)]
pub enum StoryplanError {
    /// Persisted project state could not be parsed.
    #[error("Failed to parse project state at {path}: {message}")]
    StateParseError { path: PathBuf, message: String },

    /// Project state could not be serialized.
    #[error("Failed to serialize project state: {message}")]
    StateSerializeError { message: String },

    /// Settings file could not be parsed.
    #[error("Failed to parse settings at {path}: {message}")]
    SettingsParseError { path: PathBuf, message: String },

    /// No project with the given id.
    #[error("Project not found: {id}")]
    ProjectNotFound { id: String },

    /// A command needs a selected project and none is selected.
    #[error("No project selected. Create one with `storyplan new` or pick one with `storyplan select`")]
    NoCurrentProject,

    /// No storyboard frame with the given id in the current project.
    #[error("Storyboard frame not found: {id}")]
    FrameNotFound { id: String },

    /// Partial phase data did not match the phase payload shape.
    #[error("Invalid data for phase '{phase}': {message}")]
    InvalidPhaseData { phase: String, message: String },

    /// Phase name is not one of the six production phases.
    #[error("Unknown phase: {name}")]
    UnknownPhase { name: String },

    /// Settings key is not one of the known API-key slots.
    #[error("Unknown setting: {key}")]
    UnknownSetting { key: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for storyplan operations.
pub type Result<T> = std::result::Result<T, StoryplanError>;
