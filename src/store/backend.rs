//! Storage backends for the project store.
//!
//! The store hands its full state to a [`StateBackend`] after every
//! mutation. [`FileBackend`] keeps it in a JSON file on disk;
//! [`MemoryBackend`] keeps it in memory for tests.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::state::PersistedState;
use crate::error::{Result, StoryplanError};

/// Where the store loads and saves its state.
pub trait StateBackend {
    /// Load the saved state, or an empty state if nothing was saved yet.
    fn load(&self) -> Result<PersistedState>;

    /// Replace the saved state.
    fn save(&mut self, state: &PersistedState) -> Result<()>;
}

/// JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Create a backend that reads and writes `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The state file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateBackend for FileBackend {
    fn load(&self) -> Result<PersistedState> {
        if !self.path.exists() {
            debug!("No state file at {}, starting empty", self.path.display());
            return Ok(PersistedState::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let state: PersistedState =
            serde_json::from_str(&content).map_err(|e| StoryplanError::StateParseError {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        if state.version > PersistedState::CURRENT_VERSION {
            return Err(StoryplanError::StateParseError {
                path: self.path.clone(),
                message: format!(
                    "state version {} is newer than supported version {}",
                    state.version,
                    PersistedState::CURRENT_VERSION
                ),
            });
        }

        debug!(
            "Loaded {} project(s) from {}",
            state.state.projects.len(),
            self.path.display()
        );
        Ok(state)
    }

    /// Save state using atomic write.
    ///
    /// Writes to a temp file and renames it over the state file, so the
    /// state file is never left half written.
    fn save(&mut self, state: &PersistedState) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content = serde_json::to_string_pretty(state).map_err(|e| {
            StoryplanError::StateSerializeError {
                message: e.to_string(),
            }
        })?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &self.path)?;

        debug!("Saved project state to {}", self.path.display());
        Ok(())
    }
}

/// In-memory backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    saved: Option<PersistedState>,
    save_count: usize,
    fail_saves: bool,
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend that already holds `state`.
    pub fn with_state(state: PersistedState) -> Self {
        Self {
            saved: Some(state),
            ..Default::default()
        }
    }

    /// Make every following save fail with an IO error.
    pub fn fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// Last saved state.
    pub fn saved(&self) -> Option<&PersistedState> {
        self.saved.as_ref()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl StateBackend for MemoryBackend {
    fn load(&self) -> Result<PersistedState> {
        Ok(self.saved.clone().unwrap_or_default())
    }

    fn save(&mut self, state: &PersistedState) -> Result<()> {
        if self.fail_saves {
            return Err(StoryplanError::Io(std::io::Error::other(
                "storage quota exceeded",
            )));
        }
        self.saved = Some(state.clone());
        self.save_count += 1;
        Ok(())
    }
}
