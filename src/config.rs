//! Data directory layout.
//!
//! All storyplan files live under one data directory, chosen in order:
//! 1. `--data-dir` flag or `STORYPLAN_HOME` environment variable
//! 2. The platform data directory (`~/.local/share/storyplan` on Linux)
//! 3. `.storyplan` in the working directory

use std::path::{Path, PathBuf};

use crate::store::FileBackend;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "STORYPLAN_HOME";

/// File name of the persisted project list.
pub const STATE_FILE_NAME: &str = "storyplan-projects.json";

/// File name of the settings file.
pub const SETTINGS_FILE_NAME: &str = "settings.yml";

/// Paths of the files storyplan keeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    /// Use `root` as the data directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the data directory, preferring an explicit override.
    pub fn resolve(explicit: Option<&Path>) -> Self {
        match explicit {
            Some(dir) => Self::new(dir),
            None => Self::new(default_data_dir()),
        }
    }

    /// The data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Project state file.
    pub fn state_file(&self) -> PathBuf {
        self.root.join(STATE_FILE_NAME)
    }

    /// Settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE_NAME)
    }

    /// Backend over the project state file.
    pub fn state_backend(&self) -> FileBackend {
        FileBackend::new(self.state_file())
    }
}

/// Platform data directory for storyplan.
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("storyplan"))
        .unwrap_or_else(|| PathBuf::from(".storyplan"))
}
