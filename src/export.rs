//! Storyboard export.
//!
//! Writes a one-way snapshot of a project's storyboard as pretty-printed
//! JSON to `<project name>_storyboard.json`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

use crate::error::Result;
use crate::project::{Project, StoryboardData};

/// Pretty-printed JSON of a storyboard payload.
pub fn storyboard_json(storyboard: &StoryboardData) -> Result<String> {
    let json =
        serde_json::to_string_pretty(storyboard).context("Failed to serialize storyboard")?;
    Ok(json)
}

/// File name for a project's storyboard export.
///
/// Path separators in the project name are replaced so the export always
/// lands in the chosen directory.
pub fn export_file_name(project_name: &str) -> String {
    let safe: String = project_name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{}_storyboard.json", safe)
}

/// Write the project's storyboard into `dir`, returning the file path.
pub fn export_storyboard(project: &Project, dir: &Path) -> Result<PathBuf> {
    let json = storyboard_json(&project.phases.storyboard)?;

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {:?}", dir))?;
    let path = dir.join(export_file_name(&project.name));
    fs::write(&path, json).with_context(|| format!("Failed to write storyboard to {:?}", path))?;

    info!(
        "Exported {} frame(s) of '{}' to {}",
        project.phases.storyboard.frames.len(),
        project.name,
        path.display()
    );
    Ok(path)
}
