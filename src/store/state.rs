//! Persisted store layout.

use serde::{Deserialize, Serialize};

use crate::project::Project;
use crate::workflow::WorkflowStep;

/// Everything the store writes out, wrapped with a schema version.
///
/// ```json
/// { "state": { "projects": [], "currentProjectId": null, "workflowSteps": [] }, "version": 0 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub state: StoreState,
    #[serde(default)]
    pub version: u32,
}

/// Store contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub current_project_id: Option<String>,
    /// Derived from the current project. Written for readers of the file,
    /// recomputed on load.
    #[serde(default)]
    pub workflow_steps: Vec<WorkflowStep>,
}

impl PersistedState {
    /// Current schema version.
    pub const CURRENT_VERSION: u32 = 0;
}
