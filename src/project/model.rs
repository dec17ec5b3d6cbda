//! Project records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::payload::{PhasePatch, ProjectPhases};
use super::phase::Phase;

/// Generate a fresh opaque identifier.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// One video production being planned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub current_phase: Phase,
    pub phases: ProjectPhases,
}

impl Project {
    /// Create a project at the planning phase with every payload at its
    /// default.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            name: name.into(),
            description: description.into(),
            created_at: now,
            updated_at: now,
            current_phase: Phase::Planning,
            phases: ProjectPhases::default(),
        }
    }

    /// Move to `phase` and stamp the update time.
    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.current_phase = phase;
        self.touch();
    }

    /// Merge partial phase data and stamp the update time.
    pub(crate) fn apply_patch(&mut self, patch: PhasePatch) {
        patch.apply(&mut self.phases);
        self.touch();
    }

    fn touch(&mut self) {
        // Never let updatedAt run behind createdAt, even with a skewed clock.
        self.updated_at = Utc::now().max(self.created_at);
    }
}
