//! Production phases.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StoryplanError;

/// One stage of the fixed six-stage production pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Planning,
    Script,
    Storyboard,
    Assets,
    Editing,
    Export,
}

impl Phase {
    /// All phases in pipeline order.
    pub const ORDER: [Phase; 6] = [
        Phase::Planning,
        Phase::Script,
        Phase::Storyboard,
        Phase::Assets,
        Phase::Editing,
        Phase::Export,
    ];

    /// Position of this phase in [`Phase::ORDER`].
    pub fn index(self) -> usize {
        match self {
            Phase::Planning => 0,
            Phase::Script => 1,
            Phase::Storyboard => 2,
            Phase::Assets => 3,
            Phase::Editing => 4,
            Phase::Export => 5,
        }
    }

    /// The phase after this one, if any.
    pub fn next(self) -> Option<Phase> {
        Self::ORDER.get(self.index() + 1).copied()
    }

    /// The phase before this one, if any.
    pub fn previous(self) -> Option<Phase> {
        self.index().checked_sub(1).map(|i| Self::ORDER[i])
    }

    /// Lowercase identifier used in persisted state and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Planning => "planning",
            Phase::Script => "script",
            Phase::Storyboard => "storyboard",
            Phase::Assets => "assets",
            Phase::Editing => "editing",
            Phase::Export => "export",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = StoryplanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ORDER
            .iter()
            .copied()
            .find(|p| p.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| StoryplanError::UnknownPhase {
                name: s.to_string(),
            })
    }
}
