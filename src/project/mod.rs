//! Project data model.
//!
//! A [`Project`] moves through six ordered [`Phase`]s and holds one payload
//! per phase in [`ProjectPhases`]. Payloads change only through
//! [`PhasePatch`] merges.

pub mod frame;
pub mod model;
pub mod payload;
pub mod phase;

pub use frame::{CameraMovement, ShotType, StoryboardFrame, TransitionType};
pub use model::{new_id, Project};
pub use payload::{
    Asset, AssetsData, AssetsPatch, EditingData, EditingPatch, ExportData, ExportPatch,
    MediaKind, PhasePatch, PlanningData, PlanningPatch, ProjectPhases, Scene, ScriptData,
    ScriptPatch, StoryboardData, StoryboardPatch, TimelineItem,
};
pub use phase::Phase;
