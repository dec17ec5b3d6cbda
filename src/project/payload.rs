//! Per-phase data payloads and partial updates.
//!
//! Every project carries one payload per phase from the moment it is
//! created. Payloads are only changed through [`PhasePatch`], which merges
//! the fields it carries into a fresh copy of the payload and leaves every
//! other field as it was.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::frame::StoryboardFrame;
use super::phase::Phase;
use crate::error::{Result, StoryplanError};

/// Answers gathered while planning the video.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningData {
    pub theme: String,
    pub target_audience: String,
    pub duration: String,
    pub style: String,
    pub objectives: Vec<String>,
}

/// Script outline and scene breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptData {
    pub outline: String,
    pub scenes: Vec<Scene>,
}

/// One scene of the script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub id: String,
    pub number: u32,
    pub title: String,
    pub description: String,
    pub dialogue: String,
    pub duration: String,
}

/// Ordered storyboard frames.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryboardData {
    pub frames: Vec<StoryboardFrame>,
}

/// Collected media, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetsData {
    pub images: Vec<Asset>,
    pub videos: Vec<Asset>,
    pub audios: Vec<Asset>,
}

/// Kind of media an asset or timeline item refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
}

/// A collected piece of media.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Edit timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditingData {
    pub timeline: Vec<TimelineItem>,
}

/// One clip placed on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub asset_id: String,
    pub start_time: f64,
    pub duration: f64,
}

/// Render settings for the final video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportData {
    pub format: String,
    pub resolution: String,
    pub quality: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_url: Option<String>,
}

impl Default for ExportData {
    fn default() -> Self {
        Self {
            format: "mp4".to_string(),
            resolution: "1920x1080".to_string(),
            quality: "high".to_string(),
            output_url: None,
        }
    }
}

/// One payload per phase, all always present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPhases {
    pub planning: PlanningData,
    pub script: ScriptData,
    pub storyboard: StoryboardData,
    pub assets: AssetsData,
    pub editing: EditingData,
    pub export: ExportData,
}

impl ProjectPhases {
    /// JSON view of a single phase payload.
    pub fn to_json(&self, phase: Phase) -> serde_json::Result<serde_json::Value> {
        match phase {
            Phase::Planning => serde_json::to_value(&self.planning),
            Phase::Script => serde_json::to_value(&self.script),
            Phase::Storyboard => serde_json::to_value(&self.storyboard),
            Phase::Assets => serde_json::to_value(&self.assets),
            Phase::Editing => serde_json::to_value(&self.editing),
            Phase::Export => serde_json::to_value(&self.export),
        }
    }
}

/// Partial planning update.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlanningPatch {
    pub theme: Option<String>,
    pub target_audience: Option<String>,
    pub duration: Option<String>,
    pub style: Option<String>,
    pub objectives: Option<Vec<String>>,
}

/// Partial script update.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScriptPatch {
    pub outline: Option<String>,
    pub scenes: Option<Vec<Scene>>,
}

/// Partial storyboard update. Frame edits always replace the whole list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StoryboardPatch {
    pub frames: Option<Vec<StoryboardFrame>>,
}

/// Partial assets update.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AssetsPatch {
    pub images: Option<Vec<Asset>>,
    pub videos: Option<Vec<Asset>>,
    pub audios: Option<Vec<Asset>>,
}

/// Partial editing update.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EditingPatch {
    pub timeline: Option<Vec<TimelineItem>>,
}

/// Partial export update.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExportPatch {
    pub format: Option<String>,
    pub resolution: Option<String>,
    pub quality: Option<String>,
    /// `None` keeps the URL, `Some(None)` clears it.
    #[serde(default, deserialize_with = "present_or_null")]
    pub output_url: Option<Option<String>>,
}

/// Mark a field that appeared in the input, even as `null`, so absent and
/// explicitly cleared values stay distinguishable.
fn present_or_null<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl PlanningPatch {
    /// Split newline-separated text into an objectives list.
    pub fn objectives_from_text(text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect()
    }

    fn merge(self, base: &PlanningData) -> PlanningData {
        PlanningData {
            theme: self.theme.unwrap_or_else(|| base.theme.clone()),
            target_audience: self
                .target_audience
                .unwrap_or_else(|| base.target_audience.clone()),
            duration: self.duration.unwrap_or_else(|| base.duration.clone()),
            style: self.style.unwrap_or_else(|| base.style.clone()),
            objectives: self.objectives.unwrap_or_else(|| base.objectives.clone()),
        }
    }
}

impl ScriptPatch {
    fn merge(self, base: &ScriptData) -> ScriptData {
        ScriptData {
            outline: self.outline.unwrap_or_else(|| base.outline.clone()),
            scenes: self.scenes.unwrap_or_else(|| base.scenes.clone()),
        }
    }
}

impl StoryboardPatch {
    /// Replace the frame list.
    pub fn frames(frames: Vec<StoryboardFrame>) -> Self {
        Self {
            frames: Some(frames),
        }
    }

    fn merge(self, base: &StoryboardData) -> StoryboardData {
        StoryboardData {
            frames: self.frames.unwrap_or_else(|| base.frames.clone()),
        }
    }
}

impl AssetsPatch {
    fn merge(self, base: &AssetsData) -> AssetsData {
        AssetsData {
            images: self.images.unwrap_or_else(|| base.images.clone()),
            videos: self.videos.unwrap_or_else(|| base.videos.clone()),
            audios: self.audios.unwrap_or_else(|| base.audios.clone()),
        }
    }
}

impl EditingPatch {
    fn merge(self, base: &EditingData) -> EditingData {
        EditingData {
            timeline: self.timeline.unwrap_or_else(|| base.timeline.clone()),
        }
    }
}

impl ExportPatch {
    fn merge(self, base: &ExportData) -> ExportData {
        ExportData {
            format: self.format.unwrap_or_else(|| base.format.clone()),
            resolution: self.resolution.unwrap_or_else(|| base.resolution.clone()),
            quality: self.quality.unwrap_or_else(|| base.quality.clone()),
            output_url: self
                .output_url
                .unwrap_or_else(|| base.output_url.clone()),
        }
    }
}

/// A partial update addressed to exactly one phase payload.
#[derive(Debug, Clone, PartialEq)]
pub enum PhasePatch {
    Planning(PlanningPatch),
    Script(ScriptPatch),
    Storyboard(StoryboardPatch),
    Assets(AssetsPatch),
    Editing(EditingPatch),
    Export(ExportPatch),
}

impl PhasePatch {
    /// The phase this patch targets.
    pub fn phase(&self) -> Phase {
        match self {
            PhasePatch::Planning(_) => Phase::Planning,
            PhasePatch::Script(_) => Phase::Script,
            PhasePatch::Storyboard(_) => Phase::Storyboard,
            PhasePatch::Assets(_) => Phase::Assets,
            PhasePatch::Editing(_) => Phase::Editing,
            PhasePatch::Export(_) => Phase::Export,
        }
    }

    /// Build a patch for `phase` from a JSON object of camelCase fields.
    ///
    /// Unknown fields are rejected so typos do not vanish silently.
    pub fn from_json(phase: Phase, value: serde_json::Value) -> Result<Self> {
        let invalid = |e: serde_json::Error| StoryplanError::InvalidPhaseData {
            phase: phase.to_string(),
            message: e.to_string(),
        };

        if !value.is_object() {
            return Err(StoryplanError::InvalidPhaseData {
                phase: phase.to_string(),
                message: "expected a JSON object".to_string(),
            });
        }

        let patch = match phase {
            Phase::Planning => PhasePatch::Planning(serde_json::from_value(value).map_err(invalid)?),
            Phase::Script => PhasePatch::Script(serde_json::from_value(value).map_err(invalid)?),
            Phase::Storyboard => {
                PhasePatch::Storyboard(serde_json::from_value(value).map_err(invalid)?)
            }
            Phase::Assets => PhasePatch::Assets(serde_json::from_value(value).map_err(invalid)?),
            Phase::Editing => PhasePatch::Editing(serde_json::from_value(value).map_err(invalid)?),
            Phase::Export => PhasePatch::Export(serde_json::from_value(value).map_err(invalid)?),
        };

        Ok(patch)
    }

    /// Merge into `phases`, replacing the targeted payload with a new value.
    pub fn apply(self, phases: &mut ProjectPhases) {
        match self {
            PhasePatch::Planning(p) => phases.planning = p.merge(&phases.planning),
            PhasePatch::Script(p) => phases.script = p.merge(&phases.script),
            PhasePatch::Storyboard(p) => phases.storyboard = p.merge(&phases.storyboard),
            PhasePatch::Assets(p) => phases.assets = p.merge(&phases.assets),
            PhasePatch::Editing(p) => phases.editing = p.merge(&phases.editing),
            PhasePatch::Export(p) => phases.export = p.merge(&phases.export),
        }
    }
}

impl From<PlanningPatch> for PhasePatch {
    fn from(patch: PlanningPatch) -> Self {
        PhasePatch::Planning(patch)
    }
}

impl From<ScriptPatch> for PhasePatch {
    fn from(patch: ScriptPatch) -> Self {
        PhasePatch::Script(patch)
    }
}

impl From<StoryboardPatch> for PhasePatch {
    fn from(patch: StoryboardPatch) -> Self {
        PhasePatch::Storyboard(patch)
    }
}

impl From<AssetsPatch> for PhasePatch {
    fn from(patch: AssetsPatch) -> Self {
        PhasePatch::Assets(patch)
    }
}

impl From<EditingPatch> for PhasePatch {
    fn from(patch: EditingPatch) -> Self {
        PhasePatch::Editing(patch)
    }
}

impl From<ExportPatch> for PhasePatch {
    fn from(patch: ExportPatch) -> Self {
        PhasePatch::Export(patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_phases_are_empty_except_export() {
        let phases = ProjectPhases::default();
        assert_eq!(phases.planning, PlanningData::default());
        assert!(phases.script.outline.is_empty());
        assert!(phases.storyboard.frames.is_empty());
        assert!(phases.assets.images.is_empty());
        assert!(phases.editing.timeline.is_empty());
        assert_eq!(phases.export.format, "mp4");
        assert_eq!(phases.export.resolution, "1920x1080");
        assert_eq!(phases.export.quality, "high");
        assert!(phases.export.output_url.is_none());
    }

    #[test]
    fn planning_patch_keeps_absent_fields() {
        let mut phases = ProjectPhases::default();
        phases.planning.style = "documentary".to_string();

        PhasePatch::from(PlanningPatch {
            theme: Some("Ocean cleanup".to_string()),
            ..Default::default()
        })
        .apply(&mut phases);

        assert_eq!(phases.planning.theme, "Ocean cleanup");
        assert_eq!(phases.planning.style, "documentary");
    }

    #[test]
    fn patch_reports_its_phase() {
        let patch: PhasePatch = ExportPatch::default().into();
        assert_eq!(patch.phase(), Phase::Export);
    }

    #[test]
    fn from_json_builds_typed_patch() {
        let patch = PhasePatch::from_json(
            Phase::Planning,
            json!({"targetAudience": "teens", "objectives": ["inform", "entertain"]}),
        )
        .unwrap();

        let mut phases = ProjectPhases::default();
        patch.apply(&mut phases);
        assert_eq!(phases.planning.target_audience, "teens");
        assert_eq!(phases.planning.objectives, vec!["inform", "entertain"]);
    }

    #[test]
    fn from_json_rejects_unknown_fields() {
        let err = PhasePatch::from_json(Phase::Export, json!({"codec": "h264"})).unwrap_err();
        match err {
            StoryplanError::InvalidPhaseData { phase, message } => {
                assert_eq!(phase, "export");
                assert!(message.contains("codec"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn from_json_rejects_wrong_types() {
        let result = PhasePatch::from_json(Phase::Script, json!({"outline": 42}));
        assert!(result.is_err());
    }

    #[test]
    fn export_patch_sets_output_url() {
        let mut phases = ProjectPhases::default();
        PhasePatch::from(ExportPatch {
            output_url: Some(Some("file:///tmp/out.mp4".to_string())),
            ..Default::default()
        })
        .apply(&mut phases);

        assert_eq!(
            phases.export.output_url.as_deref(),
            Some("file:///tmp/out.mp4")
        );
        assert_eq!(phases.export.format, "mp4");
    }

    #[test]
    fn objectives_from_text_drops_blank_lines() {
        let objectives = PlanningPatch::objectives_from_text("raise awareness\n\n  drive signups \n");
        assert_eq!(objectives, vec!["raise awareness", "drive signups"]);
    }

    #[test]
    fn asset_kind_serializes_as_type() {
        let asset = Asset {
            id: "a1".to_string(),
            name: "intro".to_string(),
            kind: MediaKind::Video,
            url: "file:///intro.mp4".to_string(),
            created_at: Utc::now(),
            tags: vec![],
        };
        let json = serde_json::to_value(&asset).unwrap();
        assert_eq!(json["type"], "video");
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn to_json_returns_single_payload() {
        let phases = ProjectPhases::default();
        let value = phases.to_json(Phase::Storyboard).unwrap();
        assert_eq!(value, json!({"frames": []}));
    }

    #[test]
    fn from_json_requires_object() {
        let err = PhasePatch::from_json(Phase::Planning, json!(["Night markets"])).unwrap_err();
        assert!(err.to_string().contains("expected a JSON object"));
    }

    #[test]
    fn export_patch_null_clears_output_url() {
        let mut phases = ProjectPhases::default();
        phases.export.output_url = Some("file:///tmp/out.mp4".to_string());

        PhasePatch::from_json(Phase::Export, json!({"quality": "medium"}))
            .unwrap()
            .apply(&mut phases);
        assert_eq!(
            phases.export.output_url.as_deref(),
            Some("file:///tmp/out.mp4")
        );

        PhasePatch::from_json(Phase::Export, json!({"outputUrl": null}))
            .unwrap()
            .apply(&mut phases);
        assert!(phases.export.output_url.is_none());
        assert_eq!(phases.export.quality, "medium");
    }
}
