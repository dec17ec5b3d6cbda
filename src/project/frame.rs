//! Storyboard frames and their camera vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::model::new_id;

/// Framing of a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShotType {
    Wide,
    Medium,
    CloseUp,
    ExtremeCloseUp,
    OverShoulder,
    PointOfView,
    Aerial,
}

impl ShotType {
    pub const ALL: [ShotType; 7] = [
        ShotType::Wide,
        ShotType::Medium,
        ShotType::CloseUp,
        ShotType::ExtremeCloseUp,
        ShotType::OverShoulder,
        ShotType::PointOfView,
        ShotType::Aerial,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShotType::Wide => "wide",
            ShotType::Medium => "medium",
            ShotType::CloseUp => "close-up",
            ShotType::ExtremeCloseUp => "extreme-close-up",
            ShotType::OverShoulder => "over-shoulder",
            ShotType::PointOfView => "point-of-view",
            ShotType::Aerial => "aerial",
        }
    }

    /// Human-readable label, also used when building image prompts.
    pub fn label(self) -> &'static str {
        match self {
            ShotType::Wide => "wide shot",
            ShotType::Medium => "medium shot",
            ShotType::CloseUp => "close-up",
            ShotType::ExtremeCloseUp => "extreme close-up",
            ShotType::OverShoulder => "over-the-shoulder shot",
            ShotType::PointOfView => "point-of-view shot",
            ShotType::Aerial => "aerial shot",
        }
    }
}

/// How the camera moves during a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CameraMovement {
    Static,
    PanLeft,
    PanRight,
    TiltUp,
    TiltDown,
    ZoomIn,
    ZoomOut,
    DollyIn,
    DollyOut,
    Tracking,
    Crane,
}

impl CameraMovement {
    pub const ALL: [CameraMovement; 11] = [
        CameraMovement::Static,
        CameraMovement::PanLeft,
        CameraMovement::PanRight,
        CameraMovement::TiltUp,
        CameraMovement::TiltDown,
        CameraMovement::ZoomIn,
        CameraMovement::ZoomOut,
        CameraMovement::DollyIn,
        CameraMovement::DollyOut,
        CameraMovement::Tracking,
        CameraMovement::Crane,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CameraMovement::Static => "static",
            CameraMovement::PanLeft => "pan-left",
            CameraMovement::PanRight => "pan-right",
            CameraMovement::TiltUp => "tilt-up",
            CameraMovement::TiltDown => "tilt-down",
            CameraMovement::ZoomIn => "zoom-in",
            CameraMovement::ZoomOut => "zoom-out",
            CameraMovement::DollyIn => "dolly-in",
            CameraMovement::DollyOut => "dolly-out",
            CameraMovement::Tracking => "tracking",
            CameraMovement::Crane => "crane",
        }
    }
}

/// Transition into the next shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionType {
    Cut,
    Fade,
    Dissolve,
    Wipe,
    Zoom,
    Slide,
}

impl TransitionType {
    pub const ALL: [TransitionType; 6] = [
        TransitionType::Cut,
        TransitionType::Fade,
        TransitionType::Dissolve,
        TransitionType::Wipe,
        TransitionType::Zoom,
        TransitionType::Slide,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TransitionType::Cut => "cut",
            TransitionType::Fade => "fade",
            TransitionType::Dissolve => "dissolve",
            TransitionType::Wipe => "wipe",
            TransitionType::Zoom => "zoom",
            TransitionType::Slide => "slide",
        }
    }
}

fn parse_choice<T: Copy>(s: &str, all: &[T], name: fn(T) -> &'static str) -> Result<T, String> {
    let wanted = s.trim().to_lowercase();
    all.iter().copied().find(|v| name(*v) == wanted).ok_or_else(|| {
        let choices: Vec<&str> = all.iter().map(|v| name(*v)).collect();
        format!("unknown value '{}', expected one of: {}", s, choices.join(", "))
    })
}

impl FromStr for ShotType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s, &Self::ALL, Self::as_str)
    }
}

impl FromStr for CameraMovement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s, &Self::ALL, Self::as_str)
    }
}

impl FromStr for TransitionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s, &Self::ALL, Self::as_str)
    }
}

impl fmt::Display for ShotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CameraMovement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TransitionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One shot in a storyboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryboardFrame {
    pub id: String,
    pub scene_number: u32,
    /// Position in the storyboard, 1-based.
    pub frame_number: u32,
    pub title: String,
    pub description: String,
    pub shot_type: ShotType,
    pub camera_movement: CameraMovement,
    /// Length of the shot in seconds.
    pub duration: u32,
    pub transition: TransitionType,
    pub dialogue: String,
    pub sound_effects: String,
    pub notes: String,
    pub image_prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_image_url: Option<String>,
}

impl StoryboardFrame {
    /// Shortest shot the input controls accept, in seconds.
    pub const MIN_DURATION: u32 = 1;

    /// Longest shot the input controls accept, in seconds.
    pub const MAX_DURATION: u32 = 60;

    /// Create a blank frame with a fresh id.
    ///
    /// Defaults match the "add frame" form: scene 1, a three second medium
    /// shot on a static camera, hard cut out.
    pub fn new() -> Self {
        Self {
            id: new_id(),
            scene_number: 1,
            frame_number: 1,
            title: String::new(),
            description: String::new(),
            shot_type: ShotType::Medium,
            camera_movement: CameraMovement::Static,
            duration: 3,
            transition: TransitionType::Cut,
            dialogue: String::new(),
            sound_effects: String::new(),
            notes: String::new(),
            image_prompt: String::new(),
            image_url: None,
            reference_image_url: None,
        }
    }

    /// Build an image-generation prompt from the frame's description,
    /// framing and notes.
    pub fn generate_image_prompt(&self) -> String {
        let parts = [
            self.description.trim(),
            self.shot_type.label(),
            self.notes.trim(),
            "cinematic lighting",
            "high quality",
            "film grain",
        ];

        parts
            .iter()
            .filter(|p| !p.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for StoryboardFrame {
    fn default() -> Self {
        Self::new()
    }
}
