//! Local tool settings.
//!
//! API keys for outside generation services are kept here so they can be
//! filled in ahead of time. Nothing in storyplan sends them anywhere.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, StoryplanError};

/// A known API-key slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySlot {
    pub key: &'static str,
    pub service: &'static str,
    pub purpose: &'static str,
}

/// API-key slots in display order.
pub const KEY_SLOTS: [KeySlot; 3] = [
    KeySlot {
        key: "openai",
        service: "ChatGPT / OpenAI",
        purpose: "script and shot-prompt writing",
    },
    KeySlot {
        key: "banana",
        service: "Banana",
        purpose: "scene image generation",
    },
    KeySlot {
        key: "jimeng",
        service: "Jimeng Seedance",
        purpose: "video clip generation",
    },
];

/// Saved settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api_keys: ApiKeys,
}

/// API keys by service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeys {
    #[serde(default)]
    pub openai: String,
    #[serde(default)]
    pub banana: String,
    #[serde(default)]
    pub jimeng: String,
}

impl Settings {
    /// Load settings from `path`, or defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let settings: Self =
            serde_yaml::from_str(&content).map_err(|e| StoryplanError::SettingsParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(settings)
    }

    /// Save settings to `path` using atomic write.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content = serde_yaml::to_string(self).map_err(|e| {
            StoryplanError::StateSerializeError {
                message: format!("Failed to serialize settings: {}", e),
            }
        })?;

        let temp_path = path.with_extension("yml.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    /// Get the API key stored under `key`.
    pub fn api_key(&self, key: &str) -> Result<&str> {
        let value = match key {
            "openai" => &self.api_keys.openai,
            "banana" => &self.api_keys.banana,
            "jimeng" => &self.api_keys.jimeng,
            _ => return Err(unknown(key)),
        };
        Ok(value)
    }

    /// Store an API key under `key`.
    pub fn set_api_key(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        let slot = match key {
            "openai" => &mut self.api_keys.openai,
            "banana" => &mut self.api_keys.banana,
            "jimeng" => &mut self.api_keys.jimeng,
            _ => return Err(unknown(key)),
        };
        *slot = value.into();
        Ok(())
    }
}

fn unknown(key: &str) -> StoryplanError {
    StoryplanError::UnknownSetting {
        key: key.to_string(),
    }
}

/// Mask a secret for display, keeping only the last four characters.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    match chars.len() {
        0 => String::new(),
        n if n <= 4 => "*".repeat(n),
        n => {
            let tail: String = chars[n - 4..].iter().collect();
            format!("{}{}", "*".repeat(n - 4), tail)
        }
    }
}
