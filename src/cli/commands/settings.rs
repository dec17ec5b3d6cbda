//! Settings command implementation.
//!
//! The `storyplan settings` command shows and stores API keys for outside
//! generation services. Keys are stored only; nothing uses them yet.

use crate::cli::args::SettingsSubcommand;
use crate::config::DataPaths;
use crate::error::Result;
use crate::settings::{mask_secret, Settings, KEY_SLOTS};
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The settings command implementation.
pub struct SettingsCommand {
    paths: DataPaths,
    command: SettingsSubcommand,
}

impl SettingsCommand {
    /// Create a new settings command.
    pub fn new(paths: DataPaths, command: SettingsSubcommand) -> Self {
        Self { paths, command }
    }
}

impl Command for SettingsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let path = self.paths.settings_file();
        let mut settings = Settings::load(&path)?;

        match &self.command {
            SettingsSubcommand::Show => {
                ui.show_header("Settings");
                let mut table = Table::new(vec!["Key", "Service", "Used for", "Value"]);
                for slot in KEY_SLOTS {
                    let value = mask_secret(settings.api_key(slot.key)?);
                    let value = if value.is_empty() {
                        "(not set)".to_string()
                    } else {
                        value
                    };
                    table.add_row(vec![slot.key, slot.service, slot.purpose, &value]);
                }
                ui.message(&table.render());
                let location = ui
                    .theme()
                    .dim
                    .apply_to(format!("  Stored in {}", path.display()))
                    .to_string();
                ui.message(&location);
            }
            SettingsSubcommand::Set { key, value } => {
                settings.set_api_key(key, value.trim())?;
                settings.save(&path)?;
                if value.trim().is_empty() {
                    ui.success(&format!("Cleared {}", key));
                } else {
                    ui.success(&format!("Saved {}", key));
                }
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoryplanError;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn set(paths: &DataPaths, key: &str, value: &str) -> Result<CommandResult> {
        SettingsCommand::new(
            paths.clone(),
            SettingsSubcommand::Set {
                key: key.to_string(),
                value: value.to_string(),
            },
        )
        .execute(&mut MockUI::new())
    }

    #[test]
    fn set_then_show_masks_value() {
        let temp = TempDir::new().unwrap();
        let paths = DataPaths::new(temp.path());
        set(&paths, "openai", "sk-secret-9876").unwrap();

        let mut ui = MockUI::new();
        SettingsCommand::new(paths.clone(), SettingsSubcommand::Show)
            .execute(&mut ui)
            .unwrap();

        let table = &ui.messages()[0];
        assert!(table.contains("9876"));
        assert!(!table.contains("sk-secret"));
        assert!(table.contains("(not set)"));

        let settings = Settings::load(&paths.settings_file()).unwrap();
        assert_eq!(settings.api_key("openai").unwrap(), "sk-secret-9876");
    }

    #[test]
    fn unknown_key_is_rejected() {
        let temp = TempDir::new().unwrap();
        let paths = DataPaths::new(temp.path());

        assert!(matches!(
            set(&paths, "midjourney", "x"),
            Err(StoryplanError::UnknownSetting { .. })
        ));
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn settings_do_not_touch_projects() {
        let temp = TempDir::new().unwrap();
        let paths = DataPaths::new(temp.path());
        set(&paths, "banana", "bn-1").unwrap();
        assert!(!paths.state_file().exists());
    }
}
