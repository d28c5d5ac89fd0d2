use std::path::{Path, PathBuf};

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::calendar_type::DEFAULT_CALENDAR_COLOR;
use crate::create_flow::CreateFlowMode;
use crate::navigation::ViewMode;

pub const APP_DIR: &str = "calshell";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub create: CreateConfig,
    pub calendars: Vec<CalendarSeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub first_day_of_week: String,
    pub default_view: ViewMode,
    pub theme: String,
    pub default_event_hour: u32,
    pub default_event_minutes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct CreateConfig {
    pub mode: CreateFlowMode,
}

/// A calendar created at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarSeed {
    pub name: String,
    #[serde(default = "default_calendar_color")]
    pub color: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_calendar_color() -> String {
    DEFAULT_CALENDAR_COLOR.to_string()
}

fn default_visible() -> bool {
    true
}

impl UiConfig {
    /// Unrecognised day names fall back to Sunday.
    pub fn week_start(&self) -> Weekday {
        self.first_day_of_week.parse().unwrap_or(Weekday::Sun)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            first_day_of_week: "Sunday".to_string(),
            default_view: ViewMode::Week,
            theme: "default".to_string(),
            default_event_hour: 9,
            default_event_minutes: 60,
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    pub fn load_or_create() -> Result<Self, ConfigError> {
        Self::load_or_create_at(&Self::config_path())
    }

    pub fn load_or_create_at(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            tracing::info!("Wrote default config to {}", path.display());
            Ok(config)
        }
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            create: CreateConfig::default(),
            calendars: vec![CalendarSeed {
                name: "Personal".to_string(),
                color: default_calendar_color(),
                visible: true,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_uses_week_view_and_chooser() {
        let config = Config::default();

        assert_eq!(config.ui.default_view, ViewMode::Week);
        assert_eq!(config.create.mode, CreateFlowMode::Chooser);
    }

    #[test]
    fn default_config_starts_weeks_on_sunday() {
        assert_eq!(Config::default().ui.week_start(), Weekday::Sun);
    }

    #[test]
    fn parse_valid_toml_config() {
        let toml_content = r##"
            [ui]
            first_day_of_week = "Monday"
            default_view = "month"
            theme = "nord"
            default_event_hour = 10
            default_event_minutes = 30

            [create]
            mode = "direct"

            [[calendars]]
            name = "Work"
            color = "#e67c73"

            [[calendars]]
            name = "Birthdays"
            visible = false
        "##;

        let config = Config::from_toml(toml_content).unwrap();

        assert_eq!(config.ui.week_start(), Weekday::Mon);
        assert_eq!(config.ui.default_view, ViewMode::Month);
        assert_eq!(config.ui.default_event_hour, 10);
        assert_eq!(config.create.mode, CreateFlowMode::Direct);
        assert_eq!(config.calendars.len(), 2);
        assert_eq!(config.calendars[1].color, DEFAULT_CALENDAR_COLOR);
        assert!(!config.calendars[1].visible);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = Config::from_toml("[ui]\ntheme = \"gruvbox\"\n").unwrap();

        assert_eq!(config.ui.theme, "gruvbox");
        assert_eq!(config.ui.default_event_minutes, 60);
        assert_eq!(config.calendars, Config::default().calendars);
    }

    #[test]
    fn unknown_weekday_falls_back_to_sunday() {
        let config = Config::from_toml("[ui]\nfirst_day_of_week = \"Someday\"\n").unwrap();

        assert_eq!(config.ui.week_start(), Weekday::Sun);
    }

    #[test]
    fn parse_invalid_toml_returns_error() {
        let invalid_toml = "this is not valid toml";
        let result = Config::from_toml(invalid_toml);
        assert!(result.is_err());
    }

    #[test]
    fn load_or_create_writes_defaults_then_reads_them_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let created = Config::load_or_create_at(&path).unwrap();
        assert!(path.exists());

        let loaded = Config::load_or_create_at(&path).unwrap();
        assert_eq!(loaded, created);
    }
}
