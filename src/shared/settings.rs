use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::info;
use ts_rs::TS;

use crate::core::features::measurement_converter::Category;
use crate::shared::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "settings.ts")]
pub struct ConverterSettings {
    /// Category a new session opens in
    pub default_category: Category,
    /// Tracing filter directive, overridden by `RUST_LOG`
    pub log_level: String,
    pub log_json: bool,
}

impl Default for ConverterSettings {
    fn default() -> Self {
        Self {
            default_category: Category::default(),
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl ConverterSettings {
    pub fn get_settings_path() -> AppResult<PathBuf> {
        ProjectDirs::from("com", "measurement-converter", "measurement-converter")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| AppError::Config("Failed to determine config directory".to_string()))
    }

    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::get_settings_path()?)
    }

    /// Load settings from `path`, writing defaults there if the file is missing
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            let settings = Self::default();
            settings.save_to(path)?;
            info!(path = %path.display(), "wrote default settings");
            return Ok(settings);
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse settings: {}", e)))
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&Self::get_settings_path()?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::Io(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;

        fs::write(path, content)
            .map_err(|e| AppError::Io(format!("Failed to write settings file: {}", e)))?;
        info!(path = %path.display(), default_category = %self.default_category, "settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = ConverterSettings::load_from(&path).unwrap();
        assert_eq!(settings, ConverterSettings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = ConverterSettings {
            default_category: Category::Weight,
            log_level: "measurement_converter=debug".to_string(),
            log_json: true,
        };
        settings.save_to(&path).unwrap();

        assert_eq!(ConverterSettings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_unknown_fields_and_missing_keys_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"theme":"dark"}"#).unwrap();

        let settings = ConverterSettings::load_from(&path).unwrap();
        assert_eq!(settings.default_category, Category::Temperature);
    }

    #[test]
    fn test_category_name_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"default_category":"length"}"#).unwrap();

        let settings = ConverterSettings::load_from(&path).unwrap();
        assert_eq!(settings.default_category, Category::Length);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"default_category":"Volume"}"#).unwrap();

        let err = ConverterSettings::load_from(&path).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
