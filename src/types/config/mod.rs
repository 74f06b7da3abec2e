//! Persisted mapping settings, stored as mapping.toml.

use crate::mapping::{InfoConfig, InfoKind, TemplateIdFormat};
use crate::types::Language;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Settings for the mapping layer, persisted as mapping.toml.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingSettings {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl MappingSettings {
    /// Returns the settings file path within the given config directory.
    pub fn path(config_dir: &Path) -> std::path::PathBuf {
        config_dir.join("mapping.toml")
    }

    /// Loads settings from a TOML file. Returns default settings if the file
    /// doesn't exist.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "settings file missing, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Saves settings to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates settings values and returns the list of validation errors.
    /// Returns an empty vec if the settings are valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.database.name.trim().is_empty() {
            errors.push("database name must not be empty".to_string());
        }

        if Language::try_new(self.defaults.language.clone()).is_err() {
            errors.push("default language must be a non-empty culture tag".to_string());
        }

        errors
    }
}

/// The named content database mappings resolve against.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_name")]
    pub name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            name: default_database_name(),
        }
    }
}

fn default_database_name() -> String {
    "master".to_string()
}

/// Defaults applied when building mapper configurations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub template_id_format: TemplateIdFormat,
}

impl DefaultsConfig {
    /// Builds a mapper configuration for `kind` seeded with the configured
    /// template-id format.
    pub fn info_config(&self, kind: InfoKind) -> InfoConfig {
        InfoConfig::new(kind).with_template_id_format(self.template_id_format)
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            template_id_format: TemplateIdFormat::default(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

/// Errors that can occur when loading or saving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
