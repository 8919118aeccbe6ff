/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Plugin configuration.
//!
//! Read from `credit.toml`:
//!
//! ```toml
//! enabled = true
//! show_credit_roles = true
//! resources_dir = "resources"
//! default_locale = "en"
//! supported_locales = ["en", "de", "fr"]
//!
//! [contexts.journal-a]
//! show_credit_roles = false
//! ```

use crate::error::ConfigError;
use credit_core::{KnownLocales, VocabularyLoader, DEFAULT_LOCALE};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "credit.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditConfig {
    /// Whether the plugin subscribes to any hook at all.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Site-wide `showCreditRoles` setting.
    #[serde(default = "default_true")]
    pub show_credit_roles: bool,

    #[serde(default = "default_resources_dir")]
    pub resources_dir: PathBuf,

    #[serde(default = "default_locale")]
    pub default_locale: String,

    #[serde(default = "default_supported_locales")]
    pub supported_locales: Vec<String>,

    /// Base URL the stylesheet link is built on.
    #[serde(default)]
    pub base_url: String,

    /// Per-journal overrides, keyed by context id.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub contexts: IndexMap<String, ContextSettings>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContextSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_credit_roles: Option<bool>,
}

impl Default for CreditConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            show_credit_roles: true,
            resources_dir: default_resources_dir(),
            default_locale: default_locale(),
            supported_locales: default_supported_locales(),
            base_url: String::new(),
            contexts: IndexMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_resources_dir() -> PathBuf {
    PathBuf::from("resources")
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_supported_locales() -> Vec<String> {
    ["en", "de", "es", "fr", "pt-BR"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl CreditConfig {
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load a config file. A relative `resources_dir` is resolved against
    /// the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&content, path)?;
        if config.resources_dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.resources_dir = parent.join(&config.resources_dir);
            }
        }
        Ok(config)
    }

    /// Load `credit.toml` from the working directory, if there is one.
    pub fn load_from_project() -> Result<Option<Self>, ConfigError> {
        let path = Path::new(CONFIG_FILE_NAME);
        if path.exists() {
            return Ok(Some(Self::load(path)?));
        }
        Ok(None)
    }

    /// The `showCreditRoles` setting for a journal, or the site-wide value.
    pub fn show_credit_roles(&self, context_id: Option<&str>) -> bool {
        context_id
            .and_then(|id| self.contexts.get(id))
            .and_then(|settings| settings.show_credit_roles)
            .unwrap_or(self.show_credit_roles)
    }

    pub fn known_locales(&self) -> KnownLocales {
        KnownLocales::new(&self.supported_locales, &self.default_locale)
    }

    pub fn loader(&self) -> VocabularyLoader {
        VocabularyLoader::new(&self.resources_dir, self.known_locales())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = CreditConfig::from_toml_str("", Path::new("credit.toml")).unwrap();
        assert!(config.enabled);
        assert!(config.show_credit_roles);
        assert_eq!(config.default_locale, "en");
        assert_eq!(config.resources_dir, PathBuf::from("resources"));
        assert!(config.known_locales().is_valid("pt_BR"));
    }

    #[test]
    fn context_overrides_site_setting() {
        let config = CreditConfig::from_toml_str(
            r#"
            show_credit_roles = true

            [contexts.quiet]
            show_credit_roles = false

            [contexts.loud]
            "#,
            Path::new("credit.toml"),
        )
        .unwrap();
        assert!(config.show_credit_roles(None));
        assert!(!config.show_credit_roles(Some("quiet")));
        assert!(config.show_credit_roles(Some("loud")));
        assert!(config.show_credit_roles(Some("unknown")));
    }

    #[test]
    fn relative_resources_dir_follows_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "resources_dir = \"data\"\nsupported_locales = [\"de\"]\n").unwrap();

        let config = CreditConfig::load(&path).unwrap();
        assert_eq!(config.resources_dir, dir.path().join("data"));
        assert_eq!(config.known_locales().iter().collect::<Vec<_>>(), ["en", "de"]);
    }

    #[test]
    fn syntax_errors_name_the_file() {
        let err = CreditConfig::from_toml_str("enabled = ", Path::new("credit.toml")).unwrap_err();
        assert!(err.to_string().contains("credit.toml"));
    }
}
