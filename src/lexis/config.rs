use crate::error::{LexisError, Result};
use crate::model::SortOption;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for lexis, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LexisConfig {
    /// Sort used by `word list` when none is given on the command line
    #[serde(default)]
    pub default_sort: SortOption,

    /// JSON glossary consulted by `word add --lookup`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glossary: Option<PathBuf>,
}

/// Keys accepted by `lexis config`.
pub const CONFIG_KEYS: &[&str] = &["default-sort", "glossary"];

impl LexisConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LexisError::Io)?;
        serde_json::from_str(&content)
            .map_err(|e| LexisError::Config(format!("{}: {}", config_path.display(), e)))
    }

    /// Like [`LexisConfig::load`], but a broken file falls back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> Self {
        Self::load(config_dir).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default configuration");
            Self::default()
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(LexisError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content).map_err(LexisError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "default-sort" => Ok(self.default_sort.to_string()),
            "glossary" => Ok(self
                .glossary
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "none".to_string())),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default-sort" => {
                self.default_sort = value.parse()?;
            }
            "glossary" => {
                let value = value.trim();
                self.glossary = if value.is_empty() || value == "none" {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> LexisError {
    LexisError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LexisConfig::default();
        assert_eq!(config.default_sort, SortOption::Newest);
        assert_eq!(config.glossary, None);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = LexisConfig::load(dir.path()).unwrap();
        assert_eq!(config, LexisConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();

        let mut config = LexisConfig::default();
        config.set("default-sort", "alphabetical").unwrap();
        config.set("glossary", "/tmp/glossary.json").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = LexisConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.default_sort, SortOption::Alphabetical);
        assert_eq!(loaded.get("glossary").unwrap(), "/tmp/glossary.json");
    }

    #[test]
    fn test_glossary_can_be_cleared() {
        let mut config = LexisConfig::default();
        config.set("glossary", "g.json").unwrap();
        config.set("glossary", "none").unwrap();
        assert_eq!(config.glossary, None);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{oops").unwrap();

        assert!(matches!(
            LexisConfig::load(dir.path()),
            Err(LexisError::Config(_))
        ));
        assert_eq!(LexisConfig::load_or_default(dir.path()), LexisConfig::default());
    }

    #[test]
    fn test_unknown_key() {
        let mut config = LexisConfig::default();
        assert!(config.set("colour", "red").is_err());
        assert!(config.get("colour").is_err());
    }

    #[test]
    fn test_sort_serializes_uppercase() {
        let config = LexisConfig {
            default_sort: SortOption::Oldest,
            glossary: None,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"default_sort":"OLDEST"}"#);
    }
}
