//! Configuration module

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Directory under the home directory holding the database and config
pub const APP_DIR: &str = ".mem";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Database file (default: ~/.mem/memories.db)
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Rows shown by `--list` when no count is given
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            list_limit: default_list_limit(),
        }
    }
}

fn default_list_limit() -> usize {
    10
}

impl Config {
    /// Load config from an explicit file, or from ~/.mem/config.toml
    ///
    /// An explicit path must exist. The global file is optional; without it
    /// the defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        if let Some(global) = Self::global_config_path() {
            if global.exists() {
                return Self::load_from(&global);
            }
        }

        Ok(Self::default())
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Get global config path (~/.mem/config.toml)
    pub fn global_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(APP_DIR).join("config.toml"))
    }

    /// Get database path with priority:
    /// 1. `--db` flag or MEM_DATABASE env var
    /// 2. `storage.path` from the config file
    /// 3. Global ~/.mem/memories.db
    /// 4. ./.mem/memories.db when no home directory is known
    pub fn database_path(&self, override_path: Option<&Path>) -> PathBuf {
        if let Some(path) = override_path {
            return path.to_path_buf();
        }

        if let Some(path) = &self.storage.path {
            return path.clone();
        }

        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("memories.db")
    }
}

fn home_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.storage.path.is_none());
        assert_eq!(config.display.list_limit, 10);
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[storage]\npath = \"/tmp/notes.db\"\n\n[display]\nlist_limit = 3\n",
        )?;

        let config = Config::load(Some(&path))?;

        assert_eq!(config.storage.path, Some(PathBuf::from("/tmp/notes.db")));
        assert_eq!(config.display.list_limit, 3);
        Ok(())
    }

    #[test]
    fn test_partial_file_uses_defaults() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\n")?;

        let config = Config::load(Some(&path))?;

        assert!(config.storage.path.is_none());
        assert_eq!(config.display.list_limit, 10);
        Ok(())
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let result = Config::load(Some(Path::new("/definitely/not/here.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_database_path_priority() {
        let mut config = Config::default();
        config.storage.path = Some(PathBuf::from("/from/config.db"));

        let flag = PathBuf::from("/from/flag.db");
        assert_eq!(config.database_path(Some(&flag)), flag);
        assert_eq!(
            config.database_path(None),
            PathBuf::from("/from/config.db")
        );

        config.storage.path = None;
        let fallback = config.database_path(None);
        assert!(fallback.ends_with(".mem/memories.db"));
    }
}
