//! File-based configuration (YAML)
//!
//! Supports user-level (~/.config/logline/config.yaml) and workspace-level
//! (.config/logline/config.yaml) config.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use super::settings::LoggerConfig;
use super::traits::ConfigResult;

/// Config level (user or workspace)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLevel {
    /// User-level config (~/.config/logline/config.yaml)
    User,
    /// Workspace-level config (.config/logline/config.yaml in workspace root)
    Workspace,
}

impl ConfigLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigLevel::User => "user",
            ConfigLevel::Workspace => "workspace",
        }
    }
}

/// Loads and saves `LoggerConfig` as YAML
///
/// A missing file reads as the default configuration. Loads are cached
/// until `reload()` or `save()`.
///
/// # Example
///
/// ```no_run
/// use logline_core::config::FileConfigProvider;
///
/// let config = FileConfigProvider::user().load().unwrap_or_default();
/// let scope = config.preference_scope();
/// ```
pub struct FileConfigProvider {
    path: PathBuf,
    level: ConfigLevel,
    cache: RwLock<Option<LoggerConfig>>,
}

impl FileConfigProvider {
    pub fn new(path: impl Into<PathBuf>, level: ConfigLevel) -> Self {
        Self {
            path: path.into(),
            level,
            cache: RwLock::new(None),
        }
    }

    /// User-level config provider (~/.config/logline/config.yaml)
    pub fn user() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join("logline").join("config.yaml"), ConfigLevel::User)
    }

    /// Workspace-level config provider (.config/logline/config.yaml)
    pub fn workspace(workspace_root: impl AsRef<Path>) -> Self {
        let path = workspace_root.as_ref().join(".config").join("logline").join("config.yaml");
        Self::new(path, ConfigLevel::Workspace)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn level(&self) -> ConfigLevel {
        self.level
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read(&self) -> ConfigResult<LoggerConfig> {
        if !self.path.exists() {
            return Ok(LoggerConfig::default());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(LoggerConfig::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Cached config, reading the file on first use
    pub fn load(&self) -> ConfigResult<LoggerConfig> {
        if let Some(config) = self.cache.read().as_ref() {
            return Ok(config.clone());
        }
        self.reload()
    }

    /// Re-read the file, replacing the cache
    pub fn reload(&self) -> ConfigResult<LoggerConfig> {
        let config = self.read()?;
        *self.cache.write() = Some(config.clone());
        Ok(config)
    }

    /// Write the config, creating parent directories as needed
    pub fn save(&self, config: &LoggerConfig) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_yaml::to_string(config)?)?;
        *self.cache.write() = Some(config.clone());
        Ok(())
    }
}

impl std::fmt::Debug for FileConfigProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileConfigProvider")
            .field("path", &self.path)
            .field("level", &self.level)
            .field("exists", &self.exists())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_reads_defaults() {
        let dir = tempdir().unwrap();
        let provider = FileConfigProvider::new(dir.path().join("config.yaml"), ConfigLevel::User);
        assert!(!provider.exists());
        assert_eq!(provider.load().unwrap(), LoggerConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let provider = FileConfigProvider::workspace(dir.path());
        assert_eq!(provider.level(), ConfigLevel::Workspace);

        let config = LoggerConfig::new()
            .with_log_path("/var/log/deploy.log")
            .with_default_component("Deploy")
            .with_preference("VerbosePreference", "Continue");
        provider.save(&config).unwrap();
        assert!(provider.exists());

        let content = fs::read_to_string(provider.path()).unwrap();
        assert!(content.contains("default_component: Deploy"));
        assert!(content.contains("VerbosePreference"));

        let fresh = FileConfigProvider::workspace(dir.path());
        assert_eq!(fresh.load().unwrap(), config);
    }

    #[test]
    fn test_cache_until_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "default_component: First\n").unwrap();

        let provider = FileConfigProvider::new(&path, ConfigLevel::User);
        assert_eq!(provider.load().unwrap().default_component, "First");

        fs::write(&path, "default_component: Second\n").unwrap();
        assert_eq!(provider.load().unwrap().default_component, "First");
        assert_eq!(provider.reload().unwrap().default_component, "Second");
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "log_path: [unterminated\n").unwrap();

        let provider = FileConfigProvider::new(&path, ConfigLevel::User);
        assert!(matches!(provider.load(), Err(ConfigError::Yaml(_))));
    }
}
