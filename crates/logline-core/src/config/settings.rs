//! Logger settings

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::env::Environment;
use crate::preferences::PreferenceScope;

/// Environment variable consulted when no log path is configured
pub const DEFAULT_PATH_ENV_VAR: &str = "LogPath";

/// Prefix timestamp format, local time
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Settings shared by both loggers
///
/// Every field has a default, so a partial YAML file is valid:
///
/// ```yaml
/// log_path: /var/log/deploy.log
/// default_component: Deploy
/// preferences:
///   VerbosePreference: Continue
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Leveled log destination used when an entry names none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,
    /// Environment variable holding the fallback destination
    pub path_env_var: String,
    /// chrono format string for the leveled prefix timestamp
    pub timestamp_format: String,
    /// Component label for trace records that carry none
    pub default_component: String,
    /// Seed values for the process-wide preference scope
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub preferences: BTreeMap<String, Value>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            path_env_var: DEFAULT_PATH_ENV_VAR.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            default_component: String::new(),
            preferences: BTreeMap::new(),
        }
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    pub fn with_path_env_var(mut self, name: impl Into<String>) -> Self {
        self.path_env_var = name.into();
        self
    }

    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    pub fn with_default_component(mut self, component: impl Into<String>) -> Self {
        self.default_component = component.into();
        self
    }

    pub fn with_preference(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.preferences.insert(name.into(), value.into());
        self
    }

    /// Resolve the leveled log destination
    ///
    /// Order: `explicit`, then `log_path`, then the `path_env_var`
    /// variable. Empty paths count as unset. `None` means the file write
    /// is skipped.
    pub fn resolve_log_path(&self, explicit: Option<&Path>, env: &dyn Environment) -> Option<PathBuf> {
        explicit
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .or_else(|| self.log_path.clone().filter(|p| !p.as_os_str().is_empty()))
            .or_else(|| env.get(&self.path_env_var).map(PathBuf::from))
    }

    /// Build the process-start preference scope
    ///
    /// Starts from the session defaults and applies the configured values.
    pub fn preference_scope(&self) -> PreferenceScope {
        let mut scope = PreferenceScope::session_defaults();
        for (name, value) in &self.preferences {
            scope.set(name.clone(), value.clone());
        }
        scope
    }
}
