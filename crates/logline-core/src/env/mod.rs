//! Environment variable lookup
//!
//! The leveled logger falls back to an environment variable for its
//! destination path. Lookups go through the `Environment` trait so tests
//! and embedders can supply values without touching the process
//! environment.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

/// Read-only view of environment variables
pub trait Environment: Send + Sync {
    /// Value of `key`; empty values are reported as unset
    fn get(&self, key: &str) -> Option<String>;
}

/// Type alias for an Arc-wrapped environment
pub type SharedEnvironment = Arc<dyn Environment>;

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl Environment for ProcessEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|value| !value.is_empty())
    }
}

/// In-memory environment for testing
#[derive(Debug, Default)]
pub struct MemoryEnvironment {
    vars: RwLock<HashMap<String, String>>,
}

impl MemoryEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an environment with initial values
    pub fn with_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: RwLock::new(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        }
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.write().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.vars.write().remove(key);
    }
}

impl Environment for MemoryEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.read().get(key).filter(|value| !value.is_empty()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_environment_reads_vars() {
        std::env::set_var("LOGLINE_TEST_ENV_READ_4821", "/tmp/app.log");
        let env = ProcessEnvironment::new();
        assert_eq!(env.get("LOGLINE_TEST_ENV_READ_4821"), Some("/tmp/app.log".to_string()));
        std::env::remove_var("LOGLINE_TEST_ENV_READ_4821");
        assert_eq!(env.get("LOGLINE_TEST_ENV_READ_4821"), None);
    }

    #[test]
    fn test_process_environment_empty_is_unset() {
        std::env::set_var("LOGLINE_TEST_ENV_EMPTY_4821", "");
        assert_eq!(ProcessEnvironment::new().get("LOGLINE_TEST_ENV_EMPTY_4821"), None);
        std::env::remove_var("LOGLINE_TEST_ENV_EMPTY_4821");
    }

    #[test]
    fn test_memory_environment() {
        let env = MemoryEnvironment::with_vars([("LogPath", "/tmp/a.log"), ("Blank", "")]);
        assert_eq!(env.get("LogPath"), Some("/tmp/a.log".to_string()));
        assert_eq!(env.get("Blank"), None);

        env.set("LogPath", "/tmp/b.log");
        assert_eq!(env.get("LogPath"), Some("/tmp/b.log".to_string()));

        env.remove("LogPath");
        assert_eq!(env.get("LogPath"), None);
    }
}
