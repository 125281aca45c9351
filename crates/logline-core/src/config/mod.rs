//! Logger configuration
//!
//! - `LoggerConfig`: named settings with documented defaults
//! - `FileConfigProvider`: YAML file-based (user/workspace level)

mod traits;
mod settings;
mod file;

pub use traits::{ConfigError, ConfigResult};
pub use settings::{LoggerConfig, DEFAULT_PATH_ENV_VAR, DEFAULT_TIMESTAMP_FORMAT};
pub use file::{FileConfigProvider, ConfigLevel};
