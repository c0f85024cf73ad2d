use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOG_COLORED, LogLevel};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Colored level names on the terminal (ignored for file output)
    pub colored: bool,
    /// Log file relative to the config directory; stderr when unset
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            colored: DEFAULT_LOG_COLORED,
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(file) = &self.file {
            if file.trim().is_empty() {
                return Err(ConfigError::logging("logging.file cannot be empty"));
            }
            if Path::new(file).is_absolute() || file.contains("..") {
                return Err(ConfigError::logging(
                    "logging.file must be relative and cannot contain '..'",
                ));
            }
        }
        Ok(())
    }
}
