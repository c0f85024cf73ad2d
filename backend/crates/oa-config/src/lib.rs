mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

const CONFIG_DIR_ENV: &str = "OA_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".oa";
const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
