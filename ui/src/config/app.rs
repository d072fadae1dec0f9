use super::{LoggingConfig, validation::ConfigValidationError};
use serde::Deserialize;
use std::path::PathBuf;

/// Name of the directory holding the skin under the user config dir.
pub const APP_DIR: &str = "tuiskin";
/// File name of the default skin definition.
pub const SKIN_FILE_NAME: &str = "skin.yml";

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Settings of the skin subsystem
#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    skin_file: Option<PathBuf>,
    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    pub fn new(skin_file: Option<PathBuf>, logging: LoggingConfig) -> Self {
        Self { skin_file, logging }
    }

    /// Validate the configuration values
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        let level = self.logging.level().to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::LogLevel {
                configured: self.logging.level().to_string(),
            });
        }

        if let Some(path) = &self.skin_file {
            if path.as_os_str().is_empty() {
                errors.push(ConfigValidationError::EmptySkinPath);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Location of the skin definition; `<config dir>/tuiskin/skin.yml`
    /// unless configured.
    pub fn skin_file(&self) -> PathBuf {
        self.skin_file.clone().unwrap_or_else(default_skin_file)
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}

fn default_skin_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(SKIN_FILE_NAME)
}
