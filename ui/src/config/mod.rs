use crate::error::SkinResult;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

pub mod app;
pub mod validation;

pub use app::AppConfig;
pub use validation::ConfigValidationError;

/// Prefix of environment variables overriding settings, e.g.
/// `TUISKIN__LOGGING__LEVEL=debug`. The prefix is followed by the same `__`
/// separator used between nested keys.
pub const ENV_PREFIX: &str = "TUISKIN";

/// Load settings from an optional file, then from the environment.
///
/// A missing file is not an error: every setting has a default.
pub fn load_config(path: Option<&Path>) -> SkinResult<AppConfig> {
    load_config_with(path, environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator("__")
}

fn load_config_with(path: Option<&Path>, environment: Environment) -> SkinResult<AppConfig> {
    let mut builder = Config::builder();

    if let Some(path) = path {
        log::debug!("Loading settings from {}", path.display());
        builder = builder.add_source(File::from(path).required(false));
    }

    // environment entries override file values when present
    let config = builder
        .add_source(environment)
        .build()?;

    let app_config = config.try_deserialize::<AppConfig>()?;

    if let Err(errors) = app_config.validate() {
        for error in &errors {
            log::warn!("{}", error.user_message());
        }
    }

    Ok(app_config)
}

/// Logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn new(level: Option<String>, file: Option<String>) -> Self {
        Self { level, file }
    }

    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}
