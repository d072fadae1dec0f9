use crate::theme::validation::ThemeValidationError;
use std::path::PathBuf;

/// Errors surfaced by the skin subsystem.
///
/// Only loading can fail. Color resolution never errors: unreadable tokens
/// degrade to a fallback color instead, see [`crate::theme::ConcreteColor`].
///
/// # Error Categories
///
/// ## Reading
/// - [`Io`] - the skin file could not be read
/// - [`Validation`] - the skin path was rejected before reading
///
/// ## Decoding
/// - [`Yaml`], [`Toml`] - malformed document or a field of the wrong type
/// - [`Encoding`] - TOML input that is not UTF-8
///
/// ## Configuration
/// - [`Config`] - settings could not be loaded or deserialized
///
/// A failed load always leaves the active theme untouched.
///
/// [`Io`]: SkinError::Io
/// [`Validation`]: SkinError::Validation
/// [`Yaml`]: SkinError::Yaml
/// [`Toml`]: SkinError::Toml
/// [`Encoding`]: SkinError::Encoding
/// [`Config`]: SkinError::Config
#[derive(Debug, thiserror::Error)]
pub enum SkinError {
    #[error("Failed to read skin file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode YAML skin: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to decode TOML skin: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Skin is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("Invalid skin: {0}")]
    Validation(#[from] ThemeValidationError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl SkinError {
    /// Whether the error comes from a malformed definition rather than from
    /// the environment.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            SkinError::Yaml(_) | SkinError::Toml(_) | SkinError::Encoding(_)
        )
    }

    pub fn user_message(&self) -> String {
        match self {
            SkinError::Io { path, source } => format!(
                "Could not read skin file: '{}'\n\n\
                Reason: {source}\n\n\
                The current skin stays active.",
                path.display()
            ),
            SkinError::Yaml(_) | SkinError::Toml(_) | SkinError::Encoding(_) => format!(
                "Skin definition is malformed!\n\n\
                {self}\n\n\
                Please fix the skin file. The current skin stays active."
            ),
            SkinError::Validation(error) => error.user_message(),
            SkinError::Config(error) => format!(
                "Configuration problem: {error}\n\n\
                Please check your settings file and environment variables."
            ),
        }
    }
}

/// Result type alias for skin operations
pub type SkinResult<T> = Result<T, SkinError>;
