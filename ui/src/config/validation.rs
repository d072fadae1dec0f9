/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid logging level: {configured}")]
    LogLevel { configured: String },
    #[error("skin_file is set but empty")]
    EmptySkinPath,
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::LogLevel { configured } => {
                format!(
                    "Unknown logging level!\n\n\
                    Your configured value: {configured}\n\
                    Valid values: off, error, warn, info, debug, trace\n\n\
                    Falling back to info."
                )
            }
            ConfigValidationError::EmptySkinPath => "Skin file path is empty!\n\n\
                Remove skin_file from your settings to use the default location."
                .to_string(),
        }
    }
}
