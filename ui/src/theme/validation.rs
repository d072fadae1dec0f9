use crate::theme::types::Style;
use crate::validation::Validator;
use std::path::Path;

/// File extensions accepted for skin definitions.
pub const SKIN_EXTENSIONS: [&str; 3] = ["yml", "yaml", "toml"];

/// Validation errors specific to skin operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThemeValidationError {
    #[error("invalid skin path '{path}': {reason}")]
    InvalidSkinPath { path: String, reason: String },
    #[error("unsupported skin file '{path}' (expected one of: {expected})")]
    InvalidFileExtension { path: String, expected: String },
    #[error("unresolvable colors at: {}", .paths.join(", "))]
    UnresolvedColors { paths: Vec<String> },
}

impl ThemeValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ThemeValidationError::InvalidSkinPath { path, reason } => {
                format!(
                    "Invalid skin path: '{path}'\n\n\
                    Reason: {reason}\n\n\
                    Please ensure the path exists and is accessible."
                )
            }
            ThemeValidationError::InvalidFileExtension { path, expected } => {
                format!(
                    "Invalid file extension for: '{path}'\n\n\
                    Expected: {expected}\n\n\
                    Please ensure skin files have the correct extension."
                )
            }
            ThemeValidationError::UnresolvedColors { paths } => {
                format!(
                    "Some skin colors could not be understood:\n\n\
                    {}\n\n\
                    They fall back to the terminal default color.",
                    paths.join("\n")
                )
            }
        }
    }
}

/// Validator for skin file paths
pub struct SkinPathValidator;

impl Validator<Path> for SkinPathValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &Path) -> Result<(), Self::Error> {
        if !input.exists() {
            return Err(ThemeValidationError::InvalidSkinPath {
                path: input.display().to_string(),
                reason: "Path does not exist".to_string(),
            });
        }

        if !input.is_file() {
            return Err(ThemeValidationError::InvalidSkinPath {
                path: input.display().to_string(),
                reason: "Path is not a file".to_string(),
            });
        }

        let extension = input.extension().and_then(|s| s.to_str());
        if !extension.is_some_and(|ext| {
            SKIN_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        }) {
            return Err(ThemeValidationError::InvalidFileExtension {
                path: input.display().to_string(),
                expected: SKIN_EXTENSIONS.join(", "),
            });
        }

        Ok(())
    }
}

/// Checks that every color token of a style tree resolves to a real color.
pub struct ColorTokenValidator;

impl Validator<Style> for ColorTokenValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &Style) -> Result<(), Self::Error> {
        let paths: Vec<String> = input
            .color_tokens()
            .into_iter()
            .filter(|(_, color)| color.resolve().is_unknown())
            .map(|(path, color)| format!("{path}: '{color}'"))
            .collect();

        if paths.is_empty() {
            Ok(())
        } else {
            Err(ThemeValidationError::UnresolvedColors { paths })
        }
    }
}
