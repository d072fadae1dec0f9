use crate::error::{SkinError, SkinResult};
use crate::theme::types::StylePatch;
use crate::theme::validation::SkinPathValidator;
use crate::validation::Validator;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Document formats a skin can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkinFormat {
    #[default]
    Yaml,
    Toml,
}

impl SkinFormat {
    /// Pick the format from a file extension. Anything but `.toml` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => SkinFormat::Toml,
            _ => SkinFormat::Yaml,
        }
    }
}

/// Top level of a skin document. The style tree sits under `skin`, or under
/// `k9s` for skins written for k9s.
#[derive(Debug, Default, Deserialize)]
struct SkinDocument {
    #[serde(default, alias = "k9s")]
    skin: Option<StylePatch>,
}

/// Decode a skin definition into a patch. Nothing is applied here, so a
/// failure leaves every theme untouched.
pub fn decode(bytes: &[u8], format: SkinFormat) -> SkinResult<StylePatch> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(StylePatch::default());
    }

    let document: SkinDocument = match format {
        SkinFormat::Yaml => serde_yaml::from_slice(bytes)?,
        SkinFormat::Toml => toml::from_str(std::str::from_utf8(bytes)?)?,
    };

    Ok(document.skin.unwrap_or_default())
}

/// Read a skin file after checking its path and extension.
pub fn read_skin_file(path: &Path) -> SkinResult<Vec<u8>> {
    SkinPathValidator.validate(path)?;

    fs::read(path).map_err(|source| SkinError::Io {
        path: path.to_path_buf(),
        source,
    })
}
