//! # tuiskin
//!
//! Skin subsystem for terminal user interfaces: a fixed tree of style groups
//! for every UI region, a built-in default skin, loading of partial user
//! skins, color token resolution and synchronous change notification.
//!
//! ## Modules
//!
//! - [`theme`] - Style tree, defaults, loading and listeners
//! - [`config`] - Settings (skin location, logging)
//! - [`error`] - Error types
//! - [`logger`] - Logging setup
//! - [`validation`] - Validator trait

pub mod config;
pub mod error;
pub mod logger;
pub mod theme;
pub mod validation;

pub use error::{SkinError, SkinResult};
pub use theme::{Theme, ThemeListener};
pub use validation::Validator;
