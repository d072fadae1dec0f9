//! # Skin Module
//!
//! Visual styles for every region of the terminal UI, the built-in default
//! skin, loading of user skins and change notification.
//!
//! ## Architecture
//!
//! - **[`Color`] / [`ColorSequence`]** - textual color tokens and palettes,
//!   resolved lazily into [`ConcreteColor`]s
//! - **[`Style`]** - the fixed tree of style groups (body, frame, info, views)
//! - **[`defaults`]** - pure builders for the default skin
//! - **[`loader`]** - decoding of YAML and TOML skin documents into patches
//! - **[`Theme`]** - owns the active style tree and its listeners
//! - **[`ThemeListener`]** - implemented by components that restyle on change
//!
//! ## Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use tuiskin::theme::{Theme, ThemeListener};
//!
//! struct StatusBar;
//!
//! impl ThemeListener for StatusBar {
//!     fn theme_changed(&self, theme: &Theme) {
//!         let fg = theme.fg_color().to_term();
//!         // schedule a repaint with the new color...
//!     }
//! }
//!
//! let mut theme = Theme::new();
//! theme.add_listener(Arc::new(StatusBar));
//! theme.load(b"skin:\n  body:\n    fgColor: orange\n")?;
//! ```
//!
//! ## Skin Document
//!
//! ```yaml
//! skin:
//!   body:
//!     fgColor: cadetblue
//!     bgColor: "-"        # terminal background
//!   frame:
//!     border:
//!       focusColor: "#87cefa"
//!   views:
//!     charts:
//!       defaultChartColors: [palegreen, orangered]
//! ```
//!
//! Keys missing from a document keep their current value, unknown keys are
//! ignored and a value of the wrong type rejects the whole document.
//!
//! ## Fallbacks
//!
//! - **Unknown color tokens** - resolve to [`ConcreteColor::Unknown`] and are
//!   logged as a warning when a skin is loaded
//! - **Loading errors** - the previously active styles stay in place

pub mod color;
pub mod defaults;
pub mod listener;
pub mod loader;
pub mod manager;
mod names;
pub mod renderer;
pub mod types;
pub mod validation;

pub use color::{Color, ColorSequence, ConcreteColor};
pub use listener::{ListenerHandle, ListenerRegistry, ThemeListener};
pub use loader::SkinFormat;
pub use manager::Theme;
pub use renderer::{RendererPalette, RendererTarget};
pub use types::{
    Body, Border, Charts, Crumb, Frame, Info, Log, Menu, Status, Style, StyleNode, Table,
    TableHeader, Title, Views, Xray, Yaml,
};
