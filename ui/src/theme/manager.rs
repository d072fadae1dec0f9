use crate::config::AppConfig;
use crate::error::SkinResult;
use crate::theme::color::ConcreteColor;
use crate::theme::defaults;
use crate::theme::listener::{ListenerHandle, ListenerRegistry};
use crate::theme::loader::{self, SkinFormat};
use crate::theme::renderer::{RendererPalette, RendererTarget};
use crate::theme::types::*;
use crate::theme::validation::ColorTokenValidator;
use crate::validation::Validator;
use std::path::Path;

/// The active skin and the components listening to it.
///
/// There is exactly one style tree at a time and it is always complete:
/// loads merge onto it field by field and a failed load changes nothing.
/// Hosts share a theme across threads as `Arc<Mutex<Theme>>`; every mutation
/// takes `&mut self`, so readers never see a half-merged tree.
///
/// `Theme` is not `Clone`: a copy would carry the same listeners
/// and notify them about a tree they never render. Clone [`Theme::style`]
/// to snapshot the colors.
#[derive(Debug)]
pub struct Theme {
    style: Style,
    listeners: ListenerRegistry,
}

impl Theme {
    /// A theme holding the built-in skin and no listeners.
    pub fn new() -> Self {
        Self {
            style: defaults::default_style(),
            listeners: ListenerRegistry::new(),
        }
    }

    /// Build the default theme, then merge the configured skin file if there
    /// is one. A broken skin file is logged and the defaults are kept.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut theme = Self::new();
        let path = config.skin_file();

        if !path.exists() {
            log::info!("No skin file at {}, using the default skin", path.display());
            return theme;
        }

        if let Err(e) = theme.load_file(&path) {
            log::error!("Failed to load skin {}: {e}", path.display());
        }
        theme
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Merge a YAML skin definition onto the active styles and notify
    /// listeners.
    pub fn load(&mut self, bytes: &[u8]) -> SkinResult<()> {
        self.load_with_format(bytes, SkinFormat::Yaml)
    }

    pub fn load_with_format(&mut self, bytes: &[u8], format: SkinFormat) -> SkinResult<()> {
        let patch = loader::decode(bytes, format)?;
        self.style.merge(patch);
        log::info!("Skin loaded ({format:?}, {} bytes)", bytes.len());

        if let Err(e) = ColorTokenValidator.validate(&self.style) {
            log::warn!("{e}");
        }

        self.notify_all();
        Ok(())
    }

    /// Read, decode and merge a skin file. The format follows the extension.
    pub fn load_file(&mut self, path: &Path) -> SkinResult<()> {
        let bytes = loader::read_skin_file(path)?;
        log::debug!("Read skin file {}", path.display());
        self.load_with_format(&bytes, SkinFormat::from_path(path))
    }

    /// Replace the styles with the built-in skin and notify listeners.
    pub fn reset(&mut self) {
        self.style = defaults::default_style();
        log::info!("Skin reset to defaults");
        self.notify_all();
    }

    pub fn add_listener(&mut self, listener: ListenerHandle) {
        self.listeners.add(listener);
    }

    pub fn remove_listener(&mut self, listener: &ListenerHandle) {
        self.listeners.remove(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Invoke every listener with this theme, in registration order.
    pub fn notify_all(&self) {
        self.listeners.notify_all(self);
    }

    /// Global colors for the renderer.
    pub fn renderer_palette(&self) -> RendererPalette {
        let background = self.bg_color();
        RendererPalette {
            primitive_background: background,
            contrast_background: background,
            primary_text: self.fg_color(),
            border: self.border_color(),
            focus: self.focus_color(),
        }
    }

    /// Push the global colors to the renderer, then notify listeners.
    pub fn apply_and_notify(&self, target: &mut dyn RendererTarget) {
        target.apply_palette(&self.renderer_palette());
        self.notify_all();
    }

    pub fn fg_color(&self) -> ConcreteColor {
        self.style.body.fg_color.resolve()
    }

    pub fn bg_color(&self) -> ConcreteColor {
        self.style.body.bg_color.resolve()
    }

    pub fn border_color(&self) -> ConcreteColor {
        self.style.frame.border.fg_color.resolve()
    }

    pub fn focus_color(&self) -> ConcreteColor {
        self.style.frame.border.focus_color.resolve()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

// Read-only projections into the style tree
macro_rules! group_accessor {
    ($method:ident -> $ty:ty, $($path:ident).+) => {
        impl Theme {
            pub fn $method(&self) -> &$ty {
                &self.style.$($path).+
            }
        }
    };
}

group_accessor!(body -> Body, body);
group_accessor!(frame -> Frame, frame);
group_accessor!(title -> Title, frame.title);
group_accessor!(border -> Border, frame.border);
group_accessor!(menu -> Menu, frame.menu);
group_accessor!(crumb -> Crumb, frame.crumb);
group_accessor!(status -> Status, frame.status);
group_accessor!(info -> Info, info);
group_accessor!(views -> Views, views);
group_accessor!(table -> Table, views.table);
group_accessor!(table_header -> TableHeader, views.table.header);
group_accessor!(xray -> Xray, views.xray);
group_accessor!(charts -> Charts, views.charts);
group_accessor!(yaml -> Yaml, views.yaml);
group_accessor!(log -> Log, views.log);
