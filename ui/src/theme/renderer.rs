use crate::theme::color::ConcreteColor;

/// The handful of resolved colors a renderer applies globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RendererPalette {
    pub primitive_background: ConcreteColor,
    pub contrast_background: ConcreteColor,
    pub primary_text: ConcreteColor,
    pub border: ConcreteColor,
    pub focus: ConcreteColor,
}

/// Receives the global palette whenever the theme is applied.
pub trait RendererTarget {
    fn apply_palette(&mut self, palette: &RendererPalette);
}

// Hosts that only need to remember the last applied palette can use one directly.
impl RendererTarget for RendererPalette {
    fn apply_palette(&mut self, palette: &RendererPalette) {
        *self = *palette;
    }
}

impl RendererTarget for Option<RendererPalette> {
    fn apply_palette(&mut self, palette: &RendererPalette) {
        *self = Some(*palette);
    }
}
