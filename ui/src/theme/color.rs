use crate::theme::names;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tuirealm::props::Color as TermColor;

/// A color resolved for the renderer.
///
/// The sentinels stay distinguishable here even though all of them render as
/// the terminal reset color once converted into a [`TermColor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcreteColor {
    /// Use whatever the renderer considers its default.
    Default,
    /// Let the terminal background show through.
    Transparent,
    /// The token could not be understood.
    Unknown,
    /// A color the renderer can draw directly.
    Term(TermColor),
}

impl ConcreteColor {
    /// Convert into the renderer color type.
    pub fn to_term(self) -> TermColor {
        match self {
            ConcreteColor::Default | ConcreteColor::Transparent | ConcreteColor::Unknown => {
                TermColor::Reset
            }
            ConcreteColor::Term(color) => color,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ConcreteColor::Unknown)
    }
}

impl From<ConcreteColor> for TermColor {
    fn from(color: ConcreteColor) -> Self {
        color.to_term()
    }
}

/// A textual color token as written in a skin definition.
///
/// Equality and serialization operate on the raw token, so a token always
/// round-trips exactly as it was written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Token asking the renderer for its default color.
    pub const DEFAULT: &'static str = "default";
    /// Token for the terminal background.
    pub const TRANSPARENT: &'static str = "-";

    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn default_color() -> Self {
        Self::new(Self::DEFAULT)
    }

    pub fn transparent() -> Self {
        Self::new(Self::TRANSPARENT)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == Self::DEFAULT
    }

    pub fn is_transparent(&self) -> bool {
        self.0 == Self::TRANSPARENT
    }

    /// Resolve the token into a renderer color. Never fails: tokens that
    /// cannot be parsed resolve to [`ConcreteColor::Unknown`].
    pub fn resolve(&self) -> ConcreteColor {
        if self.is_default() {
            return ConcreteColor::Default;
        }
        if self.is_transparent() {
            return ConcreteColor::Transparent;
        }

        // Every name and encoding we understand is plain ASCII
        let token = self.0.trim();
        if token.is_empty() || !token.is_ascii() {
            return ConcreteColor::Unknown;
        }

        let lowered = token.to_lowercase();
        if let Some(color) = names::lookup(&lowered) {
            return ConcreteColor::Term(color);
        }

        // Hex, ANSI indexes and renderer-specific names
        match TermColor::from_str(&lowered) {
            Ok(color) => ConcreteColor::Term(color),
            Err(_) => ConcreteColor::Unknown,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for Color {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// An ordered palette of color tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorSequence(Vec<Color>);

impl ColorSequence {
    pub fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.0
    }

    /// Resolve every token, keeping order and length.
    pub fn resolve_all(&self) -> Vec<ConcreteColor> {
        self.0.iter().map(Color::resolve).collect()
    }
}

impl<C: Into<Color>> FromIterator<C> for ColorSequence {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a ColorSequence {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
