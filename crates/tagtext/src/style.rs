//! Composed style of a span.
//!
//! A [`Style`] is what a renderer needs to draw a run: one color, a set of
//! decorations and the interaction metadata. It is folded from the stack
//! entries that were active when the run was emitted.

use bitflags::bitflags;

use crate::color::Rgb;
use crate::entry::{ClickEvent, ExplicitStyle, StyleEntry};
use crate::format::NamedFormat;

bitflags! {
    /// Text decorations.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Decorations: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINE = 1 << 2;
        const STRIKETHROUGH = 1 << 3;
        const OBFUSCATED = 1 << 4;
    }
}

impl Decorations {
    /// The flag set by a decoration format, empty for colors.
    pub fn from_format(format: NamedFormat) -> Self {
        match format {
            NamedFormat::Bold => Decorations::BOLD,
            NamedFormat::Italic => Decorations::ITALIC,
            NamedFormat::Underline => Decorations::UNDERLINE,
            NamedFormat::Strikethrough => Decorations::STRIKETHROUGH,
            NamedFormat::Obfuscated => Decorations::OBFUSCATED,
            _ => Decorations::empty(),
        }
    }
}

/// A text color: one of the named palette colors or an arbitrary RGB value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextColor {
    Named(NamedFormat),
    Rgb(Rgb),
}

impl TextColor {
    /// Resolve to an RGB value.
    pub fn rgb(self) -> Rgb {
        match self {
            TextColor::Named(format) => format.rgb().unwrap_or_default(),
            TextColor::Rgb(rgb) => rgb,
        }
    }
}

/// Complete style of a span.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub color: Option<TextColor>,
    pub decorations: Decorations,
    pub click: Option<ClickEvent>,
    pub hover: Option<String>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no style properties are set.
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.decorations.is_empty()
            && self.click.is_none()
            && self.hover.is_none()
    }

    /// Apply a named format: colors replace the current color, decorations
    /// are OR'd in.
    pub fn formatted(mut self, format: NamedFormat) -> Self {
        if format.is_color() {
            self.color = Some(TextColor::Named(format));
        } else {
            self.decorations |= Decorations::from_format(format);
        }
        self
    }

    /// Merge an explicit style as a parent of this one.
    ///
    /// Fields already set on `self` win; the parent only fills the gaps.
    pub fn with_parent(mut self, parent: &ExplicitStyle) -> Self {
        if self.color.is_none() {
            self.color = parent.color.map(TextColor::Rgb);
        }
        if self.click.is_none() {
            self.click = parent.click.clone();
        }
        if self.hover.is_none() {
            self.hover = parent.hover.clone();
        }
        self
    }

    /// Fold stack entries, oldest first, into a single style.
    ///
    /// Gradient entries carry no uniform style and are skipped.
    pub fn compose<'a>(entries: impl IntoIterator<Item = &'a StyleEntry>) -> Self {
        entries
            .into_iter()
            .fold(Style::default(), |style, entry| match entry {
                StyleEntry::Named(format) => style.formatted(*format),
                StyleEntry::Explicit(explicit) => style.with_parent(explicit),
                StyleEntry::Gradient(_) => style,
            })
    }
}
