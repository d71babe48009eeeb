//! Entries pushed onto the active style stack by opening tags.

use crate::color::Rgb;
use crate::format::{ClickAction, NamedFormat};

/// A click handler attached to a span.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickEvent {
    pub action: ClickAction,
    pub value: String,
}

impl ClickEvent {
    pub fn new(action: ClickAction, value: impl Into<String>) -> Self {
        Self {
            action,
            value: value.into(),
        }
    }
}

/// Style fields set directly by a `click`, `hover` or `hex` tag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExplicitStyle {
    pub color: Option<Rgb>,
    pub click: Option<ClickEvent>,
    /// Text shown when hovering the span.
    pub hover: Option<String>,
}

impl ExplicitStyle {
    pub fn with_color(color: Rgb) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    pub fn with_click(click: ClickEvent) -> Self {
        Self {
            click: Some(click),
            ..Self::default()
        }
    }

    pub fn with_hover(text: impl Into<String>) -> Self {
        Self {
            hover: Some(text.into()),
            ..Self::default()
        }
    }
}

/// A two-color gradient opened by `<gradient from=".." to="..">`.
///
/// The colors are kept as written; they are only parsed when a run is
/// rendered under the gradient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradientSpan {
    pub from: String,
    pub to: String,
}

impl GradientSpan {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// One entry of the active style stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StyleEntry {
    Named(NamedFormat),
    Explicit(ExplicitStyle),
    Gradient(GradientSpan),
}

impl StyleEntry {
    pub fn is_gradient(&self) -> bool {
        matches!(self, StyleEntry::Gradient(_))
    }
}

impl From<NamedFormat> for StyleEntry {
    fn from(format: NamedFormat) -> Self {
        StyleEntry::Named(format)
    }
}

impl From<ExplicitStyle> for StyleEntry {
    fn from(style: ExplicitStyle) -> Self {
        StyleEntry::Explicit(style)
    }
}

impl From<GradientSpan> for StyleEntry {
    fn from(gradient: GradientSpan) -> Self {
        StyleEntry::Gradient(gradient)
    }
}
