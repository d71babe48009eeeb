//! Span type for styled runs of compiled markup.

use unicode_segmentation::UnicodeSegmentation;

use crate::color::{Rgb, gradient_colors, parse_hex_color};
use crate::entry::StyleEntry;
use crate::error::ColorParseError;
use crate::style::Style;

/// How a span's text is styled.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Styling {
    /// Literal text, no style applied.
    #[default]
    Plain,
    /// Stack entries active for the run, oldest first.
    Styled(Vec<StyleEntry>),
    /// One color per character (grapheme cluster) of the text.
    Gradient(Vec<Rgb>),
}

/// A run of text together with its styling.
///
/// Spans are emitted in document order; concatenating their text yields the
/// input with all recognized tags removed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Span {
    pub text: String,
    pub styling: Styling,
}

impl Span {
    /// Create an unstyled span.
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            styling: Styling::Plain,
        }
    }

    /// Create a span styled by the given entries. No entries means a literal span.
    pub fn styled(text: impl Into<String>, entries: Vec<StyleEntry>) -> Self {
        let styling = if entries.is_empty() {
            Styling::Plain
        } else {
            Styling::Styled(entries)
        };
        Self {
            text: text.into(),
            styling,
        }
    }

    /// Create a span with per-character colors.
    pub fn gradient(text: impl Into<String>, colors: Vec<Rgb>) -> Self {
        Self {
            text: text.into(),
            styling: Styling::Gradient(colors),
        }
    }

    /// Color each character of `text` along a gradient between two hex colors.
    ///
    /// Fails if either color is not a valid hex numeral.
    ///
    /// ```
    /// use tagtext::{Rgb, Span};
    ///
    /// let span = Span::gradient_from_hex("ab", "#ff0000", "0000ff").unwrap();
    /// assert_eq!(
    ///     span.colored_chars(),
    ///     Some(vec![("a", Rgb::new(255, 0, 0)), ("b", Rgb::new(0, 0, 255))])
    /// );
    /// ```
    pub fn gradient_from_hex(
        text: impl Into<String>,
        from: &str,
        to: &str,
    ) -> Result<Self, ColorParseError> {
        let start = parse_hex_color(from)?;
        let end = parse_hex_color(to)?;
        let text = text.into();
        let colors = gradient_colors(start, end, text.graphemes(true).count());
        Ok(Self::gradient(text, colors))
    }

    pub fn is_plain(&self) -> bool {
        matches!(self.styling, Styling::Plain)
    }

    pub fn is_gradient(&self) -> bool {
        matches!(self.styling, Styling::Gradient(_))
    }

    /// The stack entries applied to this span. Empty for literal and gradient spans.
    pub fn applied_styles(&self) -> &[StyleEntry] {
        match &self.styling {
            Styling::Styled(entries) => entries,
            Styling::Plain | Styling::Gradient(_) => &[],
        }
    }

    /// The uniform style of this span.
    ///
    /// Gradient spans have no uniform style; see [`Span::colored_chars`].
    pub fn style(&self) -> Style {
        Style::compose(self.applied_styles())
    }

    /// Characters paired with their gradient color, or `None` for non-gradient spans.
    pub fn colored_chars(&self) -> Option<Vec<(&str, Rgb)>> {
        match &self.styling {
            Styling::Gradient(colors) => Some(
                self.text
                    .graphemes(true)
                    .zip(colors.iter().copied())
                    .collect(),
            ),
            Styling::Plain | Styling::Styled(_) => None,
        }
    }

    /// Length of the text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
