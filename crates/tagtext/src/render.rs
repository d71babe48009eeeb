//! Renderer contract.
//!
//! A renderer receives spans one at a time, in emission order, and builds its
//! platform's text representation from them. A span either carries a uniform
//! [`Style`](crate::Style) (see [`Span::style`]) or one color per character
//! (see [`Span::colored_chars`]).

use crate::span::Span;

/// Consumes compiled spans.
pub trait Renderer {
    type Output;

    /// Append one span. Called in document order.
    fn render_span(&mut self, span: &Span);

    /// Finish rendering and return the result.
    fn finish(self) -> Self::Output;
}

/// Renders spans as unstyled text.
#[derive(Clone, Debug, Default)]
pub struct PlainTextRenderer {
    output: String,
}

impl PlainTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for PlainTextRenderer {
    type Output = String;

    fn render_span(&mut self, span: &Span) {
        self.output.push_str(&span.text);
    }

    fn finish(self) -> String {
        self.output
    }
}
