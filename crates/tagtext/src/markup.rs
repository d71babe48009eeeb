//! CompiledMarkup result type.

use crate::render::Renderer;
use crate::span::Span;

/// The result of compiling tag markup: spans in document order.
///
/// # Examples
///
/// ```
/// use tagtext::CompiledMarkup;
///
/// let compiled = CompiledMarkup::compile("<bold>Hello</bold> World");
/// assert_eq!(compiled.text(), "Hello World");
/// assert_eq!(compiled.spans().len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompiledMarkup {
    spans: Vec<Span>,
}

impl CompiledMarkup {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Compile tag markup.
    pub fn compile(input: &str) -> Self {
        crate::parser::compile(input)
    }

    /// Get all spans.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn into_spans(self) -> Vec<Span> {
        self.spans
    }

    /// The text of all spans concatenated, markup removed.
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// Returns true if no span carries any style.
    pub fn is_plain(&self) -> bool {
        self.spans.iter().all(Span::is_plain)
    }

    /// Returns true if there are no spans.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Feed every span to `renderer`, in order, and return its output.
    pub fn render<R: Renderer>(&self, mut renderer: R) -> R::Output {
        for span in &self.spans {
            renderer.render_span(span);
        }
        renderer.finish()
    }
}

impl IntoIterator for CompiledMarkup {
    type Item = Span;
    type IntoIter = std::vec::IntoIter<Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.into_iter()
    }
}

impl<'a> IntoIterator for &'a CompiledMarkup {
    type Item = &'a Span;
    type IntoIter = std::slice::Iter<'a, Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PlainTextRenderer;

    #[test]
    fn plain_markup() {
        let markup = CompiledMarkup::new(vec![Span::literal("Hello World")]);
        assert!(markup.is_plain());
        assert_eq!(markup.text(), "Hello World");
    }

    #[test]
    fn empty_markup() {
        let markup = CompiledMarkup::default();
        assert!(markup.is_empty());
        assert!(markup.is_plain());
        assert_eq!(markup.text(), "");
    }

    #[test]
    fn render_preserves_order() {
        let markup = CompiledMarkup::compile("a<bold>b</bold>c<red>d");
        assert_eq!(markup.render(PlainTextRenderer::new()), "abcd");
    }

    #[test]
    fn iterate_spans() {
        let markup = CompiledMarkup::compile("x<bold>y");
        let texts: Vec<&str> = (&markup).into_iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["x", "y"]);
        assert_eq!(markup.into_iter().count(), 2);
    }
}
