//! Build styled text from plain strings, named formats, gradients or tag markup.
//!
//! Every function returns spans for a renderer to draw. None of them fail:
//! problems with the input are logged (see [`init_logger`]) and the affected
//! text falls back to plain.

pub mod error;
pub mod log_init;

pub use error::{EasyTextError, Result};
pub use log_init::init_logger;
pub use tagtext::{
    ClickAction, ClickEvent, CompiledMarkup, Decorations, GradientSpan, NamedFormat,
    PlainTextRenderer, Renderer, Rgb, Span, Style, StyleEntry, Styling, TextColor,
};

/// A single unstyled span.
pub fn simple_text(content: &str) -> Span {
    Span::literal(content)
}

/// A single span with the given formats applied in order.
///
/// ```
/// use easytext::{styled_text, Decorations, NamedFormat};
///
/// let span = styled_text("Warning", &[NamedFormat::Gold, NamedFormat::Bold]);
/// assert_eq!(span.style().decorations, Decorations::BOLD);
/// ```
pub fn styled_text(content: &str, formats: &[NamedFormat]) -> Span {
    Span::styled(
        content,
        formats.iter().copied().map(StyleEntry::Named).collect(),
    )
}

/// Compile tag markup such as `<red>Hello</red>` into spans.
///
/// ```
/// let text = easytext::tagged_text("<bold>Hello</bold> World");
/// assert_eq!(text.text(), "Hello World");
/// ```
pub fn tagged_text(content: &str) -> CompiledMarkup {
    CompiledMarkup::compile(content)
}

/// Color `content` along a gradient between two hex colors.
///
/// Falls back to an unstyled span if either color is invalid.
pub fn gradient_text(content: &str, from: &str, to: &str) -> Span {
    tagtext::parser::render_gradient(content, &GradientSpan::new(from, to))
}
