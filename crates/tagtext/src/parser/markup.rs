//! Main markup compiler.
//!
//! Drives the lexer, resolves tags against the style stack and turns each
//! tag's run into a [`Span`].

use crate::entry::{GradientSpan, StyleEntry};
use crate::markup::CompiledMarkup;
use crate::span::Span;
use crate::stack::StyleStack;

use super::lexer::{Lexer, Token};
use super::tag::{resolve_closing_tag, resolve_opening_tag};

/// Compiles tag markup into styled spans.
///
/// This never fails: unknown tags and bad attributes are logged and ignored,
/// and a gradient with unusable colors degrades to literal text.
///
/// # Examples
///
/// ```
/// use tagtext::parser::compile;
///
/// let compiled = compile("abc<red>def</red>ghi");
/// assert_eq!(compiled.text(), "abcdefghi");
/// assert_eq!(compiled.spans().len(), 3);
/// assert!(compiled.spans()[0].is_plain());
/// assert!(!compiled.spans()[1].is_plain());
/// ```
pub fn compile(input: &str) -> CompiledMarkup {
    let mut compiler = Compiler::new();
    for token in Lexer::new(input) {
        compiler.process_token(token);
    }

    if !compiler.stack.is_empty() {
        log::debug!("{} tag(s) left open at end of input", compiler.stack.len());
    }

    CompiledMarkup::new(compiler.spans)
}

/// The compiler state for one pass.
struct Compiler {
    /// Styles opened and not yet closed.
    stack: StyleStack,
    /// Emitted spans, in document order.
    spans: Vec<Span>,
}

impl Compiler {
    fn new() -> Self {
        Self {
            stack: StyleStack::new(),
            spans: Vec::new(),
        }
    }

    fn process_token(&mut self, token: Token<'_>) {
        match token {
            Token::Literal(text) => {
                self.spans.push(Span::literal(text));
            }
            Token::OpenTag { name, attributes } => {
                resolve_opening_tag(&name.to_lowercase(), attributes, &mut self.stack);
            }
            Token::CloseTag(_) => {
                resolve_closing_tag(&mut self.stack);
            }
            Token::Run(text) => {
                let span = self.render_run(text);
                self.spans.push(span);
            }
        }
    }

    /// Render a tag's run with the styles currently on the stack.
    ///
    /// A gradient on top of the stack overrides everything beneath it.
    fn render_run(&self, text: &str) -> Span {
        match self.stack.peek() {
            Some(StyleEntry::Gradient(gradient)) => render_gradient(text, gradient),
            _ => Span::styled(text, self.stack.snapshot_bottom_to_top().to_vec()),
        }
    }
}

/// Render `text` along a gradient, falling back to a literal span if either
/// color cannot be parsed.
pub fn render_gradient(text: &str, gradient: &GradientSpan) -> Span {
    match Span::gradient_from_hex(text, &gradient.from, &gradient.to) {
        Ok(span) => span,
        Err(err) => {
            log::error!("Error creating gradient text for content {:?}: {}", text, err);
            Span::literal(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::entry::{ClickEvent, ExplicitStyle};
    use crate::format::{ClickAction, NamedFormat};
    use crate::span::Styling;

    #[test]
    fn compile_empty_input() {
        assert!(compile("").spans().is_empty());
    }

    #[test]
    fn compile_plain_text() {
        let compiled = compile("Hello World");
        assert_eq!(compiled.spans(), &[Span::literal("Hello World")]);
    }

    #[test]
    fn compile_single_style() {
        let compiled = compile("<bold>Hello</bold>");
        assert_eq!(
            compiled.spans(),
            &[Span::styled(
                "Hello",
                vec![StyleEntry::Named(NamedFormat::Bold)]
            )]
        );
    }

    #[test]
    fn compile_gap_text_is_unstyled() {
        let compiled = compile("abc<red>def</red>ghi");
        assert_eq!(
            compiled.spans(),
            &[
                Span::literal("abc"),
                Span::styled("def", vec![StyleEntry::Named(NamedFormat::Red)]),
                Span::literal("ghi"),
            ]
        );
    }

    #[test]
    fn compile_close_ignores_name() {
        let compiled = compile("<red>a</blue>b");
        assert_eq!(
            compiled.spans(),
            &[
                Span::styled("a", vec![StyleEntry::Named(NamedFormat::Red)]),
                Span::literal("b"),
            ]
        );
    }

    #[test]
    fn compile_unknown_tag() {
        let compiled = compile("<foo>hello</foo>");
        assert_eq!(compiled.spans(), &[Span::literal("hello")]);
    }

    #[test]
    fn compile_tag_names_are_case_insensitive() {
        let compiled = compile("<RED>x");
        assert_eq!(
            compiled.spans(),
            &[Span::styled("x", vec![StyleEntry::Named(NamedFormat::Red)])]
        );
    }

    #[test]
    fn compile_nested_click_inside_color() {
        let compiled = compile(r#"<red><click action="open_url" value="http://x">go</click></red>"#);
        assert_eq!(
            compiled.spans(),
            &[Span::styled(
                "go",
                vec![
                    StyleEntry::Named(NamedFormat::Red),
                    StyleEntry::Explicit(ExplicitStyle::with_click(ClickEvent::new(
                        ClickAction::OpenUrl,
                        "http://x"
                    ))),
                ]
            )]
        );
    }

    #[test]
    fn compile_gradient_run() {
        let compiled = compile(r##"<gradient from="#ff0000" to="#0000ff">abc</gradient>"##);
        assert_eq!(
            compiled.spans(),
            &[Span::gradient(
                "abc",
                vec![Rgb::new(255, 0, 0), Rgb::new(128, 0, 128), Rgb::new(0, 0, 255)]
            )]
        );
    }

    #[test]
    fn compile_gradient_overrides_lower_styles() {
        let compiled = compile(r#"<bold><gradient from="000000" to="ffffff">z"#);
        assert_eq!(compiled.spans()[0].styling, Styling::Gradient(vec![Rgb::new(0, 0, 0)]));
    }

    #[test]
    fn compile_gradient_below_top_is_ignored() {
        let compiled = compile(r#"<gradient from="000000" to="ffffff"><bold>z"#);
        assert_eq!(
            compiled.spans()[0].applied_styles(),
            &[
                StyleEntry::Gradient(GradientSpan::new("000000", "ffffff")),
                StyleEntry::Named(NamedFormat::Bold),
            ]
        );
    }

    #[test]
    fn compile_gradient_bad_color_falls_back() {
        let compiled = compile(r#"<gradient from="zz" to="00ff00">hi</gradient>"#);
        assert_eq!(compiled.spans(), &[Span::literal("hi")]);
    }

    #[test]
    fn compile_unclosed_tags() {
        let compiled = compile("<bold>Hello");
        assert_eq!(compiled.spans().len(), 1);
        assert_eq!(compiled.text(), "Hello");
    }
}
