//! Tag markup compiler for styled text.
//!
//! This crate compiles markup like `<red>Hello</red> <bold>World</bold>` into
//! an ordered list of styled spans that a renderer can turn into its native
//! text representation.
//!
//! # Overview
//!
//! Tags use angle brackets and may carry `key="value"` attributes:
//!
//! - `<red>text</red>`, `<bold>text</bold>` - Named colors and decorations
//! - `<hex #ff8800>text</hex>` - Exact RGB color (six hex digits)
//! - `<gradient from="#ff0000" to="#0000ff">text</gradient>` - Per-character gradient
//! - `<click action="open_url" value="https://example.com">text</click>` - Click action
//! - `<hover text="Tooltip">text</hover>` - Hover text
//!
//! A closing tag removes the most recently opened style, whatever its name.
//! Only the text directly following a tag is styled; text that follows a
//! stray `<`, or that precedes the first tag, is emitted as literal text.
//!
//! Nothing here fails: unknown tags, missing attributes and bad colors are
//! reported through the `log` crate and otherwise ignored.
//!
//! # Usage
//!
//! ```
//! use tagtext::{CompiledMarkup, NamedFormat, StyleEntry};
//!
//! let compiled = CompiledMarkup::compile("Hi <red>there</red>");
//! assert_eq!(compiled.text(), "Hi there");
//!
//! let spans = compiled.spans();
//! assert!(spans[0].is_plain());
//! assert_eq!(spans[1].applied_styles(), &[StyleEntry::Named(NamedFormat::Red)]);
//! ```

pub mod color;
pub mod entry;
pub mod error;
pub mod format;
pub mod markup;
pub mod parser;
pub mod render;
pub mod span;
pub mod stack;
pub mod style;

// Re-export main types at crate root
pub use color::Rgb;
pub use entry::{ClickEvent, ExplicitStyle, GradientSpan, StyleEntry};
pub use error::{ColorParseError, TagError};
pub use format::{ClickAction, NamedFormat};
pub use markup::CompiledMarkup;
pub use render::{PlainTextRenderer, Renderer};
pub use span::{Span, Styling};
pub use stack::StyleStack;
pub use style::{Decorations, Style, TextColor};
