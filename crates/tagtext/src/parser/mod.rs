//! Parser for tag markup.
//!
//! This module contains the lexer, attribute parser, tag resolver and the
//! main markup compiler.

mod attributes;
mod lexer;
mod markup;
mod tag;

pub use attributes::parse_attributes;
pub use lexer::{Lexer, Token};
pub use markup::{compile, render_gradient};
pub use tag::{resolve_closing_tag, resolve_opening_tag, resolve_tag};
