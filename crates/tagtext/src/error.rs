//! Error types for tag markup compilation.
//!
//! Compilation itself never fails; these errors surface from the lower-level
//! building blocks and are contained by the compiler.

use thiserror::Error;

/// Errors that can occur when parsing a color.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The input is not a hexadecimal numeral.
    #[error("invalid color format: {0}")]
    InvalidColorFormat(String),
}

/// Reasons an opening tag contributes no style.
///
/// These are logged as warnings; compilation carries on as if the tag were absent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TagError {
    /// The tag needs attributes but was written bare, e.g. `<hover>`.
    #[error("<{0}> tag has no attributes")]
    NoAttributes(&'static str),

    /// A required `key="value"` attribute is absent.
    #[error("<{tag}> tag is missing the '{attribute}' attribute")]
    MissingAttribute {
        tag: &'static str,
        attribute: &'static str,
    },

    /// The `action` of a click tag is not a known click action.
    #[error("unsupported click action: {0}")]
    UnsupportedClickAction(String),

    /// The `hex` tag's value is not exactly six hex digits.
    #[error("invalid hex color: {0}, expected RRGGBB")]
    InvalidHex(String),

    /// The tag name is not a known tag.
    #[error("unrecognized tag: <{0}>")]
    UnknownTag(String),
}
