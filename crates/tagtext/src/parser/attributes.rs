//! Attribute parsing for opening tags.
//!
//! Only the quoted form `key="value"` is recognized. Anything else in the
//! attribute text is skipped without complaint.

use std::collections::HashMap;

use nom::{
    IResult,
    bytes::complete::{take_while, take_while1},
    character::complete::char,
    sequence::{delimited, separated_pair},
};

/// Parses an attribute key (word characters).
fn parse_key(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_')(input)
}

/// Parses a double-quoted value. The value may be empty but never contains `"`.
fn parse_quoted(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_while(|c: char| c != '"'), char('"'))(input)
}

/// Parses one `key="value"` pair.
fn parse_pair(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(parse_key, char('='), parse_quoted)(input)
}

/// Extract all `key="value"` pairs from raw attribute text.
///
/// The text is scanned left to right; a later duplicate key overwrites an
/// earlier one.
///
/// # Examples
///
/// ```
/// use tagtext::parser::parse_attributes;
///
/// let attrs = parse_attributes(r#" action="open_url" value="https://example.com""#);
/// assert_eq!(attrs.get("action").map(String::as_str), Some("open_url"));
/// assert_eq!(attrs.get("value").map(String::as_str), Some("https://example.com"));
/// ```
pub fn parse_attributes(input: &str) -> HashMap<String, String> {
    let mut attributes = HashMap::new();
    let mut rest = input;

    while !rest.is_empty() {
        match parse_pair(rest) {
            Ok((remaining, (key, value))) => {
                attributes.insert(key.to_string(), value.to_string());
                rest = remaining;
            }
            Err(_) => {
                let skip = rest.chars().next().map_or(rest.len(), |c| c.len_utf8());
                rest = &rest[skip..];
            }
        }
    }

    attributes
}
