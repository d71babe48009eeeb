//! Tag resolution: turns an opening tag into a style stack entry.

use std::collections::HashMap;

use crate::color::parse_hex_color;
use crate::entry::{ClickEvent, ExplicitStyle, GradientSpan, StyleEntry};
use crate::error::TagError;
use crate::format::{ClickAction, NamedFormat};
use crate::stack::StyleStack;

use super::attributes::parse_attributes;

/// Resolve an opening tag to the entry it would push.
///
/// `name` must already be lowercase. `attributes` is the raw text between the
/// tag name and `>`, if any.
///
/// # Examples
///
/// ```
/// use tagtext::parser::resolve_tag;
/// use tagtext::{NamedFormat, StyleEntry};
///
/// assert_eq!(resolve_tag("bold", None), Ok(StyleEntry::Named(NamedFormat::Bold)));
/// assert!(resolve_tag("blink", None).is_err());
/// ```
pub fn resolve_tag(name: &str, attributes: Option<&str>) -> Result<StyleEntry, TagError> {
    match name {
        "click" => resolve_click(attributes),
        "hover" => resolve_hover(attributes),
        "hex" => resolve_hex(attributes),
        "gradient" => resolve_gradient(attributes),
        other => NamedFormat::from_name(other)
            .map(StyleEntry::Named)
            .ok_or_else(|| TagError::UnknownTag(other.to_string())),
    }
}

/// Apply an opening tag to the stack.
///
/// A tag that cannot be resolved is logged and leaves the stack untouched.
pub fn resolve_opening_tag(name: &str, attributes: Option<&str>, stack: &mut StyleStack) {
    match resolve_tag(name, attributes) {
        Ok(entry) => stack.push(entry),
        Err(err) => log::warn!("{}", err),
    }
}

/// Apply a closing tag to the stack.
///
/// The closing tag's name is not checked: whatever entry is on top is removed.
pub fn resolve_closing_tag(stack: &mut StyleStack) {
    stack.pop();
}

fn require_attributes(
    tag: &'static str,
    attributes: Option<&str>,
) -> Result<HashMap<String, String>, TagError> {
    attributes
        .map(parse_attributes)
        .ok_or(TagError::NoAttributes(tag))
}

fn take_attribute(
    attributes: &mut HashMap<String, String>,
    tag: &'static str,
    attribute: &'static str,
) -> Result<String, TagError> {
    attributes
        .remove(attribute)
        .ok_or(TagError::MissingAttribute { tag, attribute })
}

fn resolve_click(attributes: Option<&str>) -> Result<StyleEntry, TagError> {
    let mut attributes = require_attributes("click", attributes)?;
    let action = take_attribute(&mut attributes, "click", "action")?;
    let value = take_attribute(&mut attributes, "click", "value")?;

    let action =
        ClickAction::from_name(&action).ok_or(TagError::UnsupportedClickAction(action))?;
    Ok(ExplicitStyle::with_click(ClickEvent::new(action, value)).into())
}

fn resolve_hover(attributes: Option<&str>) -> Result<StyleEntry, TagError> {
    let mut attributes = require_attributes("hover", attributes)?;
    let text = take_attribute(&mut attributes, "hover", "text")?;
    Ok(ExplicitStyle::with_hover(text).into())
}

/// `<hex RRGGBB>` or `<hex #RRGGBB>`: the raw attribute text is the color.
fn resolve_hex(attributes: Option<&str>) -> Result<StyleEntry, TagError> {
    let raw = attributes.ok_or(TagError::NoAttributes("hex"))?.trim();
    let digits = raw.strip_prefix('#').unwrap_or(raw);

    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(TagError::InvalidHex(digits.to_string()));
    }

    let color = parse_hex_color(digits).map_err(|_| TagError::InvalidHex(digits.to_string()))?;
    Ok(ExplicitStyle::with_color(color).into())
}

/// Gradient colors are stored unvalidated; they are parsed when a run is rendered.
fn resolve_gradient(attributes: Option<&str>) -> Result<StyleEntry, TagError> {
    let mut attributes = require_attributes("gradient", attributes)?;
    let from = take_attribute(&mut attributes, "gradient", "from")?;
    let to = take_attribute(&mut attributes, "gradient", "to")?;
    Ok(GradientSpan::new(from, to).into())
}
