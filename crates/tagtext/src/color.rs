//! Color model for tag markup.
//!
//! Colors are 24-bit RGB values. Hex strings are parsed leniently here (any
//! number of hex digits); the `hex` tag applies its own strict six-digit check
//! before calling into this module.

use std::fmt;

use crate::error::ColorParseError;

/// A 24-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack a color from `0xRRGGBB`. Bits above 24 are ignored.
    pub const fn from_packed(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Pack the channels as `0xRRGGBB`.
    pub const fn packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse a hexadecimal color, with or without a leading `#`.
///
/// Any non-empty run of hex digits is accepted as long as the value is at
/// most `0x7fffffff`. Bits above 24 are ignored.
///
/// # Examples
///
/// ```
/// use tagtext::color::{parse_hex_color, Rgb};
///
/// assert_eq!(parse_hex_color("#ff5733").unwrap(), Rgb::new(0xff, 0x57, 0x33));
/// assert_eq!(parse_hex_color("ff").unwrap(), Rgb::new(0, 0, 0xff));
/// assert!(parse_hex_color("zz").is_err());
/// ```
pub fn parse_hex_color(input: &str) -> Result<Rgb, ColorParseError> {
    let digits = input.strip_prefix('#').unwrap_or(input);

    // from_str_radix tolerates a leading sign, hex numerals do not
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidColorFormat(input.to_string()));
    }

    // values above i32::MAX are rejected, not wrapped
    i32::from_str_radix(digits, 16)
        .map(|value| Rgb::from_packed(value as u32))
        .map_err(|_| ColorParseError::InvalidColorFormat(input.to_string()))
}

/// Linearly interpolate between two colors, channel by channel.
///
/// `ratio` is clamped to `[0, 1]`; an out-of-range (or NaN) ratio is logged
/// and corrected rather than rejected.
pub fn interpolate_color(start: Rgb, end: Rgb, ratio: f32) -> Rgb {
    let ratio = if ratio.is_nan() {
        log::warn!("Interpolation ratio is NaN, using 0");
        0.0
    } else if !(0.0..=1.0).contains(&ratio) {
        log::warn!(
            "Interpolation ratio out of bounds: {}. Clamping to range [0, 1].",
            ratio
        );
        ratio.clamp(0.0, 1.0)
    } else {
        ratio
    };

    Rgb {
        r: interpolate_channel(start.r, end.r, ratio),
        g: interpolate_channel(start.g, end.g, ratio),
        b: interpolate_channel(start.b, end.b, ratio),
    }
}

fn interpolate_channel(start: u8, end: u8, ratio: f32) -> u8 {
    let start = f32::from(start);
    let end = f32::from(end);
    (start + (end - start) * ratio).round().clamp(0.0, 255.0) as u8
}

/// Colors for `count` consecutive characters spread evenly from `start` to `end`.
///
/// The first character always gets `start` and, when `count > 1`, the last
/// gets `end`. A single character gets `start`.
pub fn gradient_colors(start: Rgb, end: Rgb, count: usize) -> Vec<Rgb> {
    if count <= 1 {
        return vec![start; count];
    }

    let last = (count - 1) as f32;
    (0..count)
        .map(|i| interpolate_color(start, end, i as f32 / last))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_and_without_hash() {
        assert_eq!(parse_hex_color("00ff00"), parse_hex_color("#00ff00"));
        assert_eq!(parse_hex_color("00ff00").unwrap(), Rgb::new(0, 255, 0));
    }

    #[test]
    fn parse_uppercase() {
        assert_eq!(parse_hex_color("#ABCDEF").unwrap().packed(), 0xABCDEF);
    }

    #[test]
    fn parse_short_lengths() {
        assert_eq!(parse_hex_color("1").unwrap(), Rgb::new(0, 0, 1));
        assert_eq!(parse_hex_color("#fff").unwrap(), Rgb::new(0, 0x0f, 0xff));
    }

    #[test]
    fn parse_rejects_non_hex() {
        assert!(matches!(
            parse_hex_color("zz"),
            Err(ColorParseError::InvalidColorFormat(_))
        ));
        assert!(parse_hex_color("").is_err());
        assert!(parse_hex_color("#").is_err());
        assert!(parse_hex_color("+ff").is_err());
        assert!(parse_hex_color("ff 00").is_err());
    }

    #[test]
    fn parse_rejects_overflow() {
        assert!(parse_hex_color("1ffffffff").is_err());
        assert!(parse_hex_color("80000000").is_err());
        assert!(matches!(
            parse_hex_color("#ff123456"),
            Err(ColorParseError::InvalidColorFormat(input)) if input == "#ff123456"
        ));
    }

    #[test]
    fn parse_drops_high_bits() {
        assert_eq!(parse_hex_color("7f123456").unwrap(), Rgb::new(0x12, 0x34, 0x56));
        assert_eq!(parse_hex_color("7fffffff").unwrap(), Rgb::new(0xff, 0xff, 0xff));
    }

    #[test]
    fn interpolate_endpoints() {
        let start = Rgb::new(10, 20, 30);
        let end = Rgb::new(200, 100, 0);
        assert_eq!(interpolate_color(start, end, 0.0), start);
        assert_eq!(interpolate_color(start, end, 1.0), end);
    }

    #[test]
    fn interpolate_midpoint_rounds() {
        let mid = interpolate_color(Rgb::new(0, 0, 0), Rgb::new(255, 255, 1), 0.5);
        assert_eq!(mid, Rgb::new(128, 128, 1));
    }

    #[test]
    fn interpolate_clamps_ratio() {
        let start = Rgb::new(0, 0, 0);
        let end = Rgb::new(255, 255, 255);
        assert_eq!(interpolate_color(start, end, -3.0), start);
        assert_eq!(interpolate_color(start, end, 7.5), end);
        assert_eq!(interpolate_color(start, end, f32::NAN), start);
    }

    #[test]
    fn gradient_single_character_uses_start() {
        let colors = gradient_colors(Rgb::new(1, 2, 3), Rgb::new(9, 9, 9), 1);
        assert_eq!(colors, vec![Rgb::new(1, 2, 3)]);
    }

    #[test]
    fn gradient_empty() {
        assert!(gradient_colors(Rgb::new(1, 2, 3), Rgb::new(9, 9, 9), 0).is_empty());
    }

    #[test]
    fn gradient_spans_endpoints() {
        let colors = gradient_colors(Rgb::new(255, 0, 0), Rgb::new(0, 0, 255), 3);
        assert_eq!(
            colors,
            vec![Rgb::new(255, 0, 0), Rgb::new(128, 0, 128), Rgb::new(0, 0, 255)]
        );
    }

    #[test]
    fn display_as_hex() {
        assert_eq!(Rgb::new(0xff, 0x57, 0x33).to_string(), "#ff5733");
    }
}
