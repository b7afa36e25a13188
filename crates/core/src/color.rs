//! Color recognition and conversion to normalized RGBA.
//!
//! Detection ([`is_color`]) is lexical and cheap: 6/8-digit hex, an
//! `rgb(`/`rgba(` prefix, or one of a handful of names. Conversion
//! ([`to_rgba`]) is best-effort and never fails; input it cannot read
//! becomes opaque black.

use serde::{Deserialize, Serialize};

/// A color with every channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Returned by [`to_rgba`] for input it cannot convert.
    pub const FALLBACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Rgba { r, g, b, a }
    }

    fn from_bytes(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            f64::from(a) / 255.0,
        )
    }
}

/// Named colors accepted by [`is_color`], with their CSS values.
const NAMED_COLORS: &[(&str, Rgba)] = &[
    ("red", Rgba::new(1.0, 0.0, 0.0, 1.0)),
    ("blue", Rgba::new(0.0, 0.0, 1.0, 1.0)),
    ("green", Rgba::new(0.0, 128.0 / 255.0, 0.0, 1.0)),
    ("black", Rgba::new(0.0, 0.0, 0.0, 1.0)),
    ("white", Rgba::new(1.0, 1.0, 1.0, 1.0)),
    ("transparent", Rgba::new(0.0, 0.0, 0.0, 0.0)),
];

/// Returns true if `raw` looks like a color: `#RRGGBB`, `#RRGGBBAA`, anything
/// starting with `rgb(` or `rgba(`, or a known color name (any case).
pub fn is_color(raw: &str) -> bool {
    if let Some(hex) = raw.strip_prefix('#') {
        return is_hex_pairs(hex);
    }
    if raw.starts_with("rgb(") || raw.starts_with("rgba(") {
        return true;
    }
    named_color(raw).is_some()
}

/// Convert a color string to [`Rgba`].
///
/// Hex digits are read as byte pairs divided by 255; the leading `#` is
/// optional and alpha defaults to 1. `rgb()`/`rgba()` functions and named
/// colors are resolved too. Anything else yields [`Rgba::FALLBACK`].
pub fn to_rgba(raw: &str) -> Rgba {
    let hex = raw.strip_prefix('#').unwrap_or(raw);
    if is_hex_pairs(hex) {
        if let Some(color) = parse_hex(hex) {
            return color;
        }
    }
    if let Some(color) = parse_rgb_function(raw) {
        return color;
    }
    named_color(raw).unwrap_or(Rgba::FALLBACK)
}

fn is_hex_pairs(s: &str) -> bool {
    (s.len() == 6 || s.len() == 8) && s.bytes().all(|b| b.is_ascii_hexdigit())
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    let alpha = if hex.len() == 8 { byte(6)? } else { 255 };
    Some(Rgba::from_bytes(byte(0)?, byte(2)?, byte(4)?, alpha))
}

fn named_color(raw: &str) -> Option<Rgba> {
    NAMED_COLORS
        .iter()
        .find(|(name, _)| raw.eq_ignore_ascii_case(name))
        .map(|(_, color)| *color)
}

/// Parse `rgb(r, g, b)` / `rgba(r, g, b, a)`, also accepting the
/// space-separated `rgb(r g b / a)` form. Channels are 0-255 or percentages,
/// alpha is 0-1 or a percentage. Out-of-range values are clamped.
fn parse_rgb_function(raw: &str) -> Option<Rgba> {
    let trimmed = raw.trim();
    let args = trimmed
        .strip_prefix("rgba(")
        .or_else(|| trimmed.strip_prefix("rgb("))?
        .strip_suffix(')')?;

    let parts: Vec<&str> = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }

    let r = parse_channel(parts[0])?;
    let g = parse_channel(parts[1])?;
    let b = parse_channel(parts[2])?;
    let a = match parts.get(3) {
        Some(alpha) => parse_alpha(alpha)?,
        None => 1.0,
    };
    Some(Rgba::new(r, g, b, a))
}

fn parse_channel(part: &str) -> Option<f64> {
    let value = match part.strip_suffix('%') {
        Some(pct) => pct.parse::<f64>().ok()? / 100.0,
        None => part.parse::<f64>().ok()? / 255.0,
    };
    value.is_finite().then(|| value.clamp(0.0, 1.0))
}

fn parse_alpha(part: &str) -> Option<f64> {
    let value = match part.strip_suffix('%') {
        Some(pct) => pct.parse::<f64>().ok()? / 100.0,
        None => part.parse::<f64>().ok()?,
    };
    value.is_finite().then(|| value.clamp(0.0, 1.0))
}
