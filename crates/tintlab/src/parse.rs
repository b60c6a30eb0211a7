//! Color literal parsing.
//!
//! Supported grammars:
//!
//! - RGB hex: `#f80`, `#ff8800`, `#ff880080` (3, 6 or 8 digits)
//! - Function forms: `rgb(r, g, b)`, `rgba(r, g, b, a)`,
//!   `hsl(h, s%, l%)`, `hsla(h, s%, l%, a)`
//! - The 16 basic CSS color names: `black`, `white`, `teal`, …
//!
//! Everything parses into the canonical [`Hsla`] representation; alpha
//! defaults to 1 when the literal carries none. Parsing is
//! whitespace-tolerant and case-insensitive. An unrecognized literal fails
//! with [`ThemeError::InvalidColorFormat`] — callers treat that as a
//! configuration error, not a recoverable condition.

use crate::color::{rgb_to_hsla, Hsla};
use crate::error::ThemeError;

/// The 16 basic CSS color names and their sRGB values.
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("silver", [192, 192, 192]),
    ("gray", [128, 128, 128]),
    ("white", [255, 255, 255]),
    ("maroon", [128, 0, 0]),
    ("red", [255, 0, 0]),
    ("purple", [128, 0, 128]),
    ("fuchsia", [255, 0, 255]),
    ("green", [0, 128, 0]),
    ("lime", [0, 255, 0]),
    ("olive", [128, 128, 0]),
    ("yellow", [255, 255, 0]),
    ("navy", [0, 0, 128]),
    ("blue", [0, 0, 255]),
    ("teal", [0, 128, 128]),
    ("aqua", [0, 255, 255]),
];

/// Parses a color literal into its canonical [`Hsla`] representation.
///
/// # Errors
///
/// Returns [`ThemeError::InvalidColorFormat`] when the literal matches none
/// of the supported grammars.
///
/// # Example
///
/// ```rust
/// use tintlab::parse_color;
///
/// let blue = parse_color("#0870D9").unwrap();
/// assert_eq!(blue.to_css(), "hsla(210, 93%, 44%, 1)");
///
/// assert!(parse_color("not-a-color").is_err());
/// ```
pub fn parse_color(literal: &str) -> Result<Hsla, ThemeError> {
    let trimmed = literal.trim();

    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(literal, hex);
    }

    let lower = trimmed.to_ascii_lowercase();
    if let Some(args) = call_args(&lower, "rgba") {
        return parse_rgb(literal, &args, true);
    }
    if let Some(args) = call_args(&lower, "rgb") {
        return parse_rgb(literal, &args, false);
    }
    if let Some(args) = call_args(&lower, "hsla") {
        return parse_hsl(literal, &args, true);
    }
    if let Some(args) = call_args(&lower, "hsl") {
        return parse_hsl(literal, &args, false);
    }

    parse_named(literal, &lower)
}

/// Builds the error for an unparseable literal.
fn invalid(literal: &str) -> ThemeError {
    ThemeError::InvalidColorFormat {
        value: literal.trim().to_string(),
    }
}

/// Splits `name(a, b, c)` into trimmed argument slices, if `s` has exactly
/// that shape.
fn call_args<'a>(s: &'a str, name: &str) -> Option<Vec<&'a str>> {
    let body = s.strip_prefix(name)?.trim_start();
    let body = body.strip_prefix('(')?.strip_suffix(')')?;
    Some(body.split(',').map(str::trim).collect())
}

/// Parses a hex color (without the `#` prefix): 3, 6 or 8 digits.
fn parse_hex(literal: &str, hex: &str) -> Result<Hsla, ThemeError> {
    // Byte-indexed slicing below requires single-byte characters.
    if !hex.is_ascii() {
        return Err(invalid(literal));
    }
    let channel = |range: &str| u8::from_str_radix(range, 16).map_err(|_| invalid(literal));

    match hex.len() {
        // #rgb → #rrggbb
        3 => {
            let r = channel(&hex[0..1])? * 17;
            let g = channel(&hex[1..2])? * 17;
            let b = channel(&hex[2..3])? * 17;
            Ok(rgb_to_hsla(r.into(), g.into(), b.into(), 1.0))
        }
        6 => {
            let r = channel(&hex[0..2])?;
            let g = channel(&hex[2..4])?;
            let b = channel(&hex[4..6])?;
            Ok(rgb_to_hsla(r.into(), g.into(), b.into(), 1.0))
        }
        // #rrggbbaa
        8 => {
            let r = channel(&hex[0..2])?;
            let g = channel(&hex[2..4])?;
            let b = channel(&hex[4..6])?;
            let a = f64::from(channel(&hex[6..8])?) / 255.0;
            Ok(rgb_to_hsla(r.into(), g.into(), b.into(), a))
        }
        _ => Err(invalid(literal)),
    }
}

/// Parses `rgb(r, g, b)` / `rgba(r, g, b, a)` argument lists.
fn parse_rgb(literal: &str, args: &[&str], with_alpha: bool) -> Result<Hsla, ThemeError> {
    let expected = if with_alpha { 4 } else { 3 };
    if args.len() != expected {
        return Err(invalid(literal));
    }

    let channel = |arg: &str| -> Result<f64, ThemeError> {
        let value: f64 = arg.parse().map_err(|_| invalid(literal))?;
        if !(0.0..=255.0).contains(&value) {
            return Err(invalid(literal));
        }
        Ok(value)
    };

    let r = channel(args[0])?;
    let g = channel(args[1])?;
    let b = channel(args[2])?;
    let alpha = if with_alpha {
        parse_alpha(literal, args[3])?
    } else {
        1.0
    };

    Ok(rgb_to_hsla(r, g, b, alpha))
}

/// Parses `hsl(h, s%, l%)` / `hsla(h, s%, l%, a)` argument lists.
///
/// Hue wraps modulo 360 (negative hues are valid CSS); saturation and
/// lightness accept an optional `%` suffix and clamp to `[0, 100]`.
fn parse_hsl(literal: &str, args: &[&str], with_alpha: bool) -> Result<Hsla, ThemeError> {
    let expected = if with_alpha { 4 } else { 3 };
    if args.len() != expected {
        return Err(invalid(literal));
    }

    let hue: f64 = args[0].parse().map_err(|_| invalid(literal))?;
    if !hue.is_finite() {
        return Err(invalid(literal));
    }

    let percent = |arg: &str| -> Result<f64, ThemeError> {
        let raw = arg.strip_suffix('%').unwrap_or(arg).trim();
        let value: f64 = raw.parse().map_err(|_| invalid(literal))?;
        if !value.is_finite() {
            return Err(invalid(literal));
        }
        Ok(value.clamp(0.0, 100.0))
    };

    let saturation = percent(args[1])?;
    let lightness = percent(args[2])?;
    let alpha = if with_alpha {
        parse_alpha(literal, args[3])?
    } else {
        1.0
    };

    Ok(Hsla::new(hue, saturation, lightness, alpha))
}

/// Parses an alpha component, clamped to `[0, 1]`.
fn parse_alpha(literal: &str, arg: &str) -> Result<f64, ThemeError> {
    let value: f64 = arg.parse().map_err(|_| invalid(literal))?;
    if !value.is_finite() {
        return Err(invalid(literal));
    }
    Ok(value.clamp(0.0, 1.0))
}

/// Parses one of the 16 basic CSS color names.
fn parse_named(literal: &str, lower: &str) -> Result<Hsla, ThemeError> {
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, [r, g, b])| {
            rgb_to_hsla(f64::from(*r), f64::from(*g), f64::from(*b), 1.0)
        })
        .ok_or_else(|| invalid(literal))
}
