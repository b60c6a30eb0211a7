//! Perceptual light/dark classification.
//!
//! The classifier converts a color to linear-light sRGB and computes
//! relative luminance with the standard BT.709 weights
//! (`0.2126 R + 0.7152 G + 0.0722 B`). A color is "light" when its luminance
//! reaches the midpoint of the achievable `[0, 1]` range.
//!
//! This single boolean is the only piece of derivation state threaded
//! through palette generation: it is computed once per pass, from the
//! `surface` role's base color, and passed explicitly to every role deriver.

use crate::color::{hsla_to_rgb_unit, Hsla};

/// Converts a gamma-encoded sRGB channel (0.0–1.0) to linear light.
fn srgb_to_linear(channel: f64) -> f64 {
    if channel <= 0.04045 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// Computes relative luminance (0.0 = black, 1.0 = white).
#[must_use]
pub fn relative_luminance(color: &Hsla) -> f64 {
    let (r, g, b) = hsla_to_rgb_unit(color);
    0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
}

/// Classifies a color as light (`true`) or dark (`false`).
///
/// # Example
///
/// ```rust
/// use tintlab::{is_light, parse_color};
///
/// assert!(is_light(&parse_color("#FFFFFF").unwrap()));
/// assert!(!is_light(&parse_color("#000000").unwrap()));
/// ```
#[must_use]
pub fn is_light(color: &Hsla) -> bool {
    relative_luminance(color) >= 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_color;

    #[test]
    fn white_is_light() {
        assert!(is_light(&parse_color("#FFFFFF").unwrap()));
    }

    #[test]
    fn black_is_dark() {
        assert!(!is_light(&parse_color("#000000").unwrap()));
    }

    #[test]
    fn default_surface_is_light() {
        assert!(is_light(&parse_color("#FAFAFA").unwrap()));
    }

    #[test]
    fn dark_gray_surface_is_dark() {
        assert!(!is_light(&parse_color("#202024").unwrap()));
    }

    #[test]
    fn classification_is_format_independent() {
        for literal in ["#FFFFFF", "white", "rgb(255, 255, 255)", "hsl(0, 0%, 100%)"] {
            assert!(is_light(&parse_color(literal).unwrap()), "{literal}");
        }
        for literal in ["#000000", "black", "rgb(0, 0, 0)", "hsl(0, 0%, 0%)"] {
            assert!(!is_light(&parse_color(literal).unwrap()), "{literal}");
        }
    }

    #[test]
    fn luminance_weights_favor_green() {
        let green = relative_luminance(&parse_color("#00FF00").unwrap());
        let red = relative_luminance(&parse_color("#FF0000").unwrap());
        let blue = relative_luminance(&parse_color("#0000FF").unwrap());
        assert!(green > red);
        assert!(red > blue);
    }

    #[test]
    fn luminance_endpoints() {
        let white = relative_luminance(&parse_color("#FFFFFF").unwrap());
        let black = relative_luminance(&parse_color("#000000").unwrap());
        assert!((white - 1.0).abs() < 1e-6);
        assert!(black.abs() < 1e-9);
    }

    #[test]
    fn mid_gray_is_below_midpoint() {
        // Gamma-encoded #808080 linearizes to ~0.216, well below 0.5.
        assert!(!is_light(&parse_color("#808080").unwrap()));
    }
}
