//! Canonical color representation and CSS serialization.
//!
//! All derivation math operates on [`Hsla`]: hue in degrees, saturation and
//! lightness as percentages, alpha as a fraction. The representation is
//! independent of the literal syntax a color was parsed from — `#0870D9`,
//! `rgb(8, 112, 217)` and `hsl(210, 93%, 44%)` all produce the same value.
//!
//! # Out-of-range channels
//!
//! Variant derivation is additive HSL arithmetic and may push saturation or
//! lightness outside `[0, 100]` for extreme base colors. Intermediate values
//! are kept as-is; clamping happens once, in [`Hsla::to_css`], the single
//! serialization boundary.

/// A color in hue/saturation/lightness/alpha form.
///
/// Immutable value type: produced by the parser or by channel arithmetic on
/// an existing value. Hue is normalized to `[0, 360)` at construction;
/// saturation and lightness are nominally `[0, 100]` but intermediate
/// derivation results may exceed that range (see module docs).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    /// Hue in degrees, `[0, 360)`.
    pub hue: f64,
    /// Saturation percentage, nominally `[0, 100]`.
    pub saturation: f64,
    /// Lightness percentage, nominally `[0, 100]`.
    pub lightness: f64,
    /// Alpha fraction, `[0, 1]`.
    pub alpha: f64,
}

impl Hsla {
    /// Creates a new color, wrapping hue into `[0, 360)`.
    ///
    /// Saturation, lightness and alpha are stored as given — derivation
    /// arithmetic is allowed to produce out-of-range intermediates.
    #[must_use]
    pub fn new(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self {
            hue: hue.rem_euclid(360.0),
            saturation,
            lightness,
            alpha,
        }
    }

    /// Creates an opaque color (alpha 1).
    #[must_use]
    pub fn opaque(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self::new(hue, saturation, lightness, 1.0)
    }

    /// Returns a copy with lightness replaced.
    #[must_use]
    pub fn with_lightness(self, lightness: f64) -> Self {
        Self { lightness, ..self }
    }

    /// Returns a copy with lightness shifted by `delta` percentage points.
    #[must_use]
    pub fn lighten(self, delta: f64) -> Self {
        Self {
            lightness: self.lightness + delta,
            ..self
        }
    }

    /// Returns a copy with saturation shifted by `delta` percentage points.
    #[must_use]
    pub fn saturate(self, delta: f64) -> Self {
        Self {
            saturation: self.saturation + delta,
            ..self
        }
    }

    /// Serializes to a canonical CSS `hsla(h, s%, l%, a)` string.
    ///
    /// This is the clamping boundary: hue is wrapped to `[0, 360)`,
    /// saturation and lightness are clamped to `[0, 100]`, alpha to `[0, 1]`.
    /// Hue, saturation and lightness are rounded to whole numbers, alpha to
    /// two decimal places.
    #[must_use]
    pub fn to_css(&self) -> String {
        let hue = self.hue.rem_euclid(360.0).round().rem_euclid(360.0);
        let saturation = self.saturation.clamp(0.0, 100.0).round();
        let lightness = self.lightness.clamp(0.0, 100.0).round();
        format!(
            "hsla({}, {}%, {}%, {})",
            hue as i64,
            saturation as i64,
            lightness as i64,
            format_alpha(self.alpha)
        )
    }
}

/// Formats an alpha fraction, clamped to `[0, 1]` and rounded to two
/// decimal places, without trailing zeros (`1`, `0.5`, `0.25`).
fn format_alpha(alpha: f64) -> String {
    let rounded = (alpha.clamp(0.0, 1.0) * 100.0).round() / 100.0;
    format!("{rounded}")
}

/// Converts 8-bit sRGB channels (0–255) to [`Hsla`].
#[must_use]
pub(crate) fn rgb_to_hsla(r: f64, g: f64, b: f64, alpha: f64) -> Hsla {
    let r = r / 255.0;
    let g = g / 255.0;
    let b = b / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;
    let delta = max - min;

    if delta == 0.0 {
        // Achromatic: hue is meaningless, canonicalize to 0.
        return Hsla::new(0.0, 0.0, lightness * 100.0, alpha);
    }

    let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());
    let hue = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    } * 60.0;

    Hsla::new(hue, saturation * 100.0, lightness * 100.0, alpha)
}

/// Converts an [`Hsla`] to linear-range sRGB channels (each 0.0–1.0).
///
/// Out-of-range saturation/lightness are clamped first; this is only used
/// for luminance classification of parsed (in-range) colors.
#[must_use]
pub(crate) fn hsla_to_rgb_unit(color: &Hsla) -> (f64, f64, f64) {
    let hue = color.hue.rem_euclid(360.0);
    let saturation = (color.saturation / 100.0).clamp(0.0, 1.0);
    let lightness = (color.lightness / 100.0).clamp(0.0, 1.0);

    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let hue_prime = hue / 60.0;
    let x = chroma * (1.0 - (hue_prime % 2.0 - 1.0).abs());

    let (r1, g1, b1) = match hue_prime as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let m = lightness - chroma / 2.0;
    (r1 + m, g1 + m, b1 + m)
}
