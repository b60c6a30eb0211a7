//! Palette derivation: brand colors in, CSS custom properties out.
//!
//! Each configured role expands into a fixed family of variants through
//! additive HSL arithmetic on the role's base color. The offsets are part of
//! the design-system contract and never vary at runtime; the only derivation
//! state is a single light/dark flag classified from the `surface` role.
//!
//! The full pass is [`derive_palette`]: literals are parsed up front (any
//! invalid literal aborts the whole theme), variants are generated per role,
//! and the result lands in a `BTreeMap` keyed by custom-property name so
//! iteration order is stable across runs.

use std::collections::BTreeMap;

use crate::color::Hsla;
use crate::custom_properties::to_custom_property;
use crate::error::ThemeError;
use crate::luminance::is_light;
use crate::parse::parse_color;
use crate::theme::{Role, Theme};

/// Lightness deltas for the neutral elevation ramp, levels 0 through 5.
/// Added to the base on light surfaces, subtracted on dark ones.
const ELEVATION_OFFSETS: [f64; 6] = [8.0, 2.0, 0.0, -6.0, -16.0, -26.0];

/// Variants for the `surface` role: fixed lightness levels on the base hue
/// and saturation, mirrored between light and dark themes.
fn surface_variants(base: Hsla, light: bool, out: &mut Vec<(String, Hsla)>) {
    let level = |on_light: f64, on_dark: f64| {
        base.with_lightness(if light { on_light } else { on_dark })
    };
    out.push(("surfaceBackground".to_string(), level(98.0, 2.0)));
    out.push(("surfaceForeground".to_string(), level(100.0, 0.0)));
    out.push(("surfaceForegroundSubdued".to_string(), level(90.0, 10.0)));
    out.push(("surfaceOpposite".to_string(), level(0.0, 100.0)));
}

/// Variants for the `onSurface` role: icon tones that keep contrast against
/// the surface family.
fn on_surface_variants(base: Hsla, light: bool, out: &mut Vec<(String, Hsla)>) {
    let level = |on_light: f64, on_dark: f64| {
        base.with_lightness(if light { on_light } else { on_dark })
    };
    out.push(("iconOnSurface".to_string(), level(18.0, 82.0)));
    out.push(("iconDisabledOnSurface".to_string(), level(68.0, 32.0)));
}

/// Variants for the `interactive` role: action and selection states as
/// fixed deltas from the base, identical in light and dark themes.
fn interactive_variants(base: Hsla, out: &mut Vec<(String, Hsla)>) {
    out.push(("interactiveAction".to_string(), base));
    out.push(("interactiveActionDisabled".to_string(), base.lighten(14.0)));
    out.push((
        "interactiveActionHovered".to_string(),
        base.saturate(7.0).lighten(-7.0),
    ));
    out.push(("interactiveActionMuted".to_string(), base.lighten(7.0)));
    out.push((
        "interactiveActionPressed".to_string(),
        base.saturate(7.0).lighten(-13.0),
    ));
    out.push(("interactiveFocus".to_string(), base.saturate(7.0).lighten(14.0)));
    out.push((
        "interactiveSelected".to_string(),
        base.saturate(7.0).lighten(52.0),
    ));
    out.push((
        "interactiveSelectedHovered".to_string(),
        base.saturate(-30.0).lighten(45.0),
    ));
    out.push((
        "interactiveSelectedPressed".to_string(),
        base.saturate(-30.0).lighten(38.0),
    ));
}

/// Variants for the `interactiveNeutral` role: a six-level elevation ramp
/// that brightens on light surfaces and darkens on dark ones.
fn interactive_neutral_variants(base: Hsla, light: bool, out: &mut Vec<(String, Hsla)>) {
    for (level, offset) in ELEVATION_OFFSETS.iter().enumerate() {
        let delta = if light { *offset } else { -*offset };
        out.push((
            format!("interactiveNeutralElevation{level}"),
            base.lighten(delta),
        ));
    }
}

/// Variants shared by the five status roles (`branded`, `critical`,
/// `warning`, `highlight`, `success`): the base itself for dividers and
/// icons, plus fixed-lightness surface and text tones.
fn status_variants(prefix: &str, base: Hsla, out: &mut Vec<(String, Hsla)>) {
    out.push((format!("{prefix}Divider"), base));
    out.push((format!("{prefix}Icon"), base));
    out.push((format!("{prefix}Surface"), base.with_lightness(88.0)));
    out.push((format!("{prefix}SurfaceMuted"), base.with_lightness(98.0)));
    out.push((format!("{prefix}Text"), base.with_lightness(30.0)));
}

/// Derives the full custom-property palette for a theme.
///
/// Every role contributes its variant family; omitted roles use their fixed
/// default literals, so the result always contains the complete set of
/// properties. Keys are CSS custom-property names (`--surface-background`),
/// values are canonical `hsla()` strings.
///
/// ```rust
/// use tintlab::{derive_palette, Theme};
///
/// let palette = derive_palette(&Theme::default()).unwrap();
/// assert_eq!(palette["--surface-background"], "hsla(0, 0%, 98%, 1)");
/// ```
///
/// # Errors
///
/// Returns [`ThemeError::InvalidColorFormat`] if any configured literal
/// fails to parse; no partial palette is produced.
pub fn derive_palette(theme: &Theme) -> Result<BTreeMap<String, String>, ThemeError> {
    // Parse everything before deriving anything, so a bad literal for a
    // late role cannot leave a half-built palette behind.
    let mut bases: Vec<(Role, Hsla)> = Vec::with_capacity(Role::ALL.len());
    for role in Role::ALL {
        bases.push((role, parse_color(theme.literal(role))?));
    }

    let surface = bases[0].1;
    let light = is_light(&surface);

    let mut variants: Vec<(String, Hsla)> = Vec::new();
    for (role, base) in bases {
        match role {
            Role::Surface => surface_variants(base, light, &mut variants),
            Role::OnSurface => on_surface_variants(base, light, &mut variants),
            Role::Interactive => interactive_variants(base, &mut variants),
            Role::InteractiveNeutral => {
                interactive_neutral_variants(base, light, &mut variants)
            }
            Role::Branded
            | Role::Critical
            | Role::Warning
            | Role::Highlight
            | Role::Success => status_variants(role.name(), base, &mut variants),
        }
    }

    Ok(variants
        .into_iter()
        .map(|(name, color)| (to_custom_property(&name), color.to_css()))
        .collect())
}

/// Renders a palette as a CSS rule block for the given selector.
///
/// One declaration per line, two-space indent, trailing newline:
///
/// ```text
/// :root {
///   --branded-divider: hsla(165, 100%, 25%, 1);
///   ...
/// }
/// ```
#[must_use]
pub fn to_css_block(selector: &str, palette: &BTreeMap<String, String>) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    out.push_str(selector);
    out.push_str(" {\n");
    for (name, value) in palette {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "  {name}: {value};");
    }
    out.push_str("}\n");
    out
}
