//! Mapping from camelCase variant tokens to CSS custom-property names.

/// Converts a camelCase variant token to a CSS custom-property name.
///
/// The name gains a `--` prefix, a hyphen before every uppercase letter and
/// before every run of digits, and is lowercased:
///
/// ```rust
/// use tintlab::to_custom_property;
///
/// assert_eq!(to_custom_property("surfaceBackground"), "--surface-background");
/// assert_eq!(
///     to_custom_property("interactiveNeutralElevation10"),
///     "--interactive-neutral-elevation-10"
/// );
/// ```
#[must_use]
pub fn to_custom_property(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 8);
    out.push_str("--");
    let mut in_digit_run = false;
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
            in_digit_run = false;
        } else if ch.is_ascii_digit() {
            // Digits separate as a run: "Elevation10" becomes
            // "elevation-10", not "elevation-1-0".
            if !in_digit_run {
                out.push('-');
            }
            out.push(ch);
            in_digit_run = true;
        } else {
            out.push(ch);
            in_digit_run = false;
        }
    }
    out
}
