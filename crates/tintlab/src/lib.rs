//! Deterministic brand-color palette derivation.
//!
//! An integrator configures a handful of brand colors by semantic role
//! (`surface`, `interactive`, `critical`, ...) and tintlab expands them into
//! a complete, stable set of CSS custom properties. Derivation is pure
//! arithmetic: each role's base color is parsed into HSL form, the surface
//! color classifies the theme as light or dark, and every variant is a fixed
//! hue/saturation/lightness offset from its base. Same theme in, same
//! palette out, always.
//!
//! # Quick start
//!
//! ```rust
//! use tintlab::{derive_palette, Theme};
//!
//! let theme = Theme::from_yaml(r##"
//! colors:
//!   interactive: "#0870D9"
//! "##)?;
//!
//! let palette = derive_palette(&theme)?;
//! assert_eq!(palette["--surface-background"], "hsla(0, 0%, 98%, 1)");
//! assert_eq!(palette["--interactive-action"], "hsla(210, 93%, 44%, 1)");
//! # Ok::<(), tintlab::ThemeError>(())
//! ```
//!
//! Color literals accept hex (`#RGB`, `#RRGGBB`, `#RRGGBBAA`),
//! `rgb()`/`rgba()`, `hsl()`/`hsla()`, and the CSS basic color names.

pub mod cli;
pub mod color;
pub mod custom_properties;
pub mod error;
pub mod luminance;
pub mod palette;
pub mod parse;
pub mod theme;

pub use color::Hsla;
pub use custom_properties::to_custom_property;
pub use error::ThemeError;
pub use luminance::{is_light, relative_luminance};
pub use palette::{derive_palette, to_css_block};
pub use parse::parse_color;
pub use theme::{Logo, Role, Theme, ThemeColors};
