//! Theme configuration supplied by the integrator.
//!
//! A [`Theme`] carries up to nine brand colors keyed by semantic role, plus
//! an optional logo descriptor. Every role is optional: omitted roles fall
//! back to fixed default literals that define the out-of-the-box brand look.
//! Unknown keys in serialized input are ignored, never an error, so configs
//! stay forward-compatible.
//!
//! Themes can be constructed programmatically or loaded from YAML/JSON:
//!
//! ```rust
//! use tintlab::Theme;
//!
//! let theme = Theme::from_yaml(r##"
//! colors:
//!   surface: "#FAFAFA"
//!   branded: "#008060"
//! "##).unwrap();
//! assert_eq!(theme.colors.unwrap().branded.as_deref(), Some("#008060"));
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// A semantic color role an integrator configures once.
///
/// Role names are a closed, known set; each role has a fixed default literal
/// used when the config omits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Page/background surfaces.
    Surface,
    /// Text and icons sitting on surfaces.
    OnSurface,
    /// Primary interactive elements (links, buttons).
    Interactive,
    /// Neutral interactive surfaces (elevation ramp).
    InteractiveNeutral,
    /// Brand accent.
    Branded,
    /// Destructive/error states.
    Critical,
    /// Warning states.
    Warning,
    /// Informational highlights.
    Highlight,
    /// Success states.
    Success,
}

impl Role {
    /// All roles, in derivation order.
    pub const ALL: [Role; 9] = [
        Role::Surface,
        Role::OnSurface,
        Role::Interactive,
        Role::InteractiveNeutral,
        Role::Branded,
        Role::Critical,
        Role::Warning,
        Role::Highlight,
        Role::Success,
    ];

    /// The role's config key, as it appears in serialized themes.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Role::Surface => "surface",
            Role::OnSurface => "onSurface",
            Role::Interactive => "interactive",
            Role::InteractiveNeutral => "interactiveNeutral",
            Role::Branded => "branded",
            Role::Critical => "critical",
            Role::Warning => "warning",
            Role::Highlight => "highlight",
            Role::Success => "success",
        }
    }

    /// The default color literal used when the config omits this role.
    #[must_use]
    pub const fn default_literal(self) -> &'static str {
        match self {
            Role::Surface => "#FAFAFA",
            Role::OnSurface => "#202024",
            Role::Interactive => "#0870D9",
            Role::InteractiveNeutral => "#EAEAEB",
            Role::Branded => "#008060",
            Role::Critical => "#E32727",
            Role::Warning => "#FFC453",
            Role::Highlight => "#59D0C2",
            Role::Success => "#008060",
        }
    }
}

/// Brand colors keyed by semantic role. All fields optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_surface: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interactive: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interactive_neutral: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branded: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
}

impl ThemeColors {
    /// Returns the configured literal for a role, if any.
    #[must_use]
    pub fn literal(&self, role: Role) -> Option<&str> {
        let field = match role {
            Role::Surface => &self.surface,
            Role::OnSurface => &self.on_surface,
            Role::Interactive => &self.interactive,
            Role::InteractiveNeutral => &self.interactive_neutral,
            Role::Branded => &self.branded,
            Role::Critical => &self.critical,
            Role::Warning => &self.warning,
            Role::Highlight => &self.highlight,
            Role::Success => &self.success,
        };
        field.as_deref()
    }
}

/// Logo descriptor carried on the theme config.
///
/// Consumed by hosting chrome (top bars, save bars), not by palette
/// derivation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Logo {
    /// Path for a logo used on a dark background.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_bar_source: Option<String>,
    /// Path for a logo used on a light background.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contextual_save_bar_source: Option<String>,
    /// Destination for clicks on the logo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Accessible label for the logo image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility_label: Option<String>,
    /// Width of the logo image in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

/// Integrator-supplied theme configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Brand colors keyed by role. Omitted roles use fixed defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ThemeColors>,
    /// Optional logo descriptor; unused by palette derivation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
}

impl Theme {
    /// Returns the effective literal for a role: the configured value when
    /// present, the role's fixed default otherwise.
    #[must_use]
    pub fn literal(&self, role: Role) -> &str {
        self.colors
            .as_ref()
            .and_then(|colors| colors.literal(role))
            .unwrap_or_else(|| role.default_literal())
    }

    /// Parses a theme config from YAML content.
    ///
    /// Unknown keys are ignored for forward compatibility, and an empty
    /// document yields the default theme.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Parse`] if the document is malformed.
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| ThemeError::Parse {
            message: e.to_string(),
        })
    }

    /// Parses a theme config from JSON content.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Parse`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        serde_json::from_str(json).map_err(|e| ThemeError::Parse {
            message: e.to_string(),
        })
    }

    /// Loads a theme config from a file, choosing the format by extension
    /// (`.json` for JSON, anything else parses as YAML, which is a superset
    /// of JSON anyway).
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Load`] if the file cannot be read and
    /// [`ThemeError::Parse`] if its content is malformed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ThemeError::Load {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_yaml(&content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_theme_uses_defaults() {
        let theme = Theme::default();
        assert_eq!(theme.literal(Role::Surface), "#FAFAFA");
        assert_eq!(theme.literal(Role::Interactive), "#0870D9");
        assert_eq!(theme.literal(Role::Success), "#008060");
    }

    #[test]
    fn configured_literal_wins() {
        let theme = Theme {
            colors: Some(ThemeColors {
                surface: Some("#202024".to_string()),
                ..ThemeColors::default()
            }),
            logo: None,
        };
        assert_eq!(theme.literal(Role::Surface), "#202024");
        // Other roles still default.
        assert_eq!(theme.literal(Role::Branded), "#008060");
    }

    #[test]
    fn role_names_are_camel_case() {
        assert_eq!(Role::OnSurface.name(), "onSurface");
        assert_eq!(Role::InteractiveNeutral.name(), "interactiveNeutral");
    }

    #[test]
    fn from_yaml_camel_case_keys() {
        let theme = Theme::from_yaml(
            r##"
colors:
  onSurface: "#111111"
  interactiveNeutral: "#EEEEEE"
"##,
        )
        .unwrap();
        assert_eq!(theme.literal(Role::OnSurface), "#111111");
        assert_eq!(theme.literal(Role::InteractiveNeutral), "#EEEEEE");
    }

    #[test]
    fn from_yaml_ignores_unknown_keys() {
        let theme = Theme::from_yaml(
            r##"
colors:
  surface: "#FAFAFA"
  surprise: "#123456"
futureSetting: true
"##,
        )
        .unwrap();
        assert_eq!(theme.literal(Role::Surface), "#FAFAFA");
    }

    #[test]
    fn from_yaml_rejects_malformed_documents() {
        let err = Theme::from_yaml("colors: [not: a: mapping").unwrap_err();
        assert!(matches!(err, ThemeError::Parse { .. }));
    }

    #[test]
    fn from_json_round_trip() {
        let theme = Theme::from_json(r##"{"colors": {"branded": "#eeeeee"}}"##).unwrap();
        assert_eq!(theme.literal(Role::Branded), "#eeeeee");

        let serialized = serde_json::to_string(&theme).unwrap();
        let reparsed = Theme::from_json(&serialized).unwrap();
        assert_eq!(theme, reparsed);
    }

    #[test]
    fn logo_fields_deserialize() {
        let theme = Theme::from_yaml(
            r#"
logo:
  topBarSource: "/logo-dark.svg"
  url: "https://example.com"
  width: 124
"#,
        )
        .unwrap();
        let logo = theme.logo.unwrap();
        assert_eq!(logo.top_bar_source.as_deref(), Some("/logo-dark.svg"));
        assert_eq!(logo.width, Some(124));
        assert_eq!(logo.contextual_save_bar_source, None);
    }
}
