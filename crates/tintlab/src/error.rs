//! Error types for theme parsing and palette derivation.
//!
//! Errors originate only at the boundaries: parsing a color literal or
//! loading a config document. Every derivation-stage function is total over
//! well-formed [`Hsla`](crate::Hsla) input and cannot fail.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for theme configuration and palette derivation failures.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A color literal matched none of the supported grammars
    /// (hex, `rgb()`/`rgba()`, `hsl()`/`hsla()`, named).
    ///
    /// This is a configuration error: derivation aborts for the whole theme
    /// rather than silently substituting a default for the offending role.
    #[error("invalid color literal '{value}'")]
    InvalidColorFormat {
        /// The literal that failed to parse.
        value: String,
    },

    /// A theme config document (YAML or JSON) failed to deserialize.
    #[error("failed to parse theme config: {message}")]
    Parse {
        /// Error message from the underlying deserializer.
        message: String,
    },

    /// A theme config file could not be read.
    #[error("failed to load theme config from {}: {message}", .path.display())]
    Load {
        /// Path that was being read.
        path: PathBuf,
        /// Error message from the file loader.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_color_display_includes_literal() {
        let err = ThemeError::InvalidColorFormat {
            value: "not-a-color".to_string(),
        };
        assert!(err.to_string().contains("not-a-color"));
    }

    #[test]
    fn load_display_includes_path() {
        let err = ThemeError::Load {
            path: PathBuf::from("/tmp/theme.yaml"),
            message: "no such file".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/theme.yaml"));
        assert!(msg.contains("no such file"));
    }
}
