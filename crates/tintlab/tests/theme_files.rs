//! Loading theme configs from disk.

use std::fs;

use tintlab::{derive_palette, Role, Theme, ThemeError};

#[test]
fn loads_yaml_theme_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.yaml");
    fs::write(
        &path,
        "colors:\n  surface: \"#202024\"\n  branded: \"#5C6AC4\"\n",
    )
    .unwrap();

    let theme = Theme::from_file(&path).unwrap();
    assert_eq!(theme.literal(Role::Surface), "#202024");
    assert_eq!(theme.literal(Role::Branded), "#5C6AC4");

    let palette = derive_palette(&theme).unwrap();
    // #202024 classifies the theme as dark.
    assert_eq!(palette["--surface-opposite"], "hsla(240, 6%, 100%, 1)");
}

#[test]
fn loads_json_theme_file_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.json");
    fs::write(&path, r##"{"colors": {"interactive": "#0870D9"}}"##).unwrap();

    let theme = Theme::from_file(&path).unwrap();
    assert_eq!(theme.literal(Role::Interactive), "#0870D9");
}

#[test]
fn missing_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.yaml");

    let err = Theme::from_file(&path).unwrap_err();
    match err {
        ThemeError::Load { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Load error, got {other:?}"),
    }
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.json");
    fs::write(&path, "{not json").unwrap();

    let err = Theme::from_file(&path).unwrap_err();
    assert!(matches!(err, ThemeError::Parse { .. }));
}

#[test]
fn bad_literal_in_file_fails_at_derivation_not_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.yaml");
    fs::write(&path, "colors:\n  warning: \"chartreuse-ish\"\n").unwrap();

    // Loading succeeds; the literal is only validated when deriving.
    let theme = Theme::from_file(&path).unwrap();
    let err = derive_palette(&theme).unwrap_err();
    assert!(matches!(
        err,
        ThemeError::InvalidColorFormat { ref value } if value == "chartreuse-ish"
    ));
}

#[test]
fn empty_file_yields_default_theme() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.yaml");
    fs::write(&path, "").unwrap();

    let theme = Theme::from_file(&path).unwrap();
    assert_eq!(theme, Theme::default());
}
