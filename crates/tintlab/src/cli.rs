//! Command-line entry point: theme config in, palette out.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use crate::palette::{derive_palette, to_css_block};
use crate::theme::Theme;

/// Serialization format for the derived palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// A CSS rule block declaring every custom property.
    Css,
    /// A JSON object mapping property names to values.
    Json,
    /// A YAML mapping of property names to values.
    Yaml,
}

/// Derive a CSS custom-property palette from a theme config.
#[derive(Debug, Parser)]
#[command(name = "tintlab", version, about)]
pub struct Cli {
    /// Theme config file (YAML or JSON). Omit for the default theme.
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value = "css")]
    pub output: OutputFormat,

    /// Selector wrapping the CSS output. Ignored for json/yaml.
    #[arg(long, default_value = ":root")]
    pub selector: String,
}

/// Renders the palette for the given invocation as a string, without
/// printing. Split out from [`run`] so tests can exercise the whole
/// pipeline on captured output.
pub fn render(cli: &Cli) -> anyhow::Result<String> {
    let theme = match &cli.config {
        Some(path) => Theme::from_file(path)?,
        None => Theme::default(),
    };
    let palette = derive_palette(&theme)?;

    let rendered = match cli.output {
        OutputFormat::Css => to_css_block(&cli.selector, &palette),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&palette)
                .context("serializing palette to JSON")?;
            json.push('\n');
            json
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(&palette).context("serializing palette to YAML")?
        }
    };
    Ok(rendered)
}

/// Parses arguments from the process environment and prints the palette.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    print!("{}", render(&cli)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_cli() -> Cli {
        Cli {
            config: None,
            output: OutputFormat::Css,
            selector: ":root".to_string(),
        }
    }

    #[test]
    fn css_output_wraps_in_selector() {
        let rendered = render(&default_cli()).unwrap();
        assert!(rendered.starts_with(":root {\n"));
        assert!(rendered.ends_with("}\n"));
        assert!(rendered.contains("  --surface-background: hsla(0, 0%, 98%, 1);\n"));
    }

    #[test]
    fn custom_selector() {
        let cli = Cli {
            selector: ".theme-scope".to_string(),
            ..default_cli()
        };
        let rendered = render(&cli).unwrap();
        assert!(rendered.starts_with(".theme-scope {\n"));
    }

    #[test]
    fn json_output_is_an_object() {
        let cli = Cli {
            output: OutputFormat::Json,
            ..default_cli()
        };
        let rendered = render(&cli).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(
            parsed["--interactive-action"],
            serde_json::json!("hsla(210, 93%, 44%, 1)")
        );
    }

    #[test]
    fn yaml_output_round_trips() {
        let cli = Cli {
            output: OutputFormat::Yaml,
            ..default_cli()
        };
        let rendered = render(&cli).unwrap();
        let parsed: std::collections::BTreeMap<String, String> =
            serde_yaml::from_str(&rendered).unwrap();
        assert_eq!(parsed.len(), 46);
        assert_eq!(parsed["--branded-text"], "hsla(165, 100%, 30%, 1)");
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let cli = Cli {
            config: Some(PathBuf::from("/nonexistent/theme.yaml")),
            ..default_cli()
        };
        assert!(render(&cli).is_err());
    }

    #[test]
    fn args_parse_with_defaults() {
        use clap::Parser;
        let cli = Cli::parse_from(["tintlab"]);
        assert_eq!(cli.output, OutputFormat::Css);
        assert_eq!(cli.selector, ":root");
        assert!(cli.config.is_none());
    }

    #[test]
    fn args_parse_explicit_format() {
        use clap::Parser;
        let cli = Cli::parse_from(["tintlab", "theme.yaml", "--output", "json"]);
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.config, Some(PathBuf::from("theme.yaml")));
    }
}
