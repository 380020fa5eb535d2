//! Format-agnostic rendering of resolved configuration

use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::{Error, Result};

/// Output format for resolved trees and contexts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

impl OutputFormat {
    /// Detect the format from a file extension:
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    /// - `.toml` -> TOML
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        extension.parse()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            _ => Err(Error::UnsupportedFormat {
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Serialize `value` in the given format.
pub fn render<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<String> {
    let render_error = |message: String| Error::Render {
        format: format.as_str().to_uppercase(),
        message,
    };
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).map_err(|e| render_error(e.to_string()))
        }
        OutputFormat::Yaml => serde_yaml::to_string(value).map_err(|e| render_error(e.to_string())),
        OutputFormat::Toml => {
            toml::to_string_pretty(value).map_err(|e| render_error(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use rstest::rstest;

    #[rstest]
    #[case("json", OutputFormat::Json)]
    #[case("YAML", OutputFormat::Yaml)]
    #[case("yml", OutputFormat::Yaml)]
    #[case("toml", OutputFormat::Toml)]
    fn parses_format_names(#[case] name: &str, #[case] expected: OutputFormat) {
        assert_eq!(name.parse::<OutputFormat>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { .. }));
    }

    #[test]
    fn renders_nested_map_as_toml() {
        let mut inner = IndexMap::new();
        inner.insert("name", "dev");
        let mut outer = IndexMap::new();
        outer.insert("environment", inner);

        let rendered = render(&outer, OutputFormat::Toml).unwrap();
        assert!(rendered.contains("[environment]"));
        assert!(rendered.contains("name = \"dev\""));
    }
}
