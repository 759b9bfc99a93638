//! Construction-time style for [`PageIndicator`](crate::indicator::PageIndicator).
//!
//! Styles come either from code (struct literal over [`Default`]) or from a
//! declarative TOML style file:
//!
//! ```toml
//! current_page_color = "#ffffff"
//! indicator_color = "dark gray"
//! animated = true
//! density = 2.0
//! ```
//!
//! Every key is optional. Colors accept anything ratatui's `Color` parser
//! accepts: named colors, indexed colors (`"42"`) and `#rrggbb`.

use ratatui::style::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ==========================================================================
// Defaults
// ==========================================================================

/// Highlighted dot color. Terminals have no alpha channel, so plain white
/// stands in for translucent white.
pub const DEFAULT_CURRENT_PAGE_COLOR: Color = Color::White;

/// Color of the non-highlighted dots, standing in for translucent black.
pub const DEFAULT_OTHER_PAGE_COLOR: Color = Color::DarkGray;

/// Distance between dot centers before density scaling, in pixels.
pub const DEFAULT_SPACING: f32 = 8.0;

/// Dot radius before density scaling, in pixels.
pub const DEFAULT_SIZE: f32 = 2.0;

/// Pixels per density-independent unit.
pub const DEFAULT_DENSITY: f32 = 1.0;

/// Errors produced while reading a style file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The style file could not be read.
    #[error("failed to read style file {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML or has unexpected keys or types.
    #[error("invalid style file: {0}")]
    Parse(#[from] toml::de::Error),
    /// A color value could not be parsed.
    #[error("invalid color for `{key}`: {value:?}")]
    InvalidColor {
        /// Style key holding the bad value.
        key: &'static str,
        /// The rejected value.
        value: String,
    },
    /// Density must be finite and greater than zero.
    #[error("density must be a positive finite number, got {0}")]
    InvalidDensity(f32),
    /// Spacing and size must be finite and non-negative.
    #[error("`{key}` must be a non-negative finite number, got {value}")]
    InvalidDimension {
        /// Style key holding the bad value.
        key: &'static str,
        /// The rejected value.
        value: f32,
    },
}

/// Construction-time configuration of a page indicator.
///
/// `spacing` and `size` are density-independent; the indicator multiplies
/// them by `density` exactly once when it is built.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorConfig {
    /// Color of the highlighted dot.
    pub current_page_color: Color,
    /// Color of every other dot.
    pub other_page_color: Color,
    /// Whether fractional scroll progress slides the highlight.
    pub animated: bool,
    /// Display density factor applied to `spacing` and `size`.
    pub density: f32,
    /// Distance between dot centers.
    pub spacing: f32,
    /// Dot radius.
    pub size: f32,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            current_page_color: DEFAULT_CURRENT_PAGE_COLOR,
            other_page_color: DEFAULT_OTHER_PAGE_COLOR,
            animated: false,
            density: DEFAULT_DENSITY,
            spacing: DEFAULT_SPACING,
            size: DEFAULT_SIZE,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct StyleFile {
    current_page_color: Option<String>,
    indicator_color: Option<String>,
    animated: Option<bool>,
    density: Option<f32>,
    spacing: Option<f32>,
    size: Option<f32>,
}

impl IndicatorConfig {
    /// Spacing in pixels.
    pub fn scaled_spacing(&self) -> f32 {
        self.spacing * self.density
    }

    /// Dot radius in pixels.
    pub fn scaled_size(&self) -> f32 {
        self.size * self.density
    }

    /// Parse a TOML style document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let file: StyleFile = toml::from_str(source)?;
        let defaults = Self::default();

        let config = Self {
            current_page_color: parse_color("current_page_color", file.current_page_color)?
                .unwrap_or(defaults.current_page_color),
            other_page_color: parse_color("indicator_color", file.indicator_color)?
                .unwrap_or(defaults.other_page_color),
            animated: file.animated.unwrap_or(defaults.animated),
            density: file.density.unwrap_or(defaults.density),
            spacing: file.spacing.unwrap_or(defaults.spacing),
            size: file.size.unwrap_or(defaults.size),
        };
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML style file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), ?config, "loaded indicator style");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(ConfigError::InvalidDensity(self.density));
        }
        for (key, value) in [("spacing", self.spacing), ("size", self.size)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDimension { key, value });
            }
        }
        Ok(())
    }
}

fn parse_color(key: &'static str, value: Option<String>) -> Result<Option<Color>, ConfigError> {
    value
        .map(|value| Color::from_str(&value).map_err(|_| ConfigError::InvalidColor { key, value }))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = IndicatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, IndicatorConfig::default());
    }

    #[test]
    fn recognized_keys_override_defaults() {
        let config = IndicatorConfig::from_toml_str(
            r##"
            current_page_color = "#ff8800"
            indicator_color = "cyan"
            animated = true
            density = 2.0
            "##,
        )
        .unwrap();

        assert_eq!(config.current_page_color, Color::Rgb(255, 136, 0));
        assert_eq!(config.other_page_color, Color::Cyan);
        assert!(config.animated);
        assert_eq!(config.scaled_spacing(), 16.0);
        assert_eq!(config.scaled_size(), 4.0);
    }

    #[test]
    fn bad_color_names_the_key() {
        let err = IndicatorConfig::from_toml_str(r#"indicator_color = "not-a-color""#).unwrap_err();
        match err {
            ConfigError::InvalidColor { key, value } => {
                assert_eq!(key, "indicator_color");
                assert_eq!(value, "not-a-color");
            }
            other => panic!("expected InvalidColor, got {other:?}"),
        }
    }

    #[test]
    fn non_positive_density_is_rejected() {
        let err = IndicatorConfig::from_toml_str("density = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDensity(d) if d == 0.0));
    }

    #[test]
    fn negative_spacing_is_rejected() {
        let err = IndicatorConfig::from_toml_str("spacing = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDimension { key: "spacing", .. }));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = IndicatorConfig::from_toml_str("dot_shape = \"square\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("indicator.toml");
        std::fs::write(&path, "animated = true\n").expect("failed to write style file");

        let config = IndicatorConfig::load(&path).expect("style should load");
        assert!(config.animated);
    }

    #[test]
    fn load_missing_file_reports_path() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("missing.toml");

        let err = IndicatorConfig::load(&path).unwrap_err();
        match err {
            ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected Io, got {other:?}"),
        }
    }
}
