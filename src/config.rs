//! Configuration file handling for pbm2frame.
//!
//! Loads configuration from `<config dir>/pbm2frame/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::codegen::OutputStyle;
use crate::glyphs::GlyphSet;

/// Configuration file structure for pbm2frame.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub glyphs: GlyphConfig,
}

/// Wrapper text around the generated rows.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    pub declaration: Option<String>,
    pub constructor: Option<String>,
    pub indent: Option<String>,
}

/// Glyphs for set and unset pixels. Each must be a single character.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct GlyphConfig {
    pub set: Option<String>,
    pub unset: Option<String>,
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            log::debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Read {
                path: path.clone(),
                source: e,
            })?;
            Self::parse(&content).map_err(|e| match e {
                ConfigError::Parse { source, .. } => ConfigError::Parse { path, source },
                other => other,
            })
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            source: e,
        })?;
        // Reject bad glyphs at load time rather than on first use.
        config.glyph_set()?;
        Ok(config)
    }

    /// Output style with built-in defaults for anything unset.
    pub fn output_style(&self) -> OutputStyle {
        let defaults = OutputStyle::default();
        OutputStyle {
            declaration: self
                .output
                .declaration
                .clone()
                .unwrap_or(defaults.declaration),
            constructor: self
                .output
                .constructor
                .clone()
                .unwrap_or(defaults.constructor),
            indent: self.output.indent.clone().unwrap_or(defaults.indent),
        }
    }

    /// Configured glyphs, with the block style filling in unset values.
    pub fn glyph_set(&self) -> Result<GlyphSet, ConfigError> {
        let fallback = GlyphSet::default();
        let set = match &self.glyphs.set {
            Some(s) => single_char("set", s)?,
            None => fallback.set,
        };
        let unset = match &self.glyphs.unset {
            Some(s) => single_char("unset", s)?,
            None => fallback.unset,
        };
        Ok(GlyphSet::new(set, unset))
    }
}

fn single_char(key: &'static str, value: &str) -> Result<char, ConfigError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::InvalidGlyph {
            key,
            value: value.to_string(),
        }),
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid glyph for '{key}': expected exactly one character, got {value:?}")]
    InvalidGlyph { key: &'static str, value: String },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("pbm2frame").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/pbm2frame/config.toml")
        })
}
