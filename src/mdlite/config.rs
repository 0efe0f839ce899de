//! Configuration loading
//!
//! `defaults/mdlite.default.toml` is embedded into the crate so that documented defaults and
//! runtime behavior stay in sync. Callers layer user files and single-key overrides on top of
//! those defaults via [`Loader`] before deserializing into [`MdliteConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use crossterm::style::Attribute;
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../../defaults/mdlite.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MdliteConfig {
    pub output: OutputConfig,
    pub console: ConsoleConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Registry name of the default output format
    pub format: String,
}

/// Styling used by the console renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ConsoleConfig {
    pub bold: TextStyle,
    pub emphasis: TextStyle,
}

/// The SGR attributes a span can be rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextStyle {
    Bold,
    Dim,
    Italic,
    Underlined,
    Reverse,
}

impl TextStyle {
    pub fn attribute(self) -> Attribute {
        match self {
            TextStyle::Bold => Attribute::Bold,
            TextStyle::Dim => Attribute::Dim,
            TextStyle::Italic => Attribute::Italic,
            TextStyle::Underlined => Attribute::Underlined,
            TextStyle::Reverse => Attribute::Reverse,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            bold: TextStyle::Bold,
            emphasis: TextStyle::Reverse,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MdliteConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdliteConfig, ConfigError> {
    Loader::new().build()
}
