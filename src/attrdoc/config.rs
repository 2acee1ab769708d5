//! Configuration loading
//!
//! `defaults/attrdoc.default.toml` is embedded into the library so the
//! documented defaults and the runtime behavior stay in sync. Callers layer
//! their own files and overrides on top through [`Loader`] before
//! deserializing into [`AttrdocConfig`].
//!
//! Tables merge key by key: a user file that adds `h2 = 2` under
//! `[render.headers]` keeps the default header tags.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../../defaults/attrdoc.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AttrdocConfig {
    pub inspect: InspectConfig,
    pub render: RenderConfig,
    pub check: CheckConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub format: String,
}

/// Which tags drive which HTML handler.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RenderConfig {
    /// Tag -> heading level
    pub headers: BTreeMap<String, u8>,
    pub paragraphs: Vec<String>,
    pub functions: Vec<String>,
    pub members: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckConfig {
    pub strict: bool,
}

impl AttrdocConfig {
    fn validate(self) -> Result<Self, ConfigError> {
        for (tag, level) in &self.render.headers {
            if !(1..=6).contains(level) {
                return Err(ConfigError::Message(format!(
                    "render.headers.{tag}: heading level must be between 1 and 6, got {level}"
                )));
            }
        }
        Ok(self)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            headers: [("h1", 1), ("h4", 4), ("h6", 6)]
                .into_iter()
                .map(|(tag, level)| (tag.to_string(), level))
                .collect(),
            paragraphs: vec!["p".to_string()],
            functions: vec!["fn".to_string()],
            members: vec!["member".to_string()],
        }
    }
}

/// Layers user configuration over the built-in defaults.
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

    /// Layer a configuration file. Missing files are an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<AttrdocConfig, ConfigError> {
        self.builder
            .build()?
            .try_deserialize::<AttrdocConfig>()?
            .validate()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<AttrdocConfig, ConfigError> {
    Loader::new().build()
}
