//! Format registry for tree serialization
//!
//! Each format implements [`Formatter`] and is looked up by name through a
//! [`FormatRegistry`]. The CLI's `inspect --format` and `list-formats` are
//! thin wrappers around it.

use crate::attrdoc::ast::Node;
use std::collections::HashMap;
use std::fmt;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// A named serializer for attribute trees
pub trait Formatter: Send + Sync {
    /// The name the format is selected by (e.g. "tree", "json")
    fn name(&self) -> &str;

    /// Serialize a tree, starting at `root`
    fn serialize(&self, root: &Node) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing one with the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize `root` with the format called `format`
    pub fn serialize(&self, root: &Node, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(root)
    }

    /// All format names with their descriptions, sorted by name
    pub fn list_formats(&self) -> Vec<(&str, &str)> {
        let mut formats: Vec<_> = self
            .formatters
            .values()
            .map(|f| (f.name(), f.description()))
            .collect();
        formats.sort_unstable_by_key(|(name, _)| *name);
        formats
    }

    /// Registry holding the built-in formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::TreeFormatter);
        registry.register(super::TagFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
