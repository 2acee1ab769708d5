//! Tag-driven handler dispatch
//!
//! A [`Registry`] maps tags to handler factories. [`process`] walks the
//! children of a node, groups consecutive same-tagged children into runs and
//! drives one fresh [`Handler`] per run.
//!
//! Handlers report failures through [`DispatchError`]; writing into a
//! `String` or an `io::Write` can use `?` directly.

pub mod engine;
pub mod handler;
pub mod registry;

pub use engine::process;
pub use handler::Handler;
pub use registry::Registry;

use std::fmt;
use std::io;

/// Error raised by a handler during dispatch
#[derive(Debug)]
pub enum DispatchError {
    /// Writing to an I/O sink failed
    Io(io::Error),
    /// Formatting into a string sink failed
    Fmt(fmt::Error),
    /// A handler rejected a node
    Handler { tag: String, message: String },
}

impl DispatchError {
    pub fn handler(tag: &str, message: impl Into<String>) -> Self {
        DispatchError::Handler {
            tag: tag.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::Io(err) => write!(f, "I/O error: {err}"),
            DispatchError::Fmt(err) => write!(f, "Formatting error: {err}"),
            DispatchError::Handler { tag, message } => {
                write!(f, "Handler for '\\{tag}' failed: {message}")
            }
        }
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DispatchError::Io(err) => Some(err),
            DispatchError::Fmt(err) => Some(err),
            DispatchError::Handler { .. } => None,
        }
    }
}

impl From<io::Error> for DispatchError {
    fn from(err: io::Error) -> Self {
        DispatchError::Io(err)
    }
}

impl From<fmt::Error> for DispatchError {
    fn from(err: fmt::Error) -> Self {
        DispatchError::Fmt(err)
    }
}
