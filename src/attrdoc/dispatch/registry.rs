//! Tag to handler registry
//!
//! Maps tag names to handler factories. A registry is built once, before
//! dispatch, and is only read while dispatching.

use super::handler::Handler;
use std::collections::HashMap;

type Factory<C> = Box<dyn Fn() -> Box<dyn Handler<C>>>;

/// Registry of handler factories, keyed by tag
pub struct Registry<C> {
    factories: HashMap<String, Factory<C>>,
}

impl<C> Registry<C> {
    /// Create a new empty registry
    pub fn new() -> Self {
        Registry {
            factories: HashMap::new(),
        }
    }

    /// Register a factory for `tag`, replacing any previous one
    pub fn define<H, F>(mut self, tag: &str, factory: F) -> Self
    where
        H: Handler<C> + 'static,
        F: Fn() -> H + 'static,
    {
        self.factories.insert(
            tag.to_string(),
            Box::new(move || Box::new(factory()) as Box<dyn Handler<C>>),
        );
        self
    }

    /// Register a constructor together with the arguments every handler for
    /// `tag` is built from
    pub fn define_with<H, A>(self, tag: &str, constructor: fn(A) -> H, args: A) -> Self
    where
        H: Handler<C> + 'static,
        A: Clone + 'static,
    {
        self.define(tag, move || constructor(args.clone()))
    }

    /// Check if a tag has a handler
    pub fn has(&self, tag: &str) -> bool {
        self.factories.contains_key(tag)
    }

    /// Build a fresh handler for `tag`
    pub fn create(&self, tag: &str) -> Option<Box<dyn Handler<C>>> {
        self.factories.get(tag).map(|factory| factory())
    }

    /// List all registered tags (sorted)
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<_> = self.factories.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }
}

impl<C> Default for Registry<C> {
    fn default() -> Self {
        Self::new()
    }
}
