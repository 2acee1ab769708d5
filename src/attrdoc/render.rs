//! HTML rendering of API documentation
//!
//! Builds a dispatch [`Registry`] from a [`RenderConfig`] and runs it over
//! the top-level nodes of a document:
//!
//! ```text
//! \h1 Containers          -> <h1 id="Containers">...
//! \p Generic containers.  -> <p>Generic containers.</p>
//! \fn get                 -> <p><ul class="doc_list"><li>...
//! \member size            ->   <li>...</ul></p>
//! ```
//!
//! All state of one build (output, current section, ids) lives in a
//! [`RenderContext`], so documents can be rendered independently and in
//! parallel.

pub mod context;
pub mod html;
pub mod ids;

pub use context::RenderContext;
pub use html::{HeaderHandler, ListingHandler, ListingMode, ParagraphHandler};
pub use ids::{text_to_id, IdRef, IdTable};

use crate::attrdoc::ast::Node;
use crate::attrdoc::config::RenderConfig;
use crate::attrdoc::dispatch::{self, DispatchError, Registry};

/// The handler registry described by `config`
pub fn registry(config: &RenderConfig) -> Registry<RenderContext> {
    let mut registry = Registry::new();
    for (tag, level) in &config.headers {
        registry = registry.define_with(tag, HeaderHandler::new, *level);
    }
    for tag in &config.paragraphs {
        registry = registry.define(tag, || ParagraphHandler);
    }
    for tag in &config.functions {
        registry = registry.define_with(tag, ListingHandler::new, ListingMode::Function);
    }
    for tag in &config.members {
        registry = registry.define_with(tag, ListingHandler::new, ListingMode::Member);
    }
    registry
}

/// Render the top-level nodes of `root` as an HTML fragment
pub fn render_document(root: &Node, config: &RenderConfig) -> Result<String, DispatchError> {
    let registry = registry(config);
    let mut ctx = RenderContext::new();
    dispatch::process(root, &registry, &mut ctx)?;
    Ok(ctx.finish())
}
