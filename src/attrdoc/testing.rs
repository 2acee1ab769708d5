//! Testing utilities for attribute trees
//!
//! Tests should assert on the whole shape of a parsed tree, not on counts
//! alone. [`assert_tree`] offers a fluent API that walks a tree and reports
//! the path of the node that failed:
//!
//! ```rust-example
//! use attrdoc::attrdoc::parsing::parse_document;
//! use attrdoc::attrdoc::testing::assert_tree;
//!
//! let root = parse_document("\\fn get\n    \\arg key \\type= K\n");
//! assert_tree(&root)
//!     .child_tags(&["fn"])
//!     .child(0, |f| {
//!         f.value("get").attribute("arg", |arg| {
//!             arg.value("key").attribute("type", |ty| ty.value("K").leaf())
//!         })
//!     });
//! ```

mod tree_assertions;

pub use tree_assertions::{assert_tree, NodeAssertion};
