//! Attribute tree types
//!
//! The tree produced by the parser is made of a single node type: every
//! declaration, and the synthetic document root, is a [`Node`].

pub mod node;

pub use node::Node;
