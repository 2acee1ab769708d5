//! # attrdoc
//!
//! A parser for the attrdoc format: plain text where an escape character
//! followed by a word declares a tagged node, indentation nests nodes, and
//! everything else is body text. The parsed attribute tree is walked by a
//! tag-grouping dispatch engine that drives output generation (HTML API
//! documentation being the built-in consumer).
//!
//! ## Testing
//!
//! Tree assertions live in the [testing module](attrdoc::testing).

pub mod attrdoc;
