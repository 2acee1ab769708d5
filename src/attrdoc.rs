//! Main module for attrdoc library functionality

pub mod ast;
pub mod config;
pub mod dispatch;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod render;
pub mod testing;
