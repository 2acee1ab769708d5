//! Token definitions for attrdoc lines
//!
//! Lines are tokenized one at a time (the parser never sees line terminators).
//! The token set is small: the only syntax the format has is the
//! escape character, the `=` that closes an inline marker, whitespace, and
//! word runs that form tag names. Everything else is opaque text.

use logos::Logos;
use std::ops::Range;

/// The escape character that introduces a tag
pub const ESCAPE: char = '\\';

/// All tokens that can appear on a single attrdoc line
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    #[token("\\")]
    Escape,

    #[token("=")]
    Equals,

    #[regex(r"\s+")]
    Whitespace,

    /// A run of word characters (letters, digits, underscore)
    #[regex(r"\w+")]
    Word,

    /// Anything else, kept verbatim
    #[regex(r"[^\\=\s\w]+")]
    Text,
}

/// Tokenize a single line into tokens with their byte spans.
///
/// The token classes cover every character, so lexing cannot fail; a lexer
/// error is still mapped to [`Token::Text`] rather than dropped.
pub fn tokenize(line: &str) -> Vec<(Token, Range<usize>)> {
    Token::lexer(line)
        .spanned()
        .map(|(result, span)| (result.unwrap_or(Token::Text), span))
        .collect()
}

/// Number of characters in a whitespace span (a tab counts as one)
pub fn whitespace_width(text: &str) -> usize {
    text.chars().count()
}
