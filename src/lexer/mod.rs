//! Lexical analysis.
//!
//! The lexer walks the source one logical character at a time and hands
//! out one token per call. It handles:
//!
//! - Multi-base numeric literals with type suffixes and the `1..2` range
//!   ambiguity
//! - Char, string, byte and raw string literals with escapes
//! - Nested block comments and line comments
//! - Directives (`#entrypoint`), keywords, raw identifiers (`$name`)
//! - Greedy longest-match punctuators
//!
//! Malformed input never aborts the lexer: it produces a
//! [`TokenKind::Error`](tokens::TokenKind::Error) token and moves on.

pub mod lexer;
pub mod tokens;
