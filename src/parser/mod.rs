//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a token stream into an
//! Abstract Syntax Tree. It uses a Pratt parser for expressions with
//! table-driven operator precedence and handles:
//!
//! - Top-level items (`#entrypoint` blocks)
//! - Statement parsing (declarations, expression statements, blocks)
//! - Expression parsing (binary and assignment operators, unary operators,
//!   references, calls, subscripts, member access, literals, `if`)
//! - Type parsing for declaration annotations
//!
//! Parsing stops at the first error; there is no recovery.

pub mod expr;
pub mod item;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;
