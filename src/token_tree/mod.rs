//! Token trees.
//!
//! [`tree::tokenize`] drives the lexer and groups the flat token stream
//! into delimiter-balanced trees, rejecting unbalanced input up front.
//! [`cursor::TokenCursor`] walks a tree depth-first and hands the parser a
//! flat stream again, with the delimiters put back as ordinary tokens.

pub mod cursor;
pub mod tree;
