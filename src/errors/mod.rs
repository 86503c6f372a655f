//! Error types and error handling for the front end.
//!
//! This module defines the error types shared by every stage:
//!
//! - `LexError` for malformed tokens
//! - `ErrorImpl` for delimiter and parser failures
//! - `Error`, which pairs a failure with the span it happened at and
//!   renders as `<ErrorName> at [row:col..row:col]`

pub mod errors;
