#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod token_tree;

/// A location inside a source buffer.
///
/// `row` and `col` are 1-based and advance once per logical character
/// (`\r\n` counts as one). `offset` is the byte index of the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: u32,
    pub col: u32,
    pub offset: usize,
}

impl Position {
    pub fn start() -> Self {
        Position {
            row: 1,
            col: 1,
            offset: 0,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// A source range. `end` is the position right after the last character.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span {
    pub file: Rc<str>,
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(file: Rc<str>, start: Position, end: Position) -> Self {
        Span { file, start, end }
    }

    /// A zero-width span sitting at `position`.
    pub fn empty(file: Rc<str>, position: Position) -> Self {
        Span {
            file,
            start: position,
            end: position,
        }
    }

    /// Span from the start of `self` to the end of `other`.
    pub fn to(&self, other: &Span) -> Span {
        Span {
            file: Rc::clone(&self.file),
            start: self.start,
            end: other.end,
        }
    }

    /// Smallest span covering both, regardless of order.
    #[cfg(test)]
    pub fn merge(&self, other: &Span) -> Span {
        Span {
            file: Rc::clone(&self.file),
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// The exact source text this span was produced from.
    #[cfg(test)]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start.offset..self.end.offset]
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}..{}]", self.start, self.end)
    }
}

pub fn get_line_at_row(source: &str, row: u32) -> Option<&str> {
    source.lines().nth((row as usize).checked_sub(1)?)
}


/// Renders a diagnostic for `error` against the source it was produced from.
pub fn render_error(error: &Error, source: &str) -> String {
    /*
        UnclosedStringLiteral at [3:13..3:17]
        -> main.lang
           |
         3 | let a = "abc
           |         ^^^^
    */

    let span = error.get_span();
    let mut out = String::new();

    match error.get_tip() {
        ErrorTip::None => out.push_str(&format!("{}\n", error)),
        tip => out.push_str(&format!("{} ({})\n", error, tip)),
    }
    out.push_str(&format!("-> {}\n", span.file));

    let Some(line_text) = get_line_at_row(source, span.start.row) else {
        return out;
    };

    let line_str = span.start.row.to_string();
    let padding = line_str.len() + 2;
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));

    let column = (span.start.col as usize)
        .saturating_sub(1)
        .saturating_sub(removed_whitespace);
    let width = if span.end.row == span.start.row {
        span.end.col.saturating_sub(span.start.col).max(1) as usize
    } else {
        1
    };

    out.push_str(&format!(
        "{:>padding$} {}{}\n",
        "|",
        " ".repeat(column),
        "^".repeat(width)
    ));
    out
}

pub fn display_error(error: &Error, source: &str) {
    eprint!("{}", render_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (&string[start..], start)
}
