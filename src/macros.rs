//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span between two positions of one file
//!
//! These macros reduce boilerplate in the lexer and token cursor.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Punct(Punct::OpenParen), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            span: $span,
        }
    };
}

/// Creates a Span from a file handle and two positions.
///
/// The file handle is cloned, so `$file` may be a borrowed `Rc<str>`.
#[macro_export]
macro_rules! MK_SPAN {
    ($file:expr, $start:expr, $end:expr) => {
        $crate::Span {
            file: ::std::rc::Rc::clone(&$file),
            start: $start,
            end: $end,
        }
    };
}
