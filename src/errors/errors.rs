use std::fmt::Display;

use thiserror::Error;

use crate::Span;

/// A front-end failure: what went wrong and where.
///
/// Produced by the tree builder (lexical and delimiter errors) and by the
/// parser. Every error is terminal; nothing is recovered or retried.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
        }
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &'static str {
        match &self.internal_error {
            ErrorImpl::Lexical(error) => error.get_error_name(),
            ErrorImpl::UnexpectedDelimiter { .. } => "UnexpectedDelimiter",
            ErrorImpl::MissingDelimiter { .. } => "MissingDelimiter",
            ErrorImpl::MismatchedDelimiter { .. } => "MismatchedDelimiter",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::ExpectedType { .. } => "ExpectedType",
            ErrorImpl::ExpectedArraySize { .. } => "ExpectedArraySize",
            ErrorImpl::UnknownTopLevelToken { .. } => "UnknownTopLevelToken",
            ErrorImpl::UnsupportedDirective { .. } => "UnsupportedDirective",
            ErrorImpl::UnsupportedGenericArguments => "UnsupportedGenericArguments",
            ErrorImpl::TrailingInput { .. } => "TrailingInput",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::Lexical(error) => error.get_tip(),
            ErrorImpl::UnexpectedDelimiter { delimiter } => ErrorTip::Suggestion(format!(
                "`{}` has no matching opening delimiter",
                delimiter
            )),
            ErrorImpl::MissingDelimiter { delimiter } => ErrorTip::Suggestion(format!(
                "input ended before this was closed, expected `{}`",
                delimiter
            )),
            ErrorImpl::MismatchedDelimiter { expected, found } => ErrorTip::Suggestion(format!(
                "expected `{}` to close this, found `{}`",
                expected, found
            )),
            ErrorImpl::UnexpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("expected {}, got {}", expected, found))
            }
            ErrorImpl::ExpectedExpression { found } => ErrorTip::Suggestion(format!(
                "expected string, char, number, boolean, nil, identifier or block, got {}",
                found
            )),
            ErrorImpl::ExpectedType { found } => {
                ErrorTip::Suggestion(format!("{} cannot start a type", found))
            }
            ErrorImpl::ExpectedArraySize { found } => ErrorTip::Suggestion(format!(
                "array sizes must be integer literals, got {}",
                found
            )),
            ErrorImpl::UnknownTopLevelToken { found } => ErrorTip::Suggestion(format!(
                "only directive items may appear at the top level, got {}",
                found
            )),
            ErrorImpl::UnsupportedDirective { directive } => ErrorTip::Suggestion(format!(
                "`#{}` is recognised but not yet supported",
                directive
            )),
            ErrorImpl::UnsupportedGenericArguments => ErrorTip::Suggestion(String::from(
                "generic type arguments are not yet supported",
            )),
            ErrorImpl::TrailingInput { found } => {
                ErrorTip::Suggestion(format!("expected end of input, got {}", found))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.get_error_name(), self.span)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error(transparent)]
    Lexical(#[from] LexError),
    #[error("unexpected closing delimiter `{delimiter}`")]
    UnexpectedDelimiter { delimiter: char },
    #[error("missing closing delimiter `{delimiter}`")]
    MissingDelimiter { delimiter: char },
    #[error("mismatched delimiter: expected `{expected}`, found `{found}`")]
    MismatchedDelimiter { expected: char, found: char },
    #[error("expected {expected}, got {found}")]
    UnexpectedToken { expected: String, found: String },
    #[error("expected expression, got {found}")]
    ExpectedExpression { found: String },
    #[error("expected type, got {found}")]
    ExpectedType { found: String },
    #[error("expected array size, got {found}")]
    ExpectedArraySize { found: String },
    #[error("unknown token at top level: {found}")]
    UnknownTopLevelToken { found: String },
    #[error("directive #{directive} is not yet supported")]
    UnsupportedDirective { directive: String },
    #[error("generic type arguments are not yet supported")]
    UnsupportedGenericArguments,
    #[error("unexpected trailing input: {found}")]
    TrailingInput { found: String },
}

/// Lexical failures. The lexer reports these as error tokens.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexError {
    #[error("unexpected character")]
    UnexpectedCharacter,
    #[error("unclosed char literal")]
    UnclosedCharLiteral,
    #[error("unclosed string literal")]
    UnclosedStringLiteral,
    #[error("empty char literal")]
    EmptyCharLiteral,
    #[error("char literal holds more than one character")]
    MultiCharCharLiteral,
    #[error("invalid escape sequence")]
    InvalidEscape,
    #[error("invalid number suffix")]
    InvalidNumberSuffix,
    #[error("base prefix without digits")]
    InvalidDigitForBase,
    #[error("floating point literal in a non-decimal base")]
    DifferentBaseFloatingLiteral,
    #[error("integer suffix on a floating point literal")]
    InvalidSuffixForFloat,
    #[error("scientific notation without exponent")]
    ScientificFloatWithoutExponent,
    #[error("multiple dots in floating point literal")]
    MultipleDotsInFloat,
    #[error("digit not supported by the literal's base")]
    UnsupportedDigitForBase,
    #[error("integer literal does not fit in 64 bits")]
    NumberTooLarge,
    #[error("unknown punctuator")]
    UnknownPunctuator,
    #[error("unknown directive")]
    UnknownDirective,
    #[error("note without content")]
    InvalidZeroSizeNote,
    #[error("unexpected end of input")]
    UnexpectedEOF,
}

impl LexError {
    pub fn get_error_name(&self) -> &'static str {
        match self {
            LexError::UnexpectedCharacter => "UnexpectedCharacter",
            LexError::UnclosedCharLiteral => "UnclosedCharLiteral",
            LexError::UnclosedStringLiteral => "UnclosedStringLiteral",
            LexError::EmptyCharLiteral => "EmptyCharLiteral",
            LexError::MultiCharCharLiteral => "MultiCharCharLiteral",
            LexError::InvalidEscape => "InvalidEscape",
            LexError::InvalidNumberSuffix => "InvalidNumberSuffix",
            LexError::InvalidDigitForBase => "InvalidDigitForBase",
            LexError::DifferentBaseFloatingLiteral => "DifferentBaseFloatingLiteral",
            LexError::InvalidSuffixForFloat => "InvalidSuffixForFloat",
            LexError::ScientificFloatWithoutExponent => "ScientificFloatWithoutExponent",
            LexError::MultipleDotsInFloat => "MultipleDotsInFloat",
            LexError::UnsupportedDigitForBase => "UnsupportedDigitForBase",
            LexError::NumberTooLarge => "NumberTooLarge",
            LexError::UnknownPunctuator => "UnknownPunctuator",
            LexError::UnknownDirective => "UnknownDirective",
            LexError::InvalidZeroSizeNote => "InvalidZeroSizeNote",
            LexError::UnexpectedEOF => "UnexpectedEOF",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            LexError::InvalidNumberSuffix => ErrorTip::Suggestion(String::from(
                "valid suffixes are i8, u8, i16, u16, i32, u32, i64, u64, isize, usize, f32 and f64",
            )),
            LexError::InvalidEscape => ErrorTip::Suggestion(String::from(
                "valid escapes are \\n, \\t, \\r, \\0, \\\\, \\' and \\\"",
            )),
            LexError::MultiCharCharLiteral => {
                ErrorTip::Suggestion(String::from("use a string literal instead"))
            }
            LexError::UnknownDirective => ErrorTip::Suggestion(String::from(
                "known directives are #entrypoint, #open, #include, #if, #else and #load",
            )),
            _ => ErrorTip::None,
        }
    }
}
