use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{errors::errors::LexError, Span};

lazy_static! {
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, Keyword> =
        Keyword::ALL.iter().map(|kw| (kw.as_str(), *kw)).collect();
    /// Directive names without their leading `#`.
    pub static ref DIRECTIVE_LOOKUP: HashMap<&'static str, Directive> =
        Directive::ALL.iter().map(|dr| (dr.as_str(), *dr)).collect();
    pub static ref PUNCTUATOR_LOOKUP: HashMap<&'static str, Punct> =
        Punct::ALL.iter().map(|p| (p.as_str(), *p)).collect();
    pub static ref SUFFIX_LOOKUP: HashMap<&'static str, NumericClass> = {
        let mut map = HashMap::new();
        map.insert("i8", NumericClass::I8);
        map.insert("u8", NumericClass::U8);
        map.insert("i16", NumericClass::I16);
        map.insert("u16", NumericClass::U16);
        map.insert("i32", NumericClass::I32);
        map.insert("u32", NumericClass::U32);
        map.insert("i64", NumericClass::I64);
        map.insert("u64", NumericClass::U64);
        map.insert("isize", NumericClass::Isize);
        map.insert("usize", NumericClass::Usize);
        map.insert("f32", NumericClass::F32);
        map.insert("f64", NumericClass::F64);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    Nil,
    True,
    False,
    If,
    Else,
    For,
    Loop,
    While,
    Break,
    Continue,
    Fn,
    Enum,
    Struct,
    Variant,
    Const,
    Let,
}

impl Keyword {
    pub const ALL: [Keyword; 16] = [
        Keyword::Nil,
        Keyword::True,
        Keyword::False,
        Keyword::If,
        Keyword::Else,
        Keyword::For,
        Keyword::Loop,
        Keyword::While,
        Keyword::Break,
        Keyword::Continue,
        Keyword::Fn,
        Keyword::Enum,
        Keyword::Struct,
        Keyword::Variant,
        Keyword::Const,
        Keyword::Let,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Nil => "nil",
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::For => "for",
            Keyword::Loop => "loop",
            Keyword::While => "while",
            Keyword::Break => "break",
            Keyword::Continue => "continue",
            Keyword::Fn => "fn",
            Keyword::Enum => "enum",
            Keyword::Struct => "struct",
            Keyword::Variant => "variant",
            Keyword::Const => "const",
            Keyword::Let => "let",
        }
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Directive {
    Entrypoint,
    Open,
    Include,
    If,
    Else,
    Load,
}

impl Directive {
    pub const ALL: [Directive; 6] = [
        Directive::Entrypoint,
        Directive::Open,
        Directive::Include,
        Directive::If,
        Directive::Else,
        Directive::Load,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Directive::Entrypoint => "entrypoint",
            Directive::Open => "open",
            Directive::Include => "include",
            Directive::If => "if",
            Directive::Else => "else",
            Directive::Load => "load",
        }
    }
}

impl Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Punct {
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,  // ||
    And, // &&

    Dot,
    DotDot,
    Semicolon,
    Colon,
    ColonColon,
    Question,
    Comma,
    Arrow,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    Tilde,
    Ampersand,
    Pipe,
    Caret,
    ShiftLeft,
    ShiftRight,

    PlusEquals,
    MinusEquals,
    StarEquals,
    SlashEquals,
    PercentEquals,
    AmpersandEquals,
    PipeEquals,
    CaretEquals,
    ShiftLeftEquals,
    ShiftRightEquals,
    AndEquals,
    OrEquals,
    Walrus, // :=
}

impl Punct {
    pub const ALL: [Punct; 48] = [
        Punct::OpenParen,
        Punct::CloseParen,
        Punct::OpenBracket,
        Punct::CloseBracket,
        Punct::OpenCurly,
        Punct::CloseCurly,
        Punct::Assignment,
        Punct::Equals,
        Punct::Not,
        Punct::NotEquals,
        Punct::Less,
        Punct::LessEquals,
        Punct::Greater,
        Punct::GreaterEquals,
        Punct::Or,
        Punct::And,
        Punct::Dot,
        Punct::DotDot,
        Punct::Semicolon,
        Punct::Colon,
        Punct::ColonColon,
        Punct::Question,
        Punct::Comma,
        Punct::Arrow,
        Punct::Plus,
        Punct::Dash,
        Punct::Slash,
        Punct::Star,
        Punct::Percent,
        Punct::Tilde,
        Punct::Ampersand,
        Punct::Pipe,
        Punct::Caret,
        Punct::ShiftLeft,
        Punct::ShiftRight,
        Punct::PlusEquals,
        Punct::MinusEquals,
        Punct::StarEquals,
        Punct::SlashEquals,
        Punct::PercentEquals,
        Punct::AmpersandEquals,
        Punct::PipeEquals,
        Punct::CaretEquals,
        Punct::ShiftLeftEquals,
        Punct::ShiftRightEquals,
        Punct::AndEquals,
        Punct::OrEquals,
        Punct::Walrus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Punct::OpenParen => "(",
            Punct::CloseParen => ")",
            Punct::OpenBracket => "[",
            Punct::CloseBracket => "]",
            Punct::OpenCurly => "{",
            Punct::CloseCurly => "}",
            Punct::Assignment => "=",
            Punct::Equals => "==",
            Punct::Not => "!",
            Punct::NotEquals => "!=",
            Punct::Less => "<",
            Punct::LessEquals => "<=",
            Punct::Greater => ">",
            Punct::GreaterEquals => ">=",
            Punct::Or => "||",
            Punct::And => "&&",
            Punct::Dot => ".",
            Punct::DotDot => "..",
            Punct::Semicolon => ";",
            Punct::Colon => ":",
            Punct::ColonColon => "::",
            Punct::Question => "?",
            Punct::Comma => ",",
            Punct::Arrow => "->",
            Punct::Plus => "+",
            Punct::Dash => "-",
            Punct::Slash => "/",
            Punct::Star => "*",
            Punct::Percent => "%",
            Punct::Tilde => "~",
            Punct::Ampersand => "&",
            Punct::Pipe => "|",
            Punct::Caret => "^",
            Punct::ShiftLeft => "<<",
            Punct::ShiftRight => ">>",
            Punct::PlusEquals => "+=",
            Punct::MinusEquals => "-=",
            Punct::StarEquals => "*=",
            Punct::SlashEquals => "/=",
            Punct::PercentEquals => "%=",
            Punct::AmpersandEquals => "&=",
            Punct::PipeEquals => "|=",
            Punct::CaretEquals => "^=",
            Punct::ShiftLeftEquals => "<<=",
            Punct::ShiftRightEquals => ">>=",
            Punct::AndEquals => "&&=",
            Punct::OrEquals => "||=",
            Punct::Walrus => ":=",
        }
    }

    pub fn open_delimiter(self) -> Option<Delimiter> {
        match self {
            Punct::OpenParen => Some(Delimiter::Paren),
            Punct::OpenCurly => Some(Delimiter::Brace),
            Punct::OpenBracket => Some(Delimiter::Bracket),
            _ => None,
        }
    }

    pub fn close_delimiter(self) -> Option<Delimiter> {
        match self {
            Punct::CloseParen => Some(Delimiter::Paren),
            Punct::CloseCurly => Some(Delimiter::Brace),
            Punct::CloseBracket => Some(Delimiter::Bracket),
            _ => None,
        }
    }
}

impl Display for Punct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Delimiter {
    Paren,
    Brace,
    Bracket,
}

impl Delimiter {
    pub fn open(self) -> Punct {
        match self {
            Delimiter::Paren => Punct::OpenParen,
            Delimiter::Brace => Punct::OpenCurly,
            Delimiter::Bracket => Punct::OpenBracket,
        }
    }

    pub fn close(self) -> Punct {
        match self {
            Delimiter::Paren => Punct::CloseParen,
            Delimiter::Brace => Punct::CloseCurly,
            Delimiter::Bracket => Punct::CloseBracket,
        }
    }

    pub fn open_char(self) -> char {
        match self {
            Delimiter::Paren => '(',
            Delimiter::Brace => '{',
            Delimiter::Bracket => '[',
        }
    }

    pub fn close_char(self) -> char {
        match self {
            Delimiter::Paren => ')',
            Delimiter::Brace => '}',
            Delimiter::Bracket => ']',
        }
    }
}

/// Bit width, signedness and floatness of a numeric literal.
///
/// `Number` and `FloatingPointNumber` are unsuffixed literals whose
/// concrete class is decided later.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum NumericClass {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    Isize,
    Usize,
    F32,
    F64,
    Number,
    FloatingPointNumber,
}

impl NumericClass {
    pub fn is_float(self) -> bool {
        matches!(
            self,
            NumericClass::F32 | NumericClass::F64 | NumericClass::FloatingPointNumber
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NumericClass::I8 => "i8",
            NumericClass::U8 => "u8",
            NumericClass::I16 => "i16",
            NumericClass::U16 => "u16",
            NumericClass::I32 => "i32",
            NumericClass::U32 => "u32",
            NumericClass::I64 => "i64",
            NumericClass::U64 => "u64",
            NumericClass::Isize => "isize",
            NumericClass::Usize => "usize",
            NumericClass::F32 => "f32",
            NumericClass::F64 => "f64",
            NumericClass::Number => "Number",
            NumericClass::FloatingPointNumber => "FloatingPointNumber",
        }
    }
}

impl Display for NumericClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum NumberValue {
    Integer(u64),
    Float(f64),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct NumberLiteral {
    pub value: NumberValue,
    pub class: NumericClass,
}

impl Display for NumberLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value {
            NumberValue::Integer(value) => write!(f, "{}", value)?,
            NumberValue::Float(value) => write!(f, "{}", value)?,
        }
        match self.class {
            NumericClass::Number | NumericClass::FloatingPointNumber => Ok(()),
            class => write!(f, "{}", class),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum TokenKind {
    Eos,
    LineComment,
    BlockComment,
    Error(LexError),

    Char { value: char, is_byte: bool },
    String { value: String, is_byte: bool, is_raw: bool },
    /// `@...@` annotation.
    Note(String),
    Number(NumberLiteral),

    Identifier(String),
    Keyword(Keyword),
    Directive(Directive),
    Punct(Punct),
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Eos => write!(f, "end of stream"),
            TokenKind::LineComment => write!(f, "line comment"),
            TokenKind::BlockComment => write!(f, "block comment"),
            TokenKind::Error(error) => write!(f, "invalid token ({})", error),
            TokenKind::Char { value, .. } => write!(f, "char literal {:?}", value),
            TokenKind::String { value, .. } => write!(f, "string literal {:?}", value),
            TokenKind::Note(note) => write!(f, "note `@{}@`", note),
            TokenKind::Number(number) => write!(f, "number `{}`", number),
            TokenKind::Identifier(name) => write!(f, "identifier `{}`", name),
            TokenKind::Keyword(keyword) => write!(f, "keyword `{}`", keyword),
            TokenKind::Directive(directive) => write!(f, "directive `{}`", directive),
            TokenKind::Punct(punct) => write!(f, "`{}`", punct),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.kind, self.span)
    }
}

impl Token {
    pub fn is_punct(&self, punct: Punct) -> bool {
        self.kind == TokenKind::Punct(punct)
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }

    pub fn is_comment(&self) -> bool {
        matches!(self.kind, TokenKind::LineComment | TokenKind::BlockComment)
    }

    pub fn is_eos(&self) -> bool {
        self.kind == TokenKind::Eos
    }
}
