use std::rc::Rc;

use tracing::trace;

use crate::{errors::errors::LexError, Position, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{
    NumberLiteral, NumberValue, NumericClass, Token, TokenKind, DIRECTIVE_LOOKUP, KEYWORD_LOOKUP,
    PUNCTUATOR_LOOKUP, SUFFIX_LOOKUP,
};

/// Saved scan position, see [`Lexer::save`].
#[derive(Debug, Clone, Copy)]
struct Checkpoint {
    pos: Position,
}

/// Character-level scanner. Each call to [`Lexer::next_token`] consumes
/// exactly one token (or one error token) from the source buffer.
pub struct Lexer<'src> {
    source: &'src str,
    file: Rc<str>,
    pos: Position,
    token_start: Position,
}

impl<'src> Lexer<'src> {
    pub fn new(file: &str, source: &'src str) -> Lexer<'src> {
        Lexer {
            source,
            file: Rc::from(file),
            pos: Position::start(),
            token_start: Position::start(),
        }
    }

    pub fn file(&self) -> Rc<str> {
        Rc::clone(&self.file)
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        self.token_start = self.pos;

        let kind = self.lex_token();
        let token = MK_TOKEN!(kind, self.token_span());
        trace!(kind = %token.kind, span = %token.span, "lexed token");
        token
    }

    fn lex_token(&mut self) -> TokenKind {
        let Some(current) = self.current() else {
            return TokenKind::Eos;
        };

        if current == '/' {
            if let Some(comment) = self.lex_comment() {
                return comment;
            }
        }

        if current == '\'' || (current == 'b' && self.peek_nth(1) == Some('\'')) {
            return self.lex_char_literal();
        }

        if current == '"' || (matches!(current, 'b' | 'r') && self.peek_nth(1) == Some('"')) {
            return self.lex_string_literal();
        }

        if is_identifier_start(current) {
            return self.lex_identifier(false);
        }

        if current.is_ascii_digit() || current == '.' {
            if let Some(number) = self.lex_number_literal() {
                return number;
            }
        }

        if current == '@' {
            return self.lex_note();
        }

        if current.is_ascii_punctuation() {
            return self.lex_punctuator();
        }

        self.bump();
        TokenKind::Error(LexError::UnexpectedCharacter)
    }

    fn current(&self) -> Option<char> {
        self.source[self.pos.offset..].chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.source[self.pos.offset..].chars().nth(n)
    }

    fn at_linebreak(&self) -> bool {
        match self.current() {
            Some('\n') => true,
            Some('\r') => self.peek_nth(1) == Some('\n'),
            _ => false,
        }
    }

    /// Advances one logical character. `\r\n` is consumed as a single
    /// line break.
    fn bump(&mut self) {
        let Some(current) = self.current() else {
            return;
        };

        if current == '\r' && self.peek_nth(1) == Some('\n') {
            self.pos.offset += 2;
            self.pos.row += 1;
            self.pos.col = 1;
        } else if current == '\n' {
            self.pos.offset += 1;
            self.pos.row += 1;
            self.pos.col = 1;
        } else {
            self.pos.offset += current.len_utf8();
            self.pos.col += 1;
        }
    }

    /// Bumps the current character, then keeps bumping until `search` is
    /// under the cursor (returns true), or a line break or the end of input
    /// is reached (returns false). Neither the match nor the line break is
    /// consumed.
    fn bump_until_eol_eof(&mut self, search: Option<char>) -> bool {
        loop {
            self.bump();
            let Some(current) = self.current() else {
                return false;
            };
            if self.at_linebreak() {
                return false;
            }
            if Some(current) == search {
                return true;
            }
        }
    }

    /// Token start of the token being lexed.
    fn dump(&self) -> Position {
        self.token_start
    }

    fn load(&mut self, token_start: Position) {
        self.token_start = token_start;
    }

    /// Live scan position, for bounded lookahead that may have to rewind.
    fn save(&self) -> Checkpoint {
        Checkpoint { pos: self.pos }
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.pos;
    }

    fn token_text(&self) -> &'src str {
        &self.source[self.token_start.offset..self.pos.offset]
    }

    fn token_span(&self) -> Span {
        MK_SPAN!(self.file, self.token_start, self.pos)
    }

    fn skip_whitespace(&mut self) {
        while let Some(current) = self.current() {
            if !is_whitespace(current) {
                break;
            }
            self.bump();
        }
    }

    fn lex_comment(&mut self) -> Option<TokenKind> {
        match self.peek_nth(1) {
            Some('/') => {
                self.bump_until_eol_eof(None);
                Some(TokenKind::LineComment)
            }
            Some('*') => {
                self.bump();
                self.bump();

                let mut depth = 0u32;
                // End of input closes every open comment.
                while let Some(current) = self.current() {
                    let next = self.peek_nth(1);
                    if current == '/' && next == Some('*') {
                        self.bump();
                        self.bump();
                        depth += 1;
                    } else if current == '*' && next == Some('/') {
                        self.bump();
                        self.bump();
                        if depth == 0 {
                            break;
                        }
                        depth -= 1;
                    } else {
                        self.bump();
                    }
                }
                Some(TokenKind::BlockComment)
            }
            _ => None,
        }
    }

    fn lex_char_literal(&mut self) -> TokenKind {
        let is_byte = self.current() == Some('b');
        if is_byte {
            self.bump();
        }
        self.bump();

        let value = match self.current() {
            None => return TokenKind::Error(LexError::UnexpectedEOF),
            Some('\'') => {
                self.bump();
                return TokenKind::Error(LexError::EmptyCharLiteral);
            }
            Some(_) if self.at_linebreak() => {
                return TokenKind::Error(LexError::UnclosedCharLiteral)
            }
            Some('\\') => {
                self.bump();
                let Some(escaped) = self.current() else {
                    return TokenKind::Error(LexError::UnexpectedEOF);
                };
                if self.at_linebreak() {
                    return TokenKind::Error(LexError::UnclosedCharLiteral);
                }
                self.bump();

                match unescape(escaped) {
                    Some(value) => value,
                    None => {
                        if self.current() == Some('\'') {
                            self.bump();
                        }
                        return TokenKind::Error(LexError::InvalidEscape);
                    }
                }
            }
            Some(value) => {
                self.bump();
                value
            }
        };

        match self.current() {
            Some('\'') => {
                self.bump();
                TokenKind::Char { value, is_byte }
            }
            None => TokenKind::Error(LexError::UnclosedCharLiteral),
            Some(_) if self.at_linebreak() => TokenKind::Error(LexError::UnclosedCharLiteral),
            Some(_) => {
                if self.bump_until_eol_eof(Some('\'')) {
                    self.bump();
                    TokenKind::Error(LexError::MultiCharCharLiteral)
                } else {
                    TokenKind::Error(LexError::UnclosedCharLiteral)
                }
            }
        }
    }

    fn lex_string_literal(&mut self) -> TokenKind {
        let (is_byte, is_raw) = match self.current() {
            Some('b') => (true, false),
            Some('r') => (false, true),
            _ => (false, false),
        };
        if is_byte || is_raw {
            self.bump();
        }
        self.bump();

        let mut value = String::new();
        let mut invalid_escape = false;

        loop {
            let Some(current) = self.current() else {
                return TokenKind::Error(LexError::UnclosedStringLiteral);
            };
            if self.at_linebreak() {
                return TokenKind::Error(LexError::UnclosedStringLiteral);
            }
            self.bump();

            match current {
                '"' => break,
                // Raw strings keep the backslash but still cannot end on `\"`.
                '\\' if is_raw => {
                    value.push('\\');
                    if self.current() == Some('"') {
                        value.push('"');
                        self.bump();
                    }
                }
                '\\' => {
                    let Some(escaped) = self.current() else {
                        return TokenKind::Error(LexError::UnclosedStringLiteral);
                    };
                    if self.at_linebreak() {
                        return TokenKind::Error(LexError::UnclosedStringLiteral);
                    }
                    self.bump();

                    if escaped == 'x' {
                        match self.lex_hex_escape() {
                            Some(byte) => value.push(byte),
                            None => invalid_escape = true,
                        }
                    } else {
                        match unescape(escaped) {
                            Some(unescaped) => value.push(unescaped),
                            None => invalid_escape = true,
                        }
                    }
                }
                other => value.push(other),
            }
        }

        if invalid_escape {
            return TokenKind::Error(LexError::InvalidEscape);
        }

        TokenKind::String {
            value,
            is_byte,
            is_raw,
        }
    }

    /// Reads the `HH` of a `\xHH` escape.
    fn lex_hex_escape(&mut self) -> Option<char> {
        let mut byte = 0u32;
        for _ in 0..2 {
            let digit = self.current().and_then(|c| c.to_digit(16))?;
            self.bump();
            byte = byte * 16 + digit;
        }
        char::from_u32(byte)
    }

    /// Scans an identifier-shaped run. Unless `simple`, the text is then
    /// resolved against the directive and keyword tables.
    fn lex_identifier(&mut self, simple: bool) -> TokenKind {
        self.bump();
        while let Some(current) = self.current() {
            if !(current.is_alphanumeric() || current == '_') {
                break;
            }
            self.bump();
        }

        let text = self.token_text();
        if simple {
            return TokenKind::Identifier(text.to_string());
        }

        if let Some(name) = text.strip_prefix('#') {
            return match DIRECTIVE_LOOKUP.get(name) {
                Some(directive) => TokenKind::Directive(*directive),
                None => TokenKind::Error(LexError::UnknownDirective),
            };
        }

        if let Some(name) = text.strip_prefix('$') {
            if name.is_empty() {
                return TokenKind::Error(LexError::UnexpectedCharacter);
            }
            return TokenKind::Identifier(name.to_string());
        }

        match KEYWORD_LOOKUP.get(text) {
            Some(keyword) => TokenKind::Keyword(*keyword),
            None => TokenKind::Identifier(text.to_string()),
        }
    }

    /// Returns `None` for a `.` that does not start a number, leaving it for
    /// the punctuator table.
    fn lex_number_literal(&mut self) -> Option<TokenKind> {
        if self.current() == Some('.') && !self.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) {
            return None;
        }

        let mut base = 10;
        if self.current() == Some('0') {
            base = match self.peek_nth(1) {
                Some('b' | 'B') => 2,
                Some('o' | 'O') => 8,
                Some('x' | 'X') => 16,
                _ => 10,
            };
            if base != 10 {
                self.bump();
                self.bump();
            }
        }

        let digits_start = self.pos.offset;
        let mut has_digits = false;
        let mut dots = 0;
        let mut has_exponent = false;
        let mut missing_exponent = false;
        let mut unsupported_digit = false;

        while let Some(current) = self.current() {
            if current.is_ascii_digit() || (base == 16 && current.is_ascii_hexdigit()) {
                if current.to_digit(base).is_none() {
                    unsupported_digit = true;
                }
                has_digits = true;
                self.bump();
            } else if current == '.' {
                if has_exponent {
                    break;
                }
                // `1..2` is a range, the dot belongs to the `..` punctuator.
                match self.peek_nth(1) {
                    Some(next) if next.is_ascii_digit() => {}
                    Some('e' | 'E') if base != 16 => {}
                    _ => break,
                }
                dots += 1;
                self.bump();
            } else if matches!(current, 'e' | 'E')
                && base != 16
                && has_digits
                && !has_exponent
                && matches!(self.peek_nth(1), Some(next) if next.is_ascii_digit() || matches!(next, '.' | '+' | '-'))
            {
                has_exponent = true;
                self.bump();
                if matches!(self.current(), Some('+' | '-')) {
                    self.bump();
                }
                if !self.current().is_some_and(|c| c.is_ascii_digit()) {
                    missing_exponent = true;
                }
            } else {
                break;
            }
        }
        let digits_end = self.pos.offset;

        let mut suffix = None;
        if self.current().is_some_and(|c| c.is_alphabetic() || c == '_') {
            let checkpoint = self.save();
            let token_start = self.dump();
            self.load(self.pos);

            if let TokenKind::Identifier(name) = self.lex_identifier(true) {
                suffix = SUFFIX_LOOKUP.get(name.as_str()).copied();
            }

            self.load(token_start);
            if suffix.is_none() {
                self.restore(checkpoint);
                return Some(TokenKind::Error(LexError::InvalidNumberSuffix));
            }
        }

        if !has_digits {
            return Some(TokenKind::Error(LexError::InvalidDigitForBase));
        }

        let is_float = dots > 0 || has_exponent || suffix.is_some_and(NumericClass::is_float);
        if is_float && base != 10 {
            return Some(TokenKind::Error(LexError::DifferentBaseFloatingLiteral));
        }
        if dots > 1 {
            return Some(TokenKind::Error(LexError::MultipleDotsInFloat));
        }
        if missing_exponent {
            return Some(TokenKind::Error(LexError::ScientificFloatWithoutExponent));
        }
        if unsupported_digit {
            return Some(TokenKind::Error(LexError::UnsupportedDigitForBase));
        }
        if is_float && suffix.is_some_and(|class| !class.is_float()) {
            return Some(TokenKind::Error(LexError::InvalidSuffixForFloat));
        }

        let class = match suffix {
            Some(class) => class,
            None if is_float => NumericClass::FloatingPointNumber,
            None => NumericClass::Number,
        };

        let digits = &self.source[digits_start..digits_end];
        let value = if class.is_float() && base == 10 {
            match digits.parse::<f64>() {
                Ok(value) => NumberValue::Float(value),
                Err(_) => return Some(TokenKind::Error(LexError::ScientificFloatWithoutExponent)),
            }
        } else {
            match u64::from_str_radix(digits, base) {
                Ok(value) if class.is_float() => NumberValue::Float(value as f64),
                Ok(value) => NumberValue::Integer(value),
                Err(_) => return Some(TokenKind::Error(LexError::NumberTooLarge)),
            }
        };

        Some(TokenKind::Number(NumberLiteral { value, class }))
    }

    fn lex_note(&mut self) -> TokenKind {
        if self.bump_until_eol_eof(Some('@')) {
            self.bump();
        }

        let text = self.token_text();
        if text.chars().count() < 2 {
            return TokenKind::Error(LexError::InvalidZeroSizeNote);
        }

        let inner = &text[1..];
        let inner = inner.strip_suffix('@').unwrap_or(inner);
        TokenKind::Note(inner.to_string())
    }

    /// Greedy longest match over the punctuator table.
    fn lex_punctuator(&mut self) -> TokenKind {
        let rest = &self.source[self.pos.offset..];
        for len in (1..=3).rev() {
            let Some(candidate) = rest.get(..len) else {
                continue;
            };
            if let Some(punct) = PUNCTUATOR_LOOKUP.get(candidate) {
                for _ in 0..len {
                    self.bump();
                }
                return TokenKind::Punct(*punct);
            }
        }

        self.bump();
        TokenKind::Error(LexError::UnknownPunctuator)
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || matches!(c, '_' | '$' | '#')
}

fn unescape(escaped: char) -> Option<char> {
    match escaped {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '0' => Some('\0'),
        '\\' => Some('\\'),
        '\'' => Some('\''),
        '"' => Some('"'),
        _ => None,
    }
}

/// Lexes `source` up to and including the first end-of-stream or error
/// token. Comments are kept.
pub fn lex_all(file: &str, source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(file, source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = matches!(token.kind, TokenKind::Eos | TokenKind::Error(_));
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
