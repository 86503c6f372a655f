//! Parser state and entry points.
//!
//! The parser pulls tokens from a [`TokenCursor`] one at a time and keeps
//! exactly one token of lookahead. Operators and keyword-led constructs are
//! dispatched through lookup tables filled in by
//! [`create_token_lookups`](super::lookups::create_token_lookups):
//! - Statement handlers, keyed by keyword
//! - Item handlers, keyed by directive
//! - Infix operators with their binding power and associativity
//! - Prefix (unary) operators

use std::{collections::HashMap, mem};

use tracing::{debug, instrument};

use crate::{
    ast::{ast::Source, expressions::Expr, statements::Stmt},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Directive, Keyword, Punct, Token, TokenKind},
    token_tree::{cursor::TokenCursor, tree::TokenStream},
    Span,
};

use super::{
    expr::parse_expr,
    item::parse_item,
    lookups::{
        create_token_lookups, Associativity, BindingPower, InfixOp, InfixOperator, ItemHandler,
        ItemLookup, LEDLookup, PrefixLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};
use crate::ast::expressions::UnaryOp;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The token under consideration
    token: Token,
    cursor: TokenCursor,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for top-level item handlers
    item_lookup: ItemLookup,
    /// Lookup table for left denotation (infix) operators
    led_lookup: LEDLookup,
    /// Lookup table for prefix operators
    prefix_lookup: PrefixLookup,
}

impl Parser {
    /// Creates a parser positioned on the first token of `stream`, with all
    /// lookup tables registered.
    pub fn new(stream: TokenStream) -> Self {
        let mut cursor = TokenCursor::new(stream);
        let token = cursor.advance();

        let mut parser = Parser {
            token,
            cursor,
            stmt_lookup: HashMap::new(),
            item_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            prefix_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.token
    }

    /// Returns the kind of the current token.
    pub fn current_kind(&self) -> &TokenKind {
        &self.token.kind
    }

    pub fn current_punct(&self) -> Option<Punct> {
        match self.token.kind {
            TokenKind::Punct(punct) => Some(punct),
            _ => None,
        }
    }

    pub fn current_keyword(&self) -> Option<Keyword> {
        match self.token.kind {
            TokenKind::Keyword(keyword) => Some(keyword),
            _ => None,
        }
    }

    pub fn current_directive(&self) -> Option<Directive> {
        match self.token.kind {
            TokenKind::Directive(directive) => Some(directive),
            _ => None,
        }
    }

    pub fn is_punct(&self, punct: Punct) -> bool {
        self.token.is_punct(punct)
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.token.is_keyword(keyword)
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Token {
        let next = self.cursor.advance();
        mem::replace(&mut self.token, next)
    }

    /// Swaps the current token for `token` without advancing. Used to split
    /// `&&` into two `&` in prefix position.
    pub fn replace_token(&mut self, token: Token) {
        self.token = token;
    }

    /// Builds an `UnexpectedToken` error at the current token.
    pub fn unexpected(&self, expected: &str) -> Error {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: expected.to_string(),
                found: self.token.kind.to_string(),
            },
            self.token.span.clone(),
        )
    }

    /// Consumes the current token if it is `punct`.
    pub fn expect_punct(&mut self, punct: Punct) -> Result<Token, Error> {
        if !self.is_punct(punct) {
            return Err(self.unexpected(&format!("`{}`", punct)));
        }
        Ok(self.advance())
    }

    /// Consumes an identifier and returns its name and span.
    pub fn expect_identifier(&mut self) -> Result<(String, Span), Error> {
        if !matches!(self.token.kind, TokenKind::Identifier(_)) {
            return Err(self.unexpected("identifier"));
        }
        let token = self.advance();
        match token.kind {
            TokenKind::Identifier(name) => Ok((name, token.span)),
            _ => Err(self.unexpected("identifier")),
        }
    }

    /// Fails with `TrailingInput` unless the stream is exhausted.
    pub fn expect_end(&self) -> Result<(), Error> {
        if self.has_tokens() {
            return Err(Error::new(
                ErrorImpl::TrailingInput {
                    found: self.token.kind.to_string(),
                },
                self.token.span.clone(),
            ));
        }
        Ok(())
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        !self.token.is_eos()
    }

    /// Skips redundant `;` tokens.
    pub fn skip_semicolons(&mut self) {
        while self.is_punct(Punct::Semicolon) {
            self.advance();
        }
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the item lookup table.
    pub fn get_item_lookup(&self) -> &ItemLookup {
        &self.item_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the prefix operator lookup table.
    pub fn get_prefix_lookup(&self) -> &PrefixLookup {
        &self.prefix_lookup
    }

    /// Registers an infix operator.
    pub fn led(
        &mut self,
        punct: Punct,
        operator: InfixOperator,
        binding_power: BindingPower,
        associativity: Associativity,
    ) {
        self.led_lookup.insert(
            punct,
            InfixOp {
                operator,
                binding_power,
                associativity,
            },
        );
    }

    /// Registers a prefix operator.
    pub fn prefix(&mut self, punct: Punct, op: UnaryOp) {
        self.prefix_lookup.insert(punct, op);
    }

    /// Registers a statement handler for a keyword.
    pub fn stmt(&mut self, keyword: Keyword, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(keyword, stmt_fn);
    }

    /// Registers an item handler for a directive.
    pub fn item(&mut self, directive: Directive, item_fn: ItemHandler) {
        self.item_lookup.insert(directive, item_fn);
    }
}

/// Parses a whole source file: top-level items until end of stream.
#[instrument(skip_all)]
pub fn parse(stream: TokenStream) -> Result<Source, Error> {
    let mut parser = Parser::new(stream);
    let mut items = vec![];

    while parser.has_tokens() {
        items.push(parse_item(&mut parser)?);
    }

    debug!(items = items.len(), "parsed source");
    Ok(Source { items })
}

/// Parses a single expression spanning the whole stream.
#[instrument(skip_all)]
pub fn parse_expression(stream: TokenStream) -> Result<Expr, Error> {
    let mut parser = Parser::new(stream);
    let expr = parse_expr(&mut parser, BindingPower::Default as u8)?;
    parser.expect_end()?;

    debug!("parsed expression");
    Ok(expr)
}

/// Parses a single statement spanning the whole stream.
#[instrument(skip_all)]
pub fn parse_statement(stream: TokenStream) -> Result<Stmt, Error> {
    let mut parser = Parser::new(stream);
    let stmt = parse_stmt(&mut parser)?;
    parser.expect_end()?;

    debug!("parsed statement");
    Ok(stmt)
}
