use crate::{
    ast::ast::{Item, ItemKind},
    errors::errors::{Error, ErrorImpl},
};

use super::{parser::Parser, stmt::parse_block};

/// Parses one top-level item. Only directives may appear at the top level.
pub fn parse_item(parser: &mut Parser) -> Result<Item, Error> {
    let Some(directive) = parser.current_directive() else {
        let token = parser.current_token();
        return Err(Error::new(
            ErrorImpl::UnknownTopLevelToken {
                found: token.kind.to_string(),
            },
            token.span.clone(),
        ));
    };

    match parser.get_item_lookup().get(&directive).copied() {
        Some(handler) => handler(parser),
        None => parse_unsupported_directive(parser),
    }
}

/// `#entrypoint { ... }`
pub fn parse_entrypoint_item(parser: &mut Parser) -> Result<Item, Error> {
    let directive = parser.advance();
    let block = parse_block(parser)?;
    let span = directive.span.to(&block.span);

    Ok(Item {
        kind: ItemKind::RunBlock(block),
        span,
    })
}

/// Directives that are recognized by the lexer but have no item form yet.
pub fn parse_unsupported_directive(parser: &mut Parser) -> Result<Item, Error> {
    let directive = parser
        .current_directive()
        .map(|directive| directive.as_str().to_string())
        .unwrap_or_default();
    Err(Error::new(
        ErrorImpl::UnsupportedDirective { directive },
        parser.current_token().span.clone(),
    ))
}
