//! Type parsing implementation.
//!
//! This module handles parsing of type annotations. It supports:
//!
//! - Path types (`int`, `std:string`)
//! - Owned types (`|T|`)
//! - References and pointers (`&T`, `*let T`), with a nullable inner type
//!   hoisted into the pointer itself
//! - Sized arrays and slices (`[4]T`, `[]T`)
//! - Tuples (`(T, U)`); a parenthesized single type is just that type
//! - Nullable types (`T?`)
//!
//! Generic arguments (`Base(Args...)`) are recognized but rejected.

use crate::{
    ast::types::{Mutability, PointerType, Type, TypeKind},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Keyword, NumberLiteral, NumberValue, Punct, TokenKind},
};

use super::{
    expr::parse_path,
    parser::Parser,
};

pub fn parse_type(parser: &mut Parser) -> Result<Type, Error> {
    let mut ty = match parser.current_kind() {
        TokenKind::Punct(Punct::Pipe) => return parse_owned_type(parser),
        TokenKind::Punct(Punct::Ampersand | Punct::Star) => {
            return parse_pointer_type(parser)
        }
        TokenKind::Punct(Punct::OpenBracket) => return parse_array_type(parser),
        TokenKind::Punct(Punct::OpenParen) => parse_tuple_type(parser)?,
        TokenKind::Identifier(_) => {
            let path = parse_path(parser)?;
            let span = path.span.clone();
            Type::new(TypeKind::Path(path), span)
        }
        _ => return Err(expected_type(parser)),
    };

    if parser.is_punct(Punct::OpenParen) {
        ty = parse_generic_type(parser, ty)?;
    }

    if parser.is_punct(Punct::Question) {
        let question = parser.advance();
        let span = ty.span.to(&question.span);
        ty = Type::new(TypeKind::Nullable(Box::new(ty)), span);
    }

    Ok(ty)
}

fn expected_type(parser: &Parser) -> Error {
    let token = parser.current_token();
    Error::new(
        ErrorImpl::ExpectedType {
            found: token.kind.to_string(),
        },
        token.span.clone(),
    )
}

/// `|T|`
fn parse_owned_type(parser: &mut Parser) -> Result<Type, Error> {
    let open = parser.expect_punct(Punct::Pipe)?;
    let inner = parse_type(parser)?;
    let close = parser.expect_punct(Punct::Pipe)?;

    Ok(Type::new(
        TypeKind::Owned(Box::new(inner)),
        open.span.to(&close.span),
    ))
}

/// `&T`, `*T`, with an optional `let` for mutability.
fn parse_pointer_type(parser: &mut Parser) -> Result<Type, Error> {
    let is_ref = parser.is_punct(Punct::Ampersand);
    let start = parser.advance().span;

    let mutability = if parser.is_keyword(Keyword::Let) {
        parser.advance();
        Mutability::Mut
    } else {
        Mutability::Const
    };

    let inner = parse_type(parser)?;
    let span = start.to(&inner.span);
    let (inner, nullable) = match inner.kind {
        TypeKind::Nullable(inner) => (inner, true),
        kind => (Box::new(Type::new(kind, inner.span)), false),
    };

    let pointer = PointerType {
        inner,
        mutability,
        nullable,
    };
    let kind = if is_ref {
        TypeKind::Ref(pointer)
    } else {
        TypeKind::Ptr(pointer)
    };

    Ok(Type::new(kind, span))
}

/// `[N]T` or `[]T`
fn parse_array_type(parser: &mut Parser) -> Result<Type, Error> {
    let open = parser.expect_punct(Punct::OpenBracket)?;

    let size = match *parser.current_kind() {
        TokenKind::Punct(Punct::CloseBracket) => None,
        TokenKind::Number(NumberLiteral {
            value: NumberValue::Integer(size),
            class,
        }) if !class.is_float() => {
            parser.advance();
            Some(size)
        }
        _ => return Err(expected_array_size(parser)),
    };

    parser.expect_punct(Punct::CloseBracket)?;
    let inner = Box::new(parse_type(parser)?);
    let span = open.span.to(&inner.span);

    let kind = match size {
        Some(size) => TypeKind::Array { inner, size },
        None => TypeKind::Slice(inner),
    };

    Ok(Type::new(kind, span))
}

fn expected_array_size(parser: &Parser) -> Error {
    let token = parser.current_token();
    Error::new(
        ErrorImpl::ExpectedArraySize {
            found: token.kind.to_string(),
        },
        token.span.clone(),
    )
}

/// `(T, U, ...)`
fn parse_tuple_type(parser: &mut Parser) -> Result<Type, Error> {
    let open = parser.expect_punct(Punct::OpenParen)?;
    let mut types = vec![parse_type(parser)?];

    while parser.is_punct(Punct::Comma) {
        parser.advance();
        types.push(parse_type(parser)?);
    }

    if !parser.is_punct(Punct::CloseParen) {
        return Err(parser.unexpected("`,` or `)`"));
    }
    let close = parser.advance();

    if types.len() == 1 {
        if let Some(ty) = types.pop() {
            return Ok(ty);
        }
    }

    Ok(Type::new(TypeKind::Tuple(types), open.span.to(&close.span)))
}

/// `Base(Args...)`. Not supported yet: always reports an error covering the
/// base type and the opening parenthesis.
fn parse_generic_type(parser: &Parser, base: Type) -> Result<Type, Error> {
    let open = parser.current_token();
    let span = base.span.to(&open.span);
    Err(Error::new(ErrorImpl::UnsupportedGenericArguments, span))
}
