use crate::{
    ast::{
        ast::{Path, PathSegment},
        expressions::{Expr, ExprKind, Literal},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Keyword, NumberLiteral, NumberValue, Punct, TokenKind},
    Span, MK_TOKEN,
};

use super::{
    lookups::{BindingPower, InfixOperator},
    parser::Parser,
    stmt::parse_block,
};

/// Pratt loop: parses a prefix expression, then folds in every infix
/// operator whose binding power is at least `min_precedence`.
pub fn parse_expr(parser: &mut Parser, min_precedence: u8) -> Result<Expr, Error> {
    let mut lhs = parse_prefix_expr(parser)?;

    while let Some(infix) = parser
        .current_punct()
        .and_then(|punct| parser.get_led_lookup().get(&punct).copied())
    {
        let precedence = infix.binding_power as u8;
        if precedence < min_precedence {
            break;
        }
        parser.advance();

        let rhs = parse_expr(parser, precedence + infix.associativity as u8)?;
        let span = lhs.span.to(&rhs.span);
        let (lhs_box, rhs_box) = (Box::new(lhs), Box::new(rhs));

        lhs = match infix.operator {
            InfixOperator::Binary(op) => Expr::new(
                ExprKind::Binary {
                    op,
                    lhs: lhs_box,
                    rhs: rhs_box,
                },
                span,
            ),
            InfixOperator::Assignment(op) => Expr::new(
                ExprKind::Assign {
                    op,
                    lhs: lhs_box,
                    rhs: rhs_box,
                },
                span,
            ),
        };
    }

    Ok(lhs)
}

/// Unary operators, references, then a primary expression followed by any
/// number of calls, subscripts and member accesses.
pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if let Some(punct) = parser.current_punct() {
        if let Some(op) = parser.get_prefix_lookup().get(&punct).copied() {
            let start = parser.advance().span;
            let operand = parse_prefix_expr(parser)?;
            let span = start.to(&operand.span);
            return Ok(Expr::new(
                ExprKind::Unary {
                    op,
                    operand: Box::new(operand),
                },
                span,
            ));
        }

        match punct {
            Punct::Ampersand => {
                let start = parser.advance().span;
                return parse_reference_expr(parser, start);
            }
            // `&&x` is `&(&x)`: keep the second `&` as the current token.
            Punct::And => {
                let start = parser.current_token().span.clone();
                let second = split_second_ampersand(&start);
                parser.replace_token(MK_TOKEN!(TokenKind::Punct(Punct::Ampersand), second));
                return parse_reference_expr(parser, start);
            }
            _ => {}
        }
    }

    let mut expr = parse_primary_expr(parser)?;

    loop {
        expr = match parser.current_punct() {
            Some(Punct::OpenParen) => parse_call_expr(parser, expr)?,
            Some(Punct::OpenBracket) => parse_subscript_expr(parser, expr)?,
            Some(Punct::Dot) => parse_member_expr(parser, expr)?,
            _ => break,
        };
    }

    Ok(expr)
}

/// The span of the second character of a two-character `&&` token.
fn split_second_ampersand(span: &Span) -> Span {
    let mut second = span.clone();
    second.start.col += 1;
    second.start.offset += 1;
    second
}

fn parse_reference_expr(parser: &mut Parser, start: Span) -> Result<Expr, Error> {
    let operand = parse_prefix_expr(parser)?;
    let span = start.to(&operand.span);
    Ok(Expr::new(ExprKind::Reference(Box::new(operand)), span))
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_kind() {
        TokenKind::Identifier(_) => {
            let path = parse_path(parser)?;
            let span = path.span.clone();
            Ok(Expr::new(ExprKind::Path(path), span))
        }
        TokenKind::Keyword(Keyword::If) => parse_if_expr(parser),
        TokenKind::Punct(Punct::OpenParen) => parse_grouping_expr(parser),
        TokenKind::Punct(Punct::OpenCurly) => {
            let block = parse_block(parser)?;
            let span = block.span.clone();
            Ok(Expr::new(ExprKind::Block(Box::new(block)), span))
        }
        _ => parse_literal_expr(parser),
    }
}

fn parse_literal_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let is_literal = matches!(
        parser.current_kind(),
        TokenKind::String { .. }
            | TokenKind::Char { .. }
            | TokenKind::Number(_)
            | TokenKind::Keyword(Keyword::True | Keyword::False | Keyword::Nil)
    );
    if !is_literal {
        let token = parser.current_token();
        return Err(Error::new(
            ErrorImpl::ExpectedExpression {
                found: token.kind.to_string(),
            },
            token.span.clone(),
        ));
    }

    let token = parser.advance();
    let literal = match token.kind {
        TokenKind::String { value, .. } => Literal::String(value),
        TokenKind::Char { value, .. } => Literal::Char(value),
        TokenKind::Number(NumberLiteral {
            value: NumberValue::Float(value),
            class,
        }) => Literal::Float { value, class },
        TokenKind::Number(NumberLiteral {
            value: NumberValue::Integer(value),
            class,
        }) => Literal::Integer { value, class },
        TokenKind::Keyword(Keyword::True) => Literal::Bool(true),
        TokenKind::Keyword(Keyword::False) => Literal::Bool(false),
        // Only `nil` is left after the check above.
        _ => Literal::Nil,
    };

    Ok(Expr::new(ExprKind::Literal(literal), token.span))
}

/// `ident (: ident)*`
pub fn parse_path(parser: &mut Parser) -> Result<Path, Error> {
    let start = parser.current_token().span.clone();
    let mut segments = vec![];

    let end = loop {
        let (ident, span) = parser.expect_identifier()?;
        segments.push(PathSegment {
            ident,
            span: span.clone(),
        });

        if !parser.is_punct(Punct::Colon) {
            break span;
        }
        parser.advance();
    };

    Ok(Path {
        segments,
        span: start.to(&end),
    })
}

fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let open = parser.expect_punct(Punct::OpenParen)?;
    let inner = parse_expr(parser, BindingPower::Default as u8)?;
    let close = parser.expect_punct(Punct::CloseParen)?;

    Ok(Expr::new(
        ExprKind::Paren(Box::new(inner)),
        open.span.to(&close.span),
    ))
}

/// `if cond { ... } (else if ... | else { ... })?`
pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance().span;
    let condition = parse_expr(parser, BindingPower::Default as u8)?;
    let then_block = parse_block(parser)?;

    let else_branch = if parser.is_keyword(Keyword::Else) {
        parser.advance();
        let branch = if parser.is_keyword(Keyword::If) {
            parse_if_expr(parser)?
        } else {
            let block = parse_block(parser)?;
            let span = block.span.clone();
            Expr::new(ExprKind::Block(Box::new(block)), span)
        };
        Some(Box::new(branch))
    } else {
        None
    };

    let end = match &else_branch {
        Some(branch) => &branch.span,
        None => &then_block.span,
    };
    let span = start.to(end);

    Ok(Expr::new(
        ExprKind::If {
            condition: Box::new(condition),
            then_block,
            else_branch,
        },
        span,
    ))
}

fn parse_call_expr(parser: &mut Parser, callee: Expr) -> Result<Expr, Error> {
    parser.expect_punct(Punct::OpenParen)?;
    let mut arguments = vec![];

    if !parser.is_punct(Punct::CloseParen) {
        loop {
            arguments.push(parse_expr(parser, BindingPower::Default as u8)?);
            if !parser.is_punct(Punct::Comma) {
                break;
            }
            parser.advance();
        }
    }

    if !parser.is_punct(Punct::CloseParen) {
        return Err(parser.unexpected("`,` or `)`"));
    }
    let close = parser.advance();
    let span = callee.span.to(&close.span);

    Ok(Expr::new(
        ExprKind::Call {
            callee: Box::new(callee),
            arguments,
        },
        span,
    ))
}

fn parse_subscript_expr(parser: &mut Parser, base: Expr) -> Result<Expr, Error> {
    parser.expect_punct(Punct::OpenBracket)?;
    let index = parse_expr(parser, BindingPower::Default as u8)?;
    let close = parser.expect_punct(Punct::CloseBracket)?;
    let span = base.span.to(&close.span);

    Ok(Expr::new(
        ExprKind::Subscript {
            base: Box::new(base),
            index: Box::new(index),
        },
        span,
    ))
}

fn parse_member_expr(parser: &mut Parser, base: Expr) -> Result<Expr, Error> {
    parser.expect_punct(Punct::Dot)?;
    let (field, field_span) = parser.expect_identifier()?;
    let span = base.span.to(&field_span);

    Ok(Expr::new(
        ExprKind::Member {
            base: Box::new(base),
            field,
        },
        span,
    ))
}
