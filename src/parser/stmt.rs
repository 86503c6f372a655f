use crate::{
    ast::{
        statements::{Block, DeclStmt, ExprStmt, Stmt, StmtKind},
        types::{Mutability, Type, TypeKind},
    },
    errors::errors::Error,
    lexer::tokens::{Keyword, Punct},
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::{parser::Parser, types::parse_type};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.skip_semicolons();

    if let Some(keyword) = parser.current_keyword() {
        if let Some(handler) = parser.get_stmt_lookup().get(&keyword).copied() {
            return handler(parser);
        }
    }

    let expr = parse_expr(parser, BindingPower::Default as u8)?;

    // `if` and block expressions end with `}` and take no `;`.
    if expr.is_block_like() {
        let span = expr.span.clone();
        return Ok(Stmt {
            kind: StmtKind::Expr(ExprStmt {
                expr,
                had_trailing_semicolon: false,
            }),
            span,
        });
    }

    let semicolon = parser.expect_punct(Punct::Semicolon)?;
    let span = expr.span.to(&semicolon.span);

    Ok(Stmt {
        kind: StmtKind::Expr(ExprStmt {
            expr,
            had_trailing_semicolon: true,
        }),
        span,
    })
}

/// `const name T = init;`, `let name = init;`, `let name T;`
pub fn parse_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let keyword = parser.advance();
    let mutability = if keyword.is_keyword(Keyword::Const) {
        Mutability::Const
    } else {
        Mutability::Mut
    };

    let (identifier, ident_span) = parser.expect_identifier()?;

    let ty = if parser.is_punct(Punct::Assignment) || parser.is_punct(Punct::Semicolon) {
        Type::new(
            TypeKind::Inferred,
            Span::empty(ident_span.file.clone(), ident_span.end),
        )
    } else {
        parse_type(parser)?
    };

    let initializer = if parser.is_punct(Punct::Assignment) {
        parser.advance();
        Some(parse_expr(parser, BindingPower::Default as u8)?)
    } else {
        None
    };

    let semicolon = parser.expect_punct(Punct::Semicolon)?;

    Ok(Stmt {
        kind: StmtKind::Decl(DeclStmt {
            mutability,
            identifier,
            initializer,
            ty,
        }),
        span: keyword.span.to(&semicolon.span),
    })
}

/// `{ stmt* }`
pub fn parse_block(parser: &mut Parser) -> Result<Block, Error> {
    let open = parser.expect_punct(Punct::OpenCurly)?;
    let mut stmts = vec![];

    while !parser.is_punct(Punct::CloseCurly) {
        stmts.push(parse_stmt(parser)?);
    }

    let close = parser.advance();
    Ok(Block {
        stmts,
        span: open.span.to(&close.span),
    })
}
