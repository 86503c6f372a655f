//! Integration tests for the whole front end.
//!
//! These tests drive source text through tokenization, parsing and AST
//! printing, the same way the `frontend` binary does.

use frontend::{
    ast::{
        ast::ItemKind,
        expressions::{ExprKind, Literal},
        printer::print_source,
        statements::StmtKind,
    },
    errors::errors::{ErrorImpl, LexError},
    lexer::{
        lexer::lex_all,
        tokens::{NumberLiteral, NumberValue, NumericClass, Punct, TokenKind},
    },
    parser::parser::{parse, parse_expression},
    render_error,
    token_tree::tree::tokenize,
};

const PROGRAM: &str = "\
#entrypoint {
    let x u8 = 10u8;
    const y = x + 1 * 2;
    if y > 2 { x = y; } else { x = 0; }
    print(x);
}
";

#[test]
fn test_parse_simple_program() {
    let stream = tokenize("main.lang", PROGRAM).unwrap();
    let source = parse(stream).unwrap();

    assert_eq!(source.items.len(), 1);
    let ItemKind::RunBlock(block) = &source.items[0].kind;
    assert_eq!(block.stmts.len(), 4);
    assert!(matches!(block.stmts[0].kind, StmtKind::Decl(_)));
    assert!(matches!(
        &block.stmts[2].kind,
        StmtKind::Expr(expr_stmt)
            if !expr_stmt.had_trailing_semicolon
                && matches!(expr_stmt.expr.kind, ExprKind::If { .. })
    ));
    assert_eq!(source.items[0].span.to_string(), "[1:1..6:2]");
}

#[test]
fn test_print_simple_program() {
    let stream = tokenize("main.lang", PROGRAM).unwrap();
    let printed = print_source(&parse(stream).unwrap());

    assert!(printed.starts_with("Source [\n    RunBlock { span = [1:1..6:2]"));
    assert!(printed.contains("integer = 10:u8"));
    assert!(printed.contains("op = BinaryOp::Add"));
    assert!(printed.contains("op = BinaryOp::Mul"));
    assert!(printed.contains("path = print"));
    assert!(printed.contains("else_block = Block"));
    assert!(printed.ends_with("\n]"));
}

#[test]
fn test_mismatched_delimiter() {
    let error = tokenize("main.lang", "(1, 2]").unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::MismatchedDelimiter {
            expected: ')',
            found: ']'
        }
    );
    assert_eq!(error.to_string(), "MismatchedDelimiter at [1:1..1:7]");
}

#[test]
fn test_missing_delimiter() {
    let error = tokenize("main.lang", "(1, 2").unwrap_err();
    assert_eq!(error.get_error_name(), "MissingDelimiter");
    assert_eq!(error.get_span().to_string(), "[1:1..1:6]");
}

#[test]
fn test_unexpected_delimiter() {
    let error = tokenize("main.lang", "#entrypoint { } }").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedDelimiter");
    assert_eq!(error.get_span().to_string(), "[1:17..1:18]");
}

#[test]
fn test_suffixed_number() {
    let stream = tokenize("main.lang", "10u8").unwrap();
    let expr = parse_expression(stream).unwrap();
    assert_eq!(
        expr.kind,
        ExprKind::Literal(Literal::Integer {
            value: 10,
            class: NumericClass::U8
        })
    );
}

#[test]
fn test_invalid_suffix_fails_tokenization() {
    let error = tokenize("main.lang", "10u9").unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::Lexical(LexError::InvalidNumberSuffix)
    );
    assert_eq!(error.to_string(), "InvalidNumberSuffix at [1:1..1:3]");
}

#[test]
fn test_range_is_not_a_float() {
    let kinds: Vec<TokenKind> = lex_all("main.lang", "1..2")
        .into_iter()
        .map(|token| token.kind)
        .collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Number(NumberLiteral {
                value: NumberValue::Integer(1),
                class: NumericClass::Number
            }),
            TokenKind::Punct(Punct::DotDot),
            TokenKind::Number(NumberLiteral {
                value: NumberValue::Integer(2),
                class: NumericClass::Number
            }),
            TokenKind::Eos,
        ]
    );
}

#[test]
fn test_float_literal() {
    let stream = tokenize("main.lang", "1.5").unwrap();
    let expr = parse_expression(stream).unwrap();
    assert!(matches!(
        expr.kind,
        ExprKind::Literal(Literal::Float { value, .. }) if value == 1.5
    ));
}

#[test]
fn test_parse_error_is_rendered_with_source_excerpt() {
    let source = "#entrypoint { let x = ; }";
    let stream = tokenize("main.lang", source).unwrap();
    let error = parse(stream).unwrap_err();
    let rendered = render_error(&error, source);
    let lines: Vec<&str> = rendered.lines().collect();

    assert!(lines[0].starts_with("ExpectedExpression at [1:23..1:24]"));
    assert_eq!(lines[1], "-> main.lang");
    assert_eq!(lines[2], "  |");
    assert_eq!(lines[3], "1 | #entrypoint { let x = ; }");
    assert_eq!(lines[4], format!("  | {}^", " ".repeat(22)));
}

#[test]
fn test_lexical_error_inside_block() {
    let source = "#entrypoint {\n    let s = \"abc\n}\n";
    let error = tokenize("main.lang", source).unwrap_err();
    assert_eq!(error.get_error_name(), "UnclosedStringLiteral");
    assert_eq!(error.get_span().start.row, 2);
}
