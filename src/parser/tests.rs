//! Unit tests for the parser module.
//!
//! This module contains tests for parsing various language constructs including:
//! - Operator precedence and associativity
//! - Prefix operators, references and postfix chains
//! - Declarations and type annotations
//! - Blocks, `if` chains and statement termination
//! - Top-level items

use proptest::prelude::*;

use crate::ast::{
    ast::ItemKind,
    expressions::{AssignOp, BinaryOp, Expr, ExprKind, Literal, UnaryOp},
    statements::{Stmt, StmtKind},
    types::{Mutability, Type, TypeKind},
};
use crate::errors::errors::{Error, ErrorImpl};
use crate::lexer::tokens::NumericClass;
use crate::token_tree::tree::tokenize;

use super::parser::{parse, parse_expression, parse_statement};

fn expr(source: &str) -> Expr {
    let stream = tokenize("test.lang", source).unwrap();
    parse_expression(stream).unwrap()
}

fn expr_error(source: &str) -> Error {
    let stream = tokenize("test.lang", source).unwrap();
    parse_expression(stream).unwrap_err()
}

fn stmt(source: &str) -> Result<Stmt, Error> {
    let stream = tokenize("test.lang", source).unwrap();
    parse_statement(stream)
}

fn decl_type(source: &str) -> Result<Type, Error> {
    match stmt(source)?.kind {
        StmtKind::Decl(decl) => Ok(decl.ty),
        other => panic!("expected a declaration, got {:?}", other),
    }
}

fn path_name(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Path(path) => path.to_string(),
        other => panic!("expected a path, got {:?}", other),
    }
}

fn integer(expr: &Expr) -> u64 {
    match &expr.kind {
        ExprKind::Literal(Literal::Integer { value, .. }) => *value,
        other => panic!("expected an integer, got {:?}", other),
    }
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    let expr = expr("1 + 2 * 3");

    let ExprKind::Binary { op, lhs, rhs } = &expr.kind else {
        panic!("expected binary, got {:?}", expr.kind);
    };
    assert_eq!(*op, BinaryOp::Add);
    assert_eq!(integer(lhs), 1);

    let ExprKind::Binary { op, lhs, rhs } = &rhs.kind else {
        panic!("expected binary, got {:?}", rhs.kind);
    };
    assert_eq!(*op, BinaryOp::Mul);
    assert_eq!(integer(lhs), 2);
    assert_eq!(integer(rhs), 3);
    assert_eq!(expr.span.to_string(), "[1:1..1:10]");
}

#[test]
fn test_binary_operators_are_left_associative() {
    let expr = expr("1 - 2 - 3");

    let ExprKind::Binary { op, lhs, rhs } = &expr.kind else {
        panic!("expected binary, got {:?}", expr.kind);
    };
    assert_eq!(*op, BinaryOp::Sub);
    assert_eq!(integer(rhs), 3);
    assert!(matches!(
        lhs.kind,
        ExprKind::Binary {
            op: BinaryOp::Sub,
            ..
        }
    ));
}

#[test]
fn test_assignment_is_right_associative() {
    let expr = expr("a = b = c");

    let ExprKind::Assign { op, lhs, rhs } = &expr.kind else {
        panic!("expected assignment, got {:?}", expr.kind);
    };
    assert_eq!(*op, AssignOp::Assign);
    assert_eq!(path_name(lhs), "a");

    let ExprKind::Assign { lhs, rhs, .. } = &rhs.kind else {
        panic!("expected assignment, got {:?}", rhs.kind);
    };
    assert_eq!(path_name(lhs), "b");
    assert_eq!(path_name(rhs), "c");
}

#[test]
fn test_assignment_binds_loosest() {
    let expr = expr("x <<= a || b && c == d | e");

    let ExprKind::Assign { op, rhs, .. } = &expr.kind else {
        panic!("expected assignment, got {:?}", expr.kind);
    };
    assert_eq!(*op, AssignOp::ShlAssign);

    let ExprKind::Binary { op, rhs, .. } = &rhs.kind else {
        panic!("expected binary, got {:?}", rhs.kind);
    };
    assert_eq!(*op, BinaryOp::Or);

    let ExprKind::Binary { op, rhs, .. } = &rhs.kind else {
        panic!("expected binary, got {:?}", rhs.kind);
    };
    assert_eq!(*op, BinaryOp::And);

    let ExprKind::Binary { op, rhs, .. } = &rhs.kind else {
        panic!("expected binary, got {:?}", rhs.kind);
    };
    assert_eq!(*op, BinaryOp::Eq);
    assert!(matches!(
        rhs.kind,
        ExprKind::Binary {
            op: BinaryOp::BitOr,
            ..
        }
    ));
}

#[test]
fn test_walrus_and_logical_compound_assignments() {
    assert!(matches!(
        expr("a := 1").kind,
        ExprKind::Assign {
            op: AssignOp::Walrus,
            ..
        }
    ));
    assert!(matches!(
        expr("a &&= b").kind,
        ExprKind::Assign {
            op: AssignOp::AndAssign,
            ..
        }
    ));
    assert!(matches!(
        expr("a ||= b").kind,
        ExprKind::Assign {
            op: AssignOp::OrAssign,
            ..
        }
    ));
}

#[test]
fn test_postfix_chain() {
    let expr = expr("a.b[0](1, 2)");
    assert_eq!(expr.span.to_string(), "[1:1..1:13]");

    let ExprKind::Call { callee, arguments } = &expr.kind else {
        panic!("expected call, got {:?}", expr.kind);
    };
    assert_eq!(arguments.len(), 2);
    assert_eq!(integer(&arguments[0]), 1);
    assert_eq!(integer(&arguments[1]), 2);
    assert_eq!(callee.span.to_string(), "[1:1..1:7]");

    let ExprKind::Subscript { base, index } = &callee.kind else {
        panic!("expected subscript, got {:?}", callee.kind);
    };
    assert_eq!(integer(index), 0);

    let ExprKind::Member { base, field } = &base.kind else {
        panic!("expected member access, got {:?}", base.kind);
    };
    assert_eq!(field, "b");
    assert_eq!(path_name(base), "a");
}

#[test]
fn test_call_without_arguments() {
    let expr = expr("f()");
    assert!(matches!(
        &expr.kind,
        ExprKind::Call { arguments, .. } if arguments.is_empty()
    ));
}

#[test]
fn test_call_arguments_need_separators() {
    let error = expr_error("f(a b)");
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: "`,` or `)`".to_string(),
            found: "identifier `b`".to_string(),
        }
    );
    assert_eq!(error.get_span().to_string(), "[1:5..1:6]");
}

#[test]
fn test_prefix_operators_nest() {
    let expr = expr("-*p");

    let ExprKind::Unary { op, operand } = &expr.kind else {
        panic!("expected unary, got {:?}", expr.kind);
    };
    assert_eq!(*op, UnaryOp::Minus);
    assert!(matches!(
        operand.kind,
        ExprKind::Unary {
            op: UnaryOp::Deref,
            ..
        }
    ));
}

#[test]
fn test_prefix_operator_applies_to_postfix_chain() {
    let expr = expr("!a.b");

    let ExprKind::Unary { op, operand } = &expr.kind else {
        panic!("expected unary, got {:?}", expr.kind);
    };
    assert_eq!(*op, UnaryOp::Not);
    assert!(matches!(operand.kind, ExprKind::Member { .. }));
}

#[test]
fn test_double_ampersand_is_two_references() {
    let expr = expr("&&x");
    assert_eq!(expr.span.to_string(), "[1:1..1:4]");

    let ExprKind::Reference(inner) = &expr.kind else {
        panic!("expected reference, got {:?}", expr.kind);
    };
    assert_eq!(inner.span.to_string(), "[1:2..1:4]");

    let ExprKind::Reference(target) = &inner.kind else {
        panic!("expected reference, got {:?}", inner.kind);
    };
    assert_eq!(path_name(target), "x");
}

#[test]
fn test_double_ampersand_between_operands_is_logical_and() {
    assert!(matches!(
        expr("a && &b").kind,
        ExprKind::Binary {
            op: BinaryOp::And,
            ..
        }
    ));
}

#[test]
fn test_literals() {
    assert_eq!(
        expr("10u8").kind,
        ExprKind::Literal(Literal::Integer {
            value: 10,
            class: NumericClass::U8
        })
    );
    assert_eq!(
        expr("1.5").kind,
        ExprKind::Literal(Literal::Float {
            value: 1.5,
            class: NumericClass::FloatingPointNumber
        })
    );
    assert_eq!(
        expr("\"hi\"").kind,
        ExprKind::Literal(Literal::String("hi".to_string()))
    );
    assert_eq!(expr("'c'").kind, ExprKind::Literal(Literal::Char('c')));
    assert_eq!(expr("true").kind, ExprKind::Literal(Literal::Bool(true)));
    assert_eq!(expr("false").kind, ExprKind::Literal(Literal::Bool(false)));
    assert_eq!(expr("nil").kind, ExprKind::Literal(Literal::Nil));
}

#[test]
fn test_path_segments() {
    let expr = expr("std:io:out");
    let ExprKind::Path(path) = &expr.kind else {
        panic!("expected path, got {:?}", expr.kind);
    };
    assert_eq!(path.segments.len(), 3);
    assert_eq!(path.to_string(), "std:io:out");
    assert_eq!(path.span.to_string(), "[1:1..1:11]");
    assert!(!path.is_single("std"));
}

#[test]
fn test_paren_span_covers_parentheses() {
    let expr = expr("(a + b) * c");
    let ExprKind::Binary { op, lhs, .. } = &expr.kind else {
        panic!("expected binary, got {:?}", expr.kind);
    };
    assert_eq!(*op, BinaryOp::Mul);
    assert!(matches!(lhs.kind, ExprKind::Paren(_)));
    assert_eq!(lhs.span.to_string(), "[1:1..1:8]");
}

#[test]
fn test_if_else_if_chain() {
    let expr = expr("if a { b; } else if c { d; } else { e; }");
    assert_eq!(expr.span.to_string(), "[1:1..1:41]");

    let ExprKind::If {
        condition,
        then_block,
        else_branch,
    } = &expr.kind
    else {
        panic!("expected if, got {:?}", expr.kind);
    };
    assert_eq!(path_name(condition), "a");
    assert_eq!(then_block.stmts.len(), 1);

    let Some(else_if) = else_branch else {
        panic!("expected an else branch");
    };
    let ExprKind::If { else_branch, .. } = &else_if.kind else {
        panic!("expected else-if, got {:?}", else_if.kind);
    };
    assert!(matches!(
        else_branch.as_deref().map(|e| &e.kind),
        Some(ExprKind::Block(_))
    ));
}

#[test]
fn test_if_without_else() {
    let expr = expr("if a { b; }");
    assert!(matches!(
        expr.kind,
        ExprKind::If {
            else_branch: None,
            ..
        }
    ));
    assert_eq!(expr.span.to_string(), "[1:1..1:12]");
}

#[test]
fn test_expected_expression() {
    let error = expr_error("1 + ;");
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::ExpectedExpression {
            found: "`;`".to_string()
        }
    );
    assert_eq!(error.get_span().to_string(), "[1:5..1:6]");
}

#[test]
fn test_trailing_input_is_rejected() {
    let error = expr_error("1 2");
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::TrailingInput {
            found: "number `2`".to_string()
        }
    );
}

#[test]
fn test_expression_statement_needs_semicolon() {
    let error = stmt("x + y").unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: "`;`".to_string(),
            found: "end of stream".to_string(),
        }
    );

    let stmt = stmt("x + y;").unwrap();
    assert_eq!(stmt.span.to_string(), "[1:1..1:7]");
    assert!(matches!(
        stmt.kind,
        StmtKind::Expr(ref expr_stmt) if expr_stmt.had_trailing_semicolon
    ));
}

#[test]
fn test_block_like_statement_needs_no_semicolon() {
    let stmt = stmt("if x { y; }").unwrap();
    let StmtKind::Expr(expr_stmt) = &stmt.kind else {
        panic!("expected expression statement, got {:?}", stmt.kind);
    };
    assert!(!expr_stmt.had_trailing_semicolon);
    assert!(matches!(expr_stmt.expr.kind, ExprKind::If { .. }));
}

#[test]
fn test_semicolon_after_block_like_statement_is_trailing_input() {
    let error = stmt("if x { y; };").unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::TrailingInput {
            found: "`;`".to_string()
        }
    );
}

#[test]
fn test_last_statement_of_block_needs_semicolon() {
    let stream = tokenize("test.lang", "#entrypoint { x }").unwrap();
    let error = parse(stream).unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: "`;`".to_string(),
            found: "`}`".to_string(),
        }
    );
    assert_eq!(error.get_span().to_string(), "[1:17..1:18]");
}

#[test]
fn test_semicolon_before_closing_brace_is_rejected() {
    let stream = tokenize("test.lang", "#entrypoint { a; ; }").unwrap();
    let error = parse(stream).unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::ExpectedExpression {
            found: "`}`".to_string()
        }
    );
    assert_eq!(error.get_span().to_string(), "[1:20..1:21]");
}

#[test]
fn test_semicolons_before_a_statement_are_skipped() {
    let expr = expr("{ ;; a; b; }");
    let ExprKind::Block(block) = &expr.kind else {
        panic!("expected block, got {:?}", expr.kind);
    };

    let semis: Vec<bool> = block
        .iter()
        .map(|stmt| match &stmt.kind {
            StmtKind::Expr(expr_stmt) => expr_stmt.had_trailing_semicolon,
            other => panic!("expected expression statement, got {:?}", other),
        })
        .collect();
    assert_eq!(semis, vec![true, true]);
}

#[test]
fn test_inner_statement_needs_semicolon() {
    let stream = tokenize("test.lang", "{ a b }").unwrap();
    let error = parse_expression(stream).unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: "`;`".to_string(),
            found: "identifier `b`".to_string(),
        }
    );
}

#[test]
fn test_empty_block() {
    let expr = expr("{}");
    assert!(matches!(&expr.kind, ExprKind::Block(block) if block.stmts.is_empty()));
    assert_eq!(expr.span.to_string(), "[1:1..1:3]");
}

#[test]
fn test_let_declaration_with_inferred_type() {
    let stmt = stmt("let x = 1;").unwrap();
    assert_eq!(stmt.span.to_string(), "[1:1..1:11]");

    let StmtKind::Decl(decl) = &stmt.kind else {
        panic!("expected declaration, got {:?}", stmt.kind);
    };
    assert_eq!(decl.mutability, Mutability::Mut);
    assert_eq!(decl.identifier, "x");
    assert_eq!(decl.ty.kind, TypeKind::Inferred);
    assert_eq!(decl.ty.span.to_string(), "[1:6..1:6]");
    assert_eq!(integer(decl.initializer.as_ref().unwrap()), 1);
}

#[test]
fn test_const_declaration_with_nullable_reference() {
    let stmt = stmt("const y &let int? = nil;").unwrap();
    let StmtKind::Decl(decl) = &stmt.kind else {
        panic!("expected declaration, got {:?}", stmt.kind);
    };
    assert_eq!(decl.mutability, Mutability::Const);
    assert_eq!(decl.ty.span.to_string(), "[1:9..1:18]");

    let TypeKind::Ref(pointer) = &decl.ty.kind else {
        panic!("expected reference type, got {:?}", decl.ty.kind);
    };
    assert_eq!(pointer.mutability, Mutability::Mut);
    assert!(pointer.nullable);
    assert!(matches!(&pointer.inner.kind, TypeKind::Path(path) if path.is_single("int")));
}

#[test]
fn test_declaration_without_initializer() {
    let stmt = stmt("let x int;").unwrap();
    let StmtKind::Decl(decl) = &stmt.kind else {
        panic!("expected declaration, got {:?}", stmt.kind);
    };
    assert!(decl.initializer.is_none());
    assert!(matches!(decl.ty.kind, TypeKind::Path(_)));
}

#[test]
fn test_declaration_needs_identifier() {
    let error = stmt("let = 1;").unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: "identifier".to_string(),
            found: "`=`".to_string(),
        }
    );
}

#[test]
fn test_pointer_types() {
    let ty = decl_type("let a *int;").unwrap();
    assert!(matches!(
        &ty.kind,
        TypeKind::Ptr(pointer) if pointer.mutability == Mutability::Const && !pointer.nullable
    ));

    let ty = decl_type("let a & &int;").unwrap();
    assert_eq!(ty.span.to_string(), "[1:7..1:13]");
    let TypeKind::Ref(outer) = &ty.kind else {
        panic!("expected reference type, got {:?}", ty.kind);
    };
    assert!(matches!(outer.inner.kind, TypeKind::Ref(_)));
}

#[test]
fn test_double_ampersand_is_not_a_type() {
    let error = decl_type("let a &&int;").unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::ExpectedType {
            found: "`&&`".to_string()
        }
    );
    assert_eq!(error.get_span().to_string(), "[1:7..1:9]");
}

#[test]
fn test_array_and_slice_types() {
    let ty = decl_type("let a [4]u8;").unwrap();
    assert!(matches!(
        &ty.kind,
        TypeKind::Array { size: 4, inner } if matches!(inner.kind, TypeKind::Path(_))
    ));
    assert_eq!(ty.span.to_string(), "[1:7..1:12]");

    let ty = decl_type("let a []u8;").unwrap();
    assert!(matches!(ty.kind, TypeKind::Slice(_)));
}

#[test]
fn test_array_size_must_be_an_integer() {
    let error = decl_type("let a [1.5]u8;").unwrap_err();
    assert_eq!(error.get_error_name(), "ExpectedArraySize");

    let error = decl_type("let a [n]u8;").unwrap_err();
    assert_eq!(error.get_error_name(), "ExpectedArraySize");
}

#[test]
fn test_tuple_types() {
    let ty = decl_type("let a (int, bool);").unwrap();
    assert!(matches!(&ty.kind, TypeKind::Tuple(types) if types.len() == 2));
    assert_eq!(ty.span.to_string(), "[1:7..1:18]");

    let ty = decl_type("let a (int);").unwrap();
    assert!(matches!(&ty.kind, TypeKind::Path(path) if path.is_single("int")));
}

#[test]
fn test_empty_and_trailing_comma_tuples_are_rejected() {
    let error = decl_type("let a ();").unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::ExpectedType {
            found: "`)`".to_string()
        }
    );

    let error = decl_type("let a (int,);").unwrap_err();
    assert_eq!(error.get_error_name(), "ExpectedType");
}

#[test]
fn test_owned_and_nullable_types() {
    let ty = decl_type("let a |int|;").unwrap();
    assert!(matches!(ty.kind, TypeKind::Owned(_)));

    let ty = decl_type("let a int?;").unwrap();
    assert!(matches!(ty.kind, TypeKind::Nullable(_)));
    assert_eq!(ty.span.to_string(), "[1:7..1:11]");
}

#[test]
fn test_generic_arguments_are_unsupported() {
    let error = decl_type("let a List(int);").unwrap_err();
    assert_eq!(error.get_kind(), &ErrorImpl::UnsupportedGenericArguments);
    assert_eq!(error.get_span().to_string(), "[1:7..1:12]");
}

#[test]
fn test_parse_entrypoint_item() {
    let stream = tokenize("test.lang", "#entrypoint {\n    let x = 1;\n}\n").unwrap();
    let source = parse(stream).unwrap();

    assert_eq!(source.items.len(), 1);
    let ItemKind::RunBlock(block) = &source.items[0].kind;
    assert_eq!(block.stmts.len(), 1);
    assert_eq!(source.items[0].span.to_string(), "[1:1..3:2]");
}

#[test]
fn test_parse_empty_source() {
    let stream = tokenize("test.lang", "  // nothing\n").unwrap();
    assert!(parse(stream).unwrap().items.is_empty());
}

#[test]
fn test_unsupported_directives() {
    for (source, name) in [("#open a", "open"), ("#include a", "include"), ("#if a", "if")] {
        let stream = tokenize("test.lang", source).unwrap();
        let error = parse(stream).unwrap_err();
        assert_eq!(
            error.get_kind(),
            &ErrorImpl::UnsupportedDirective {
                directive: name.to_string()
            }
        );
    }
}

#[test]
fn test_top_level_statement_is_rejected() {
    let stream = tokenize("test.lang", "let x = 1;").unwrap();
    let error = parse(stream).unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnknownTopLevelToken {
            found: "keyword `let`".to_string()
        }
    );
    assert_eq!(error.get_span().to_string(), "[1:1..1:4]");
}

fn identifier() -> impl Strategy<Value = String> {
    "[a-z]_[a-z0-9]{0,5}"
}

proptest! {
    #[test]
    fn parse_never_panics(input in "\\PC{0,200}") {
        if let Ok(stream) = tokenize("prop.lang", &input) {
            let _result = parse(stream);
        }
    }

    #[test]
    fn additive_chains_nest_to_the_left(names in prop::collection::vec(identifier(), 1..10)) {
        let source = names.join(" + ");
        let stream = tokenize("prop.lang", &source).unwrap();
        let expr = parse_expression(stream).unwrap();

        prop_assert_eq!(expr.span.to_string(), format!("[1:1..1:{}]", source.len() + 1));

        let mut depth = 0;
        let mut current = &expr;
        while let ExprKind::Binary { op, lhs, .. } = &current.kind {
            prop_assert_eq!(*op, BinaryOp::Add);
            prop_assert_eq!(lhs.span.start, expr.span.start);
            current = lhs;
            depth += 1;
        }
        prop_assert_eq!(depth, names.len() - 1);
    }
}
