use std::slice::Iter;

use crate::Span;

use super::{expressions::Expr, types::{Mutability, Type}};

#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    Expr(ExprStmt),
    Decl(DeclStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmt {
    pub expr: Expr,
    pub had_trailing_semicolon: bool,
}

/// `const x T = init;` or `let x = init;`
#[derive(Debug, Clone, PartialEq)]
pub struct DeclStmt {
    pub mutability: Mutability,
    pub identifier: String,
    pub initializer: Option<Expr>,
    /// `Inferred` when no type was written.
    pub ty: Type,
}

/// `{ stmt* }`
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

impl Block {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.stmts.iter()
    }
}
