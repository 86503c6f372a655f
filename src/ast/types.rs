//! Type annotations in the AST.
//!
//! These are purely syntactic: a `Path` type is just the name that was
//! written. Nothing here is resolved or checked.

use crate::Span;

use super::ast::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct Type {
    pub kind: TypeKind,
    pub span: Span,
}

impl Type {
    pub fn new(kind: TypeKind, span: Span) -> Self {
        Type { kind, span }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    Path(Path),
    /// `|T|`
    Owned(Box<Type>),
    /// `&T`, `&let T`
    Ref(PointerType),
    /// `*T`, `*let T`
    Ptr(PointerType),
    /// `Base(Args...)`. The parser reports these as unsupported for now.
    Generic(GenericType),
    /// `[N]T`
    Array { inner: Box<Type>, size: u64 },
    /// `[]T`
    Slice(Box<Type>),
    Tuple(Vec<Type>),
    /// No type was written.
    Inferred,
    /// `T?`
    Nullable(Box<Type>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointerType {
    pub inner: Box<Type>,
    pub mutability: Mutability,
    /// Hoisted from a `Nullable` inner type: `&T?` is a nullable reference.
    pub nullable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenericType {
    pub base: Box<Type>,
    pub arguments: Vec<Type>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutability {
    Const,
    Mut,
}

impl std::fmt::Display for Mutability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mutability::Const => write!(f, "const"),
            Mutability::Mut => write!(f, "mut"),
        }
    }
}
