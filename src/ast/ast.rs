use crate::Span;

use super::{
    expressions::Expr,
    statements::{Block, Stmt},
    types::Type,
};

/// Node Trait
///
/// Shared behaviour of every AST node.
pub trait Node {
    /// Returns the span of the node.
    fn get_span(&self) -> &Span;
}

/// A whole source file: its top-level items in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub kind: ItemKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    /// Body of an `#entrypoint` directive.
    RunBlock(Block),
}

/// `a:b:c`
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub segments: Vec<PathSegment>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PathSegment {
    pub ident: String,
    pub span: Span,
}

impl Path {
    #[cfg(test)]
    pub fn is_single(&self, ident: &str) -> bool {
        self.segments.len() == 1 && self.segments[0].ident == ident
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let segments: Vec<&str> = self.segments.iter().map(|s| s.ident.as_str()).collect();
        write!(f, "{}", segments.join(":"))
    }
}

impl Node for Item {
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Node for Path {
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Node for Expr {
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Node for Stmt {
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Node for Block {
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Node for Type {
    fn get_span(&self) -> &Span {
        &self.span
    }
}
