//! Pretty printer for the AST.
//!
//! Every node renders as `Kind { span = [r:c..r:c], field = value, ... }`,
//! with child nodes on their own lines, indented four spaces per level.

use super::{
    ast::{Item, ItemKind, Source},
    expressions::{Expr, ExprKind, Literal},
    statements::{Block, Stmt, StmtKind},
    types::{Type, TypeKind},
};

const INDENT: &str = "    ";

pub fn print_source(source: &Source) -> String {
    let mut printer = Printer::default();
    printer.source(source, 0);
    printer.out
}

pub fn print_expr(expr: &Expr) -> String {
    let mut printer = Printer::default();
    printer.expr(expr, 0);
    printer.out
}

pub fn print_stmt(stmt: &Stmt) -> String {
    let mut printer = Printer::default();
    printer.stmt(stmt, 0);
    printer.out
}

pub fn print_type(ty: &Type) -> String {
    let mut printer = Printer::default();
    printer.ty(ty, 0);
    printer.out
}

#[derive(Default)]
struct Printer {
    out: String,
}

impl Printer {
    fn push(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn indent(&mut self, level: usize) {
        for _ in 0..level {
            self.out.push_str(INDENT);
        }
    }

    /// Starts `name = ` on a fresh line one level deeper.
    fn field(&mut self, name: &str, level: usize) {
        self.push(",\n");
        self.indent(level + 1);
        self.push(name);
        self.push(" = ");
    }

    fn open(&mut self, kind: &str, span: &crate::Span) {
        self.push(&format!("{} {{ span = {}", kind, span));
    }

    fn close(&mut self) {
        self.push(" }");
    }

    fn source(&mut self, source: &Source, level: usize) {
        self.push("Source [\n");
        for item in &source.items {
            self.indent(level + 1);
            self.item(item, level + 1);
            self.push(",\n");
        }
        self.indent(level);
        self.push("]");
    }

    fn item(&mut self, item: &Item, level: usize) {
        match &item.kind {
            ItemKind::RunBlock(block) => {
                self.open("RunBlock", &item.span);
                self.push(", ");
                self.block(block, level);
            }
        }
        self.close();
    }

    fn block(&mut self, block: &Block, level: usize) {
        self.push("Block [\n");
        for stmt in block.iter() {
            self.indent(level + 1);
            self.stmt(stmt, level + 1);
            self.push(",\n");
        }
        self.indent(level);
        self.push("]");
    }

    fn stmt(&mut self, stmt: &Stmt, level: usize) {
        match &stmt.kind {
            StmtKind::Expr(expr_stmt) => {
                self.open("Expr", &stmt.span);
                self.push(&format!(", semi = {}", expr_stmt.had_trailing_semicolon));
                self.field("expr", level);
                self.expr(&expr_stmt.expr, level + 1);
            }
            StmtKind::Decl(decl) => {
                self.open("Decl", &stmt.span);
                self.push(&format!(
                    ", ident = {}, mut = {:?}",
                    decl.identifier, decl.mutability
                ));
                self.field("init", level);
                match &decl.initializer {
                    Some(init) => self.expr(init, level + 1),
                    None => self.push("None"),
                }
                self.field("type", level);
                self.ty(&decl.ty, level + 1);
            }
        }
        self.close();
    }

    fn expr(&mut self, expr: &Expr, level: usize) {
        match &expr.kind {
            ExprKind::Literal(literal) => {
                self.open("Literal", &expr.span);
                match literal {
                    Literal::String(value) => self.push(&format!(", string = {:?}", value)),
                    Literal::Char(value) => self.push(&format!(", char = {:?}", value)),
                    Literal::Bool(value) => self.push(&format!(", boolean = {}", value)),
                    Literal::Nil => self.push(", nil"),
                    Literal::Integer { value, class } => {
                        self.push(&format!(", integer = {}:{}", value, class))
                    }
                    Literal::Float { value, class } => {
                        self.push(&format!(", float = {:?}:{}", value, class))
                    }
                }
            }
            ExprKind::Path(path) => {
                self.open("Path", &expr.span);
                self.push(&format!(", path = {}", path));
            }
            ExprKind::Unary { op, operand } => {
                self.open("Unary", &expr.span);
                self.push(&format!(", op = UnaryOp::{:?}", op));
                self.field("expr", level);
                self.expr(operand, level + 1);
            }
            ExprKind::Call { callee, arguments } => {
                self.open("Call", &expr.span);
                self.field("function", level);
                self.expr(callee, level + 1);
                self.field("arguments", level);
                self.push("[");
                for argument in arguments {
                    self.push("\n");
                    self.indent(level + 2);
                    self.expr(argument, level + 2);
                    self.push(",");
                }
                self.push("]");
            }
            ExprKind::Subscript { base, index } => {
                self.open("Subscript", &expr.span);
                self.field("expr", level);
                self.expr(base, level + 1);
                self.field("index", level);
                self.expr(index, level + 1);
            }
            ExprKind::Member { base, field } => {
                self.open("Member", &expr.span);
                self.push(&format!(", ident = {}", field));
                self.field("expr", level);
                self.expr(base, level + 1);
            }
            ExprKind::Paren(inner) => {
                self.open("Paren", &expr.span);
                self.field("expr", level);
                self.expr(inner, level + 1);
            }
            ExprKind::Binary { op, lhs, rhs } => {
                self.open("Binary", &expr.span);
                self.push(&format!(", op = BinaryOp::{:?}", op));
                self.field("lhs", level);
                self.expr(lhs, level + 1);
                self.field("rhs", level);
                self.expr(rhs, level + 1);
            }
            ExprKind::Assign { op, lhs, rhs } => {
                self.open("Assign", &expr.span);
                self.push(&format!(", op = AssignOp::{:?}", op));
                self.field("lhs", level);
                self.expr(lhs, level + 1);
                self.field("rhs", level);
                self.expr(rhs, level + 1);
            }
            ExprKind::Reference(inner) => {
                self.open("Reference", &expr.span);
                self.field("expr", level);
                self.expr(inner, level + 1);
            }
            ExprKind::If {
                condition,
                then_block,
                else_branch,
            } => {
                self.open("If", &expr.span);
                self.field("condition", level);
                self.expr(condition, level + 1);
                self.field("if_branch", level);
                self.block(then_block, level + 1);
                self.field("else_block", level);
                match else_branch {
                    Some(else_branch) => self.expr(else_branch, level + 1),
                    None => self.push("None"),
                }
            }
            ExprKind::Block(block) => {
                self.open("Block", &expr.span);
                self.field("block", level);
                self.block(block, level + 1);
            }
        }
        self.close();
    }

    fn ty(&mut self, ty: &Type, level: usize) {
        match &ty.kind {
            TypeKind::Inferred => {
                self.push("Inferred");
                return;
            }
            TypeKind::Path(path) => {
                self.open("Path", &ty.span);
                self.push(&format!(", path = {}", path));
            }
            TypeKind::Owned(inner) => {
                self.open("Owned", &ty.span);
                self.field("inner", level);
                self.ty(inner, level + 1);
            }
            TypeKind::Ref(pointer) | TypeKind::Ptr(pointer) => {
                let kind = if matches!(ty.kind, TypeKind::Ref(_)) { "Ref" } else { "Ptr" };
                self.open(kind, &ty.span);
                self.push(&format!(
                    ", mut = {:?}, nullable = {}",
                    pointer.mutability, pointer.nullable
                ));
                self.field("inner", level);
                self.ty(&pointer.inner, level + 1);
            }
            TypeKind::Generic(generic) => {
                self.open("Generic", &ty.span);
                self.field("base", level);
                self.ty(&generic.base, level + 1);
                self.field("arguments", level);
                self.type_list(&generic.arguments, level);
            }
            TypeKind::Array { inner, size } => {
                self.open("Array", &ty.span);
                self.push(&format!(", size = {}", size));
                self.field("inner", level);
                self.ty(inner, level + 1);
            }
            TypeKind::Slice(inner) => {
                self.open("Slice", &ty.span);
                self.field("inner", level);
                self.ty(inner, level + 1);
            }
            TypeKind::Tuple(types) => {
                self.open("Tuple", &ty.span);
                self.field("types", level);
                self.type_list(types, level);
            }
            TypeKind::Nullable(inner) => {
                self.open("Nullable", &ty.span);
                self.field("inner", level);
                self.ty(inner, level + 1);
            }
        }
        self.close();
    }

    fn type_list(&mut self, types: &[Type], level: usize) {
        self.push("[");
        for ty in types {
            self.push("\n");
            self.indent(level + 2);
            self.ty(ty, level + 2);
            self.push(",");
        }
        self.push("]");
    }
}
