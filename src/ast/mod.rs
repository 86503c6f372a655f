/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Top-level items, paths and the `Node` trait
/// - expressions: Expression nodes and operators
/// - statements: Statement and block nodes
/// - types: Type annotation nodes
/// - printer: Indented tree rendering of any node
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;
pub mod types;
