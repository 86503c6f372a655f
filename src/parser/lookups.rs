use std::collections::HashMap;

use crate::{
    ast::{
        ast::Item,
        expressions::{AssignOp, BinaryOp, UnaryOp},
        statements::Stmt,
    },
    errors::errors::Error,
    lexer::tokens::{Directive, Keyword, Punct},
};

use super::{item::*, parser::Parser, stmt::*};

/// How tightly an infix operator holds its operands. Higher binds tighter.
#[repr(u8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default = 0,
    Assignment = 2,
    LogicalOr = 3,
    LogicalAnd = 4,
    Relational = 5,
    BitwiseOr = 6,
    BitwiseXor = 7,
    BitwiseAnd = 8,
    Shift = 9,
    Additive = 10,
    Multiplicative = 11,
}

/// Added to an operator's binding power to get the minimum power of its
/// right operand.
#[repr(u8)]
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Associativity {
    Right = 0,
    Left = 1,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum InfixOperator {
    Binary(BinaryOp),
    Assignment(AssignOp),
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct InfixOp {
    pub operator: InfixOperator,
    pub binding_power: BindingPower,
    pub associativity: Associativity,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type ItemHandler = fn(&mut Parser) -> Result<Item, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    use Associativity::*;
    use InfixOperator::{Assignment, Binary};

    // Assignment
    let assignments = [
        (Punct::Assignment, AssignOp::Assign),
        (Punct::Walrus, AssignOp::Walrus),
        (Punct::PlusEquals, AssignOp::AddAssign),
        (Punct::MinusEquals, AssignOp::SubAssign),
        (Punct::StarEquals, AssignOp::MulAssign),
        (Punct::SlashEquals, AssignOp::DivAssign),
        (Punct::PercentEquals, AssignOp::ModAssign),
        (Punct::PipeEquals, AssignOp::BitOrAssign),
        (Punct::AmpersandEquals, AssignOp::BitAndAssign),
        (Punct::CaretEquals, AssignOp::BitXorAssign),
        (Punct::ShiftLeftEquals, AssignOp::ShlAssign),
        (Punct::ShiftRightEquals, AssignOp::ShrAssign),
        (Punct::AndEquals, AssignOp::AndAssign),
        (Punct::OrEquals, AssignOp::OrAssign),
    ];
    for (punct, op) in assignments {
        parser.led(punct, Assignment(op), BindingPower::Assignment, Right);
    }

    // Logical
    parser.led(Punct::Or, Binary(BinaryOp::Or), BindingPower::LogicalOr, Left);
    parser.led(Punct::And, Binary(BinaryOp::And), BindingPower::LogicalAnd, Left);

    // Relational
    parser.led(Punct::Equals, Binary(BinaryOp::Eq), BindingPower::Relational, Left);
    parser.led(Punct::NotEquals, Binary(BinaryOp::Ne), BindingPower::Relational, Left);
    parser.led(Punct::Greater, Binary(BinaryOp::Gt), BindingPower::Relational, Left);
    parser.led(Punct::GreaterEquals, Binary(BinaryOp::Ge), BindingPower::Relational, Left);
    parser.led(Punct::Less, Binary(BinaryOp::Lt), BindingPower::Relational, Left);
    parser.led(Punct::LessEquals, Binary(BinaryOp::Le), BindingPower::Relational, Left);

    // Bitwise
    parser.led(Punct::Pipe, Binary(BinaryOp::BitOr), BindingPower::BitwiseOr, Left);
    parser.led(Punct::Caret, Binary(BinaryOp::BitXor), BindingPower::BitwiseXor, Left);
    parser.led(Punct::Ampersand, Binary(BinaryOp::BitAnd), BindingPower::BitwiseAnd, Left);
    parser.led(Punct::ShiftLeft, Binary(BinaryOp::Shl), BindingPower::Shift, Left);
    parser.led(Punct::ShiftRight, Binary(BinaryOp::Shr), BindingPower::Shift, Left);

    // Additive and multiplicative
    parser.led(Punct::Plus, Binary(BinaryOp::Add), BindingPower::Additive, Left);
    parser.led(Punct::Dash, Binary(BinaryOp::Sub), BindingPower::Additive, Left);
    parser.led(Punct::Star, Binary(BinaryOp::Mul), BindingPower::Multiplicative, Left);
    parser.led(Punct::Slash, Binary(BinaryOp::Div), BindingPower::Multiplicative, Left);
    parser.led(Punct::Percent, Binary(BinaryOp::Mod), BindingPower::Multiplicative, Left);

    // Prefix. `&` and `&&` build references and are handled separately.
    parser.prefix(Punct::Tilde, UnaryOp::BitwiseNot);
    parser.prefix(Punct::Not, UnaryOp::Not);
    parser.prefix(Punct::Plus, UnaryOp::Plus);
    parser.prefix(Punct::Dash, UnaryOp::Minus);
    parser.prefix(Punct::Star, UnaryOp::Deref);

    // Statements
    parser.stmt(Keyword::Const, parse_decl_stmt);
    parser.stmt(Keyword::Let, parse_decl_stmt);

    // Items
    parser.item(Directive::Entrypoint, parse_entrypoint_item);
    parser.item(Directive::Open, parse_unsupported_directive);
    parser.item(Directive::Include, parse_unsupported_directive);
    parser.item(Directive::If, parse_unsupported_directive);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<Keyword, StmtHandler>;
pub type ItemLookup = HashMap<Directive, ItemHandler>;
pub type LEDLookup = HashMap<Punct, InfixOp>;
pub type PrefixLookup = HashMap<Punct, UnaryOp>;
