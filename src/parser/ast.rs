//! Expression AST definitions

use crate::calculator::value::Num;

/// Binary operators, from loosest to tightest binding:
/// `|` < `^` < `&` < `<< >>` < `+ -` < `* /` (C-family precedence).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Shl,
    Shr,
    BitAnd,
    BitXor,
    BitOr,
}

/// Unary operators (tightest binding).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Neg,
    BitNot,
}

/// A parsed expression tree.
///
/// Identifiers never appear here: variable substitution replaces them with
/// number tokens before parsing, or fails the line if any are unbound.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(Num),
    UnaryOp {
        op: UnOp,
        operand: Box<Expr>,
    },
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}
