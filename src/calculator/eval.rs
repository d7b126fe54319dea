//! Expression evaluation
//!
//! Walks the [`Expr`] tree and produces a [`Num`]. Integer arithmetic uses
//! checked operations; anything that falls outside the host's native range
//! (overflow, bad shift amounts) is a [`EvalError::Computation`] fault
//! rather than a panic.
//!
//! Coercion rules:
//! - `+ - *` stay integral when both operands are whole.
//! - `/` is evaluated in floating point and the result re-normalized, so
//!   `8/4` is `Int(2)` and `1/4` is `Float(0.25)`.
//! - Bitwise operators require whole operands (a fractional operand can
//!   never satisfy them; whole floats were already normalized to `Int`).

use crate::calculator::errors::EvalError;
use crate::calculator::value::Num;
use crate::parser::ast::{BinOp, Expr, UnOp};

/// Evaluate a parsed expression.
pub fn evaluate(expr: &Expr) -> Result<Num, EvalError> {
    match expr {
        Expr::Number(value) => Ok(*value),
        Expr::UnaryOp { op, operand } => {
            let value = evaluate(operand)?;
            apply_unary(*op, value)
        }
        Expr::BinaryOp { op, left, right } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            apply_binary(*op, left, right)
        }
    }
}

fn apply_unary(op: UnOp, value: Num) -> Result<Num, EvalError> {
    match op {
        UnOp::Neg => match value {
            Num::Int(n) => n.checked_neg().map(Num::Int).ok_or_else(|| {
                EvalError::Computation(format!("integer overflow in -{}", n))
            }),
            Num::Float(f) => Ok(Num::Float(-f)),
        },
        UnOp::BitNot => {
            let n = expect_whole(value, "~")?;
            Ok(Num::Int(!n))
        }
    }
}

fn apply_binary(op: BinOp, left: Num, right: Num) -> Result<Num, EvalError> {
    match op {
        BinOp::Add => checked_arith(
            left,
            right,
            i64::checked_add,
            |a, b| a + b,
            "+",
        ),
        BinOp::Sub => checked_arith(
            left,
            right,
            i64::checked_sub,
            |a, b| a - b,
            "-",
        ),
        BinOp::Mul => checked_arith(
            left,
            right,
            i64::checked_mul,
            |a, b| a * b,
            "*",
        ),
        BinOp::Div => {
            if right.is_zero() {
                return Err(EvalError::DivisionByZero);
            }
            Ok(Num::from_f64(left.as_f64() / right.as_f64()))
        }
        BinOp::Shl | BinOp::Shr => {
            let a = expect_whole(left, op_symbol(op))?;
            let b = expect_whole(right, op_symbol(op))?;
            if !(0..64).contains(&b) {
                return Err(EvalError::Computation(format!(
                    "shift amount out of range: {}",
                    b
                )));
            }
            let result = match op {
                BinOp::Shl => {
                    // shifting back must restore the operand, otherwise
                    // high bits (or the sign) were lost
                    let shifted = a << b;
                    if (shifted >> b) != a {
                        return Err(EvalError::Computation(format!(
                            "integer overflow in {} << {}",
                            a, b
                        )));
                    }
                    shifted
                }
                _ => a >> b,
            };
            Ok(Num::Int(result))
        }
        BinOp::BitAnd | BinOp::BitXor | BinOp::BitOr => {
            let a = expect_whole(left, op_symbol(op))?;
            let b = expect_whole(right, op_symbol(op))?;
            let result = match op {
                BinOp::BitAnd => a & b,
                BinOp::BitXor => a ^ b,
                _ => a | b,
            };
            Ok(Num::Int(result))
        }
    }
}

/// Integer path with overflow checking, float path otherwise.
fn checked_arith(
    left: Num,
    right: Num,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
    symbol: &str,
) -> Result<Num, EvalError> {
    match (left, right) {
        (Num::Int(a), Num::Int(b)) => {
            int_op(a, b).map(Num::Int).ok_or_else(|| {
                EvalError::Computation(format!(
                    "integer overflow in {} {} {}",
                    a, symbol, b
                ))
            })
        }
        _ => Ok(Num::from_f64(float_op(left.as_f64(), right.as_f64()))),
    }
}

fn expect_whole(value: Num, symbol: &str) -> Result<i64, EvalError> {
    value.as_int().ok_or_else(|| {
        EvalError::Computation(format!(
            "bitwise operand of {} is not a whole number",
            symbol
        ))
    })
}

fn op_symbol(op: BinOp) -> &'static str {
    match op {
        BinOp::Add => "+",
        BinOp::Sub => "-",
        BinOp::Mul => "*",
        BinOp::Div => "/",
        BinOp::Shl => "<<",
        BinOp::Shr => ">>",
        BinOp::BitAnd => "&",
        BinOp::BitXor => "^",
        BinOp::BitOr => "|",
    }
}
