//! Per-line evaluation errors
//!
//! This module defines [`EvalError`], covering everything that can go wrong
//! while lexing, substituting, parsing, or evaluating one expression line.
//!
//! Errors are never fatal to a document pass: the engine catches them at the
//! line boundary and turns them into a `Failure` result for that line only.
//! `Display` renders the English text; localized rendering lives in
//! [`messages`](crate::calculator::messages).

use std::fmt;

/// Everything that can fail while evaluating a single expression line.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// The expression text was empty after stripping comments and keywords.
    EmptyExpression,

    /// A character outside the allowed expression grammar.
    IllegalCharacter,

    /// Division with a zero divisor.
    DivisionByZero,

    /// Tokens were legal but did not form a valid expression.
    SyntaxError,

    /// Any other evaluation fault (overflow, bad shift amount, ...).
    Computation(String),

    /// Identifiers referenced before assignment, in order of appearance.
    UndefinedVariables(Vec<String>),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::EmptyExpression => write!(f, "empty expression"),
            EvalError::IllegalCharacter => write!(f, "illegal characters"),
            EvalError::DivisionByZero => write!(f, "division by zero"),
            EvalError::SyntaxError => write!(f, "syntax error"),
            EvalError::Computation(detail) => {
                write!(f, "computation error: {}", detail)
            }
            EvalError::UndefinedVariables(names) => {
                write!(f, "undefined variable(s): {}", names.join(", "))
            }
        }
    }
}

impl std::error::Error for EvalError {}
