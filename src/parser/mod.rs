//! Line and expression parsing
//!
//! This module turns raw document lines into evaluatable structure:
//!
//! - [`line`] — classifies one line (blank, comment, directive, expression)
//!   and extracts the assignment label and `bitmap` flag
//! - [`lexer`] — tokenises expression text into a flat [`lexer::Token`]
//!   stream, keeping each literal's original lexeme
//! - [`ast`] — expression tree and operator definitions
//! - [`expressions`] — recursive-descent parser with C-family precedence
//!
//! Variable substitution happens on the token stream between lexing and
//! parsing; see [`crate::calculator::substitute`].

pub mod ast;
pub mod expressions;
pub mod lexer;
pub mod line;
