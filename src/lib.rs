//! # Introduction
//!
//! CalcPaper evaluates a "scratchpad" document line by line: every line is
//! blank, a comment, an `endian:` directive, or an arithmetic/bitwise
//! expression optionally labeled with a variable name.  The engine echoes the
//! document back annotated with computed values, substituted variable values,
//! and optional bit-layout tables.  An interactive front-end is built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Evaluation pipeline
//!
//! ```text
//! Document → Line classification → Lexer → Substitution → Parser → Eval → Output
//! ```
//!
//! 1. [`parser`] — classifies lines, tokenises expressions, and builds an
//!    expression AST with C-family operator precedence.
//! 2. [`calculator`] — the document processor: variable store, numeric
//!    [`calculator::value::Num`] coercion rules, per-line error handling,
//!    two-locale messages, and the annotated output formatter.
//! 3. [`display`] — the bit-index table renderer for `bitmap` lines.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported input
//!
//! Literals: decimal, `0x`/`0X` hex, `0b`/`0B` binary, `N%` percentages.
//! Operators: `+ - * / ( )` plus bitwise `<< >> & | ^ ~`.
//! Directives: `endian: little|big|none` (with synonyms).
//! `bitmap` before a line requests a bit-structure table for its result.
//! `#` starts a comment; variables accumulate top-to-bottom within one pass.

pub mod calculator;
pub mod display;
pub mod parser;
pub mod ui;
