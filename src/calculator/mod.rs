//! The document processor and its supporting pieces
//!
//! - [`engine`] — per-pass orchestration: [`engine::Calculator`] drives each
//!   line through lexing, substitution, parsing, and evaluation
//! - [`value`] — tagged numeric values with whole/float normalization
//! - [`store`] — insertion-ordered variable bindings, scoped to one pass
//! - [`substitute`] — token-stream variable substitution
//! - [`eval`] — AST evaluation with checked integer arithmetic
//! - [`errors`] — the per-line error taxonomy
//! - [`messages`] — two-locale message catalog
//! - [`output`] — annotated-text rendering with `=` alignment

pub mod engine;
pub mod errors;
pub mod eval;
pub mod messages;
pub mod output;
pub mod store;
pub mod substitute;
pub mod value;

pub use engine::{Calculator, LineResult, EXAMPLE_TEXT};
pub use messages::Language;
