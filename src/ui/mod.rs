//! Terminal user interface
//!
//! Three panes: the editable scratchpad on the left, the annotated output and
//! the variable bindings on the right, with a one-row status bar underneath.

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
