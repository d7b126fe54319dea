//! Pane rendering modules for the TUI

pub mod input;
pub mod output;
pub mod status;
pub mod variables;

pub use input::render_input_pane;
pub use output::render_output_pane;
pub use status::render_status_bar;
pub use variables::render_variables_pane;
