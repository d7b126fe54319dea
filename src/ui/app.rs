//! Main TUI application state and logic

use crate::calculator::output::{format_lines, LineClass};
use crate::calculator::{Calculator, Language, EXAMPLE_TEXT};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Input,
    Output,
    Variables,
}

impl FocusedPane {
    /// Move focus to the next pane (input -> output -> variables)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Input => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Variables,
            FocusedPane::Variables => FocusedPane::Input,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Input => FocusedPane::Variables,
            FocusedPane::Output => FocusedPane::Input,
            FocusedPane::Variables => FocusedPane::Output,
        }
    }
}

/// The main application state
pub struct App {
    /// The document processor
    pub calculator: Calculator,

    /// The scratchpad document, one entry per line
    pub input: Vec<String>,

    /// Cursor position in the scratchpad (row, column in chars)
    pub cursor_row: usize,
    pub cursor_col: usize,

    /// Annotated output of the last pass, classified per line
    pub output_lines: Vec<(String, LineClass)>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub input_scroll: usize,
    pub output_scroll: usize,
    pub variables_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the scratchpad was edited since the last save or pass
    pub dirty: bool,

    /// File the scratchpad was loaded from, if any
    pub file_path: Option<PathBuf>,
}

impl App {
    /// Create a new app. `text` seeds the scratchpad; `file_path` is where
    /// Ctrl-S writes it back.
    pub fn new(language: Language, text: &str, file_path: Option<PathBuf>) -> Self {
        let input: Vec<String> = if text.is_empty() {
            vec![String::new()]
        } else {
            text.lines().map(str::to_string).collect()
        };

        App {
            calculator: Calculator::new(language),
            input,
            cursor_row: 0,
            cursor_col: 0,
            output_lines: Vec::new(),
            focused_pane: FocusedPane::Input,
            input_scroll: 0,
            output_scroll: 0,
            variables_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready"),
            dirty: false,
            file_path,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes above, one-row status bar below
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Left column: scratchpad. Right column: output over variables.
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(pane_area);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[1]);

        super::panes::render_input_pane(
            frame,
            columns[0],
            &self.input,
            self.cursor_row,
            self.cursor_col,
            self.focused_pane == FocusedPane::Input,
            &mut self.input_scroll,
        );

        super::panes::render_output_pane(
            frame,
            right_rows[0],
            &self.output_lines,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        super::panes::render_variables_pane(
            frame,
            right_rows[1],
            self.calculator.variables(),
            self.focused_pane == FocusedPane::Variables,
            &mut self.variables_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.calculator.language(),
            self.dirty,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::F(5) => {
                self.calculate();
                return;
            }
            KeyCode::Char('r') | KeyCode::Char('R') if ctrl => {
                self.calculate();
                return;
            }
            KeyCode::Char('l') | KeyCode::Char('L') if ctrl => {
                self.load_example();
                return;
            }
            KeyCode::Char('n') | KeyCode::Char('N') if ctrl => {
                self.clear();
                return;
            }
            KeyCode::Char('s') | KeyCode::Char('S') if ctrl => {
                self.save();
                return;
            }
            KeyCode::Char('g') | KeyCode::Char('G') if ctrl => {
                self.toggle_language();
                return;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
                return;
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
                return;
            }
            _ => {}
        }

        match self.focused_pane {
            FocusedPane::Input => self.handle_editor_key(key),
            FocusedPane::Output => match key.code {
                KeyCode::Up => {
                    self.output_scroll = self.output_scroll.saturating_sub(1);
                }
                KeyCode::Down => {
                    self.output_scroll = self.output_scroll.saturating_add(1);
                }
                _ => {}
            },
            FocusedPane::Variables => match key.code {
                KeyCode::Up => {
                    self.variables_scroll = self.variables_scroll.saturating_sub(1);
                }
                KeyCode::Down => {
                    self.variables_scroll = self.variables_scroll.saturating_add(1);
                }
                _ => {}
            },
        }
    }

    /// Handle an editing key in the scratchpad pane
    fn handle_editor_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => {
                let line = &mut self.input[self.cursor_row];
                let at = byte_index(line, self.cursor_col);
                line.insert(at, c);
                self.cursor_col += 1;
                self.dirty = true;
            }
            KeyCode::Enter => {
                let line = &mut self.input[self.cursor_row];
                let at = byte_index(line, self.cursor_col);
                let rest = line.split_off(at);
                self.input.insert(self.cursor_row + 1, rest);
                self.cursor_row += 1;
                self.cursor_col = 0;
                self.dirty = true;
            }
            KeyCode::Backspace => {
                if self.cursor_col > 0 {
                    self.cursor_col -= 1;
                    let line = &mut self.input[self.cursor_row];
                    let at = byte_index(line, self.cursor_col);
                    line.remove(at);
                    self.dirty = true;
                } else if self.cursor_row > 0 {
                    let removed = self.input.remove(self.cursor_row);
                    self.cursor_row -= 1;
                    let line = &mut self.input[self.cursor_row];
                    self.cursor_col = line.chars().count();
                    line.push_str(&removed);
                    self.dirty = true;
                }
            }
            KeyCode::Delete => {
                let line_len = self.input[self.cursor_row].chars().count();
                if self.cursor_col < line_len {
                    let line = &mut self.input[self.cursor_row];
                    let at = byte_index(line, self.cursor_col);
                    line.remove(at);
                    self.dirty = true;
                } else if self.cursor_row + 1 < self.input.len() {
                    let next = self.input.remove(self.cursor_row + 1);
                    self.input[self.cursor_row].push_str(&next);
                    self.dirty = true;
                }
            }
            KeyCode::Left => {
                if self.cursor_col > 0 {
                    self.cursor_col -= 1;
                } else if self.cursor_row > 0 {
                    self.cursor_row -= 1;
                    self.cursor_col = self.input[self.cursor_row].chars().count();
                }
            }
            KeyCode::Right => {
                let line_len = self.input[self.cursor_row].chars().count();
                if self.cursor_col < line_len {
                    self.cursor_col += 1;
                } else if self.cursor_row + 1 < self.input.len() {
                    self.cursor_row += 1;
                    self.cursor_col = 0;
                }
            }
            KeyCode::Up => {
                if self.cursor_row > 0 {
                    self.cursor_row -= 1;
                    self.clamp_cursor_col();
                }
            }
            KeyCode::Down => {
                if self.cursor_row + 1 < self.input.len() {
                    self.cursor_row += 1;
                    self.clamp_cursor_col();
                }
            }
            KeyCode::Home => {
                self.cursor_col = 0;
            }
            KeyCode::End => {
                self.cursor_col = self.input[self.cursor_row].chars().count();
            }
            _ => {}
        }
    }

    fn clamp_cursor_col(&mut self) {
        let line_len = self.input[self.cursor_row].chars().count();
        if self.cursor_col > line_len {
            self.cursor_col = line_len;
        }
    }

    /// Run a fresh pass over the scratchpad and refresh the output pane
    fn calculate(&mut self) {
        let text = self.input.join("\n");
        self.calculator.process_text(&text);
        self.output_lines =
            format_lines(self.calculator.lines(), self.calculator.results());
        self.output_scroll = 0;
        self.status_message = format!(
            "Calculated {} line(s)",
            self.calculator.results().len()
        );
    }

    /// Replace the scratchpad with the built-in example document
    fn load_example(&mut self) {
        self.input = EXAMPLE_TEXT.lines().map(str::to_string).collect();
        self.cursor_row = 0;
        self.cursor_col = 0;
        self.input_scroll = 0;
        self.dirty = true;
        self.status_message = String::from("Example loaded");
        self.calculate();
    }

    /// Clear the scratchpad and the last pass's output
    fn clear(&mut self) {
        self.input = vec![String::new()];
        self.cursor_row = 0;
        self.cursor_col = 0;
        self.input_scroll = 0;
        self.output_lines.clear();
        self.output_scroll = 0;
        self.calculator.process_text("");
        self.dirty = true;
        self.status_message = String::from("Cleared");
    }

    /// Save the scratchpad, and the annotated output next to it
    fn save(&mut self) {
        let path = self
            .file_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("calcpaper.txt"));

        let text = self.input.join("\n");
        if let Err(e) = std::fs::write(&path, &text) {
            self.status_message = format!("Save failed: {}", e);
            return;
        }

        if !self.output_lines.is_empty() {
            let mut out_path = path.clone().into_os_string();
            out_path.push(".out");
            let annotated = self.calculator.format_output();
            if let Err(e) = std::fs::write(&out_path, annotated) {
                self.status_message = format!("Save failed: {}", e);
                return;
            }
        }

        self.file_path = Some(path.clone());
        self.dirty = false;
        self.status_message = format!("Saved to {}", path.display());
    }

    /// Switch between Chinese and English messages and recalculate
    fn toggle_language(&mut self) {
        let next = match self.calculator.language() {
            Language::Zh => Language::En,
            Language::En => Language::Zh,
        };
        self.calculator.set_language(next);
        if !self.output_lines.is_empty() {
            self.calculate();
        }
        self.status_message = match next {
            Language::Zh => String::from("语言: 中文"),
            Language::En => String::from("Language: English"),
        };
    }
}

/// Convert a char column to a byte index within `line`.
fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}
