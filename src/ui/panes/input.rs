//! Input (scratchpad) pane rendering
//!
//! Displays the editable document with line numbers and a block cursor. The
//! cursor is drawn by reversing the style of the cell under it, which keeps
//! wide (CJK) characters aligned without terminal cursor positioning.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the input pane.
///
/// `scroll_offset` is adjusted so the cursor row stays visible.
pub fn render_input_pane(
    frame: &mut Frame,
    area: Rect,
    lines: &[String],
    cursor_row: usize,
    cursor_col: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Scratchpad ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // keep the cursor row inside the viewport
    if cursor_row < *scroll_offset {
        *scroll_offset = cursor_row;
    } else if cursor_row >= *scroll_offset + visible_height {
        *scroll_offset = cursor_row + 1 - visible_height;
    }

    let number_style = Style::default().fg(DEFAULT_THEME.comment);
    let mut rendered: Vec<Line> = Vec::new();

    for (idx, line) in lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
    {
        let mut spans =
            vec![Span::styled(format!("{:>3} ", idx + 1), number_style)];

        if is_focused && idx == cursor_row {
            spans.extend(cursor_line_spans(line, cursor_col));
            rendered.push(
                Line::from(spans)
                    .style(Style::default().bg(DEFAULT_THEME.current_line_bg)),
            );
        } else {
            spans.push(Span::styled(
                line.clone(),
                Style::default().fg(DEFAULT_THEME.fg),
            ));
            rendered.push(Line::from(spans));
        }
    }

    let paragraph = Paragraph::new(rendered).block(block);
    frame.render_widget(paragraph, area);
}

/// Split the cursor line into before / cursor-cell / after spans, with the
/// cursor cell reversed. At end of line the cursor is a reversed space.
fn cursor_line_spans(line: &str, cursor_col: usize) -> Vec<Span<'static>> {
    let text_style = Style::default().fg(DEFAULT_THEME.fg);
    let cursor_style = Style::default()
        .fg(DEFAULT_THEME.fg)
        .add_modifier(Modifier::REVERSED);

    let before: String = line.chars().take(cursor_col).collect();
    let at: Option<char> = line.chars().nth(cursor_col);
    let after: String = line.chars().skip(cursor_col + 1).collect();

    let mut spans = Vec::new();
    if !before.is_empty() {
        spans.push(Span::styled(before, text_style));
    }
    match at {
        Some(c) => {
            spans.push(Span::styled(c.to_string(), cursor_style));
            if !after.is_empty() {
                spans.push(Span::styled(after, text_style));
            }
        }
        None => spans.push(Span::styled(" ".to_string(), cursor_style)),
    }
    spans
}
