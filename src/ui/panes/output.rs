//! Annotated output pane rendering
//!
//! Displays the last pass's annotated text, styled by line classification:
//! comments grey, results plain, errors red, directives orange, bit-layout
//! blocks cyan.

use crate::calculator::output::LineClass;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

fn class_style(class: LineClass) -> Style {
    match class {
        LineClass::Blank => Style::default(),
        LineClass::Comment => Style::default().fg(DEFAULT_THEME.comment),
        LineClass::Result => Style::default().fg(DEFAULT_THEME.fg),
        LineClass::Error => Style::default().fg(DEFAULT_THEME.error),
        LineClass::Directive => Style::default().fg(DEFAULT_THEME.secondary),
        LineClass::BitBlock => Style::default().fg(DEFAULT_THEME.bit_table),
    }
}

/// Render the output pane.
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    lines: &[(String, LineClass)],
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
        .title(" Output ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if lines.is_empty() {
        let paragraph = Paragraph::new("(press Ctrl-R to calculate)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if lines.len() > visible_height {
        let max_scroll = lines.len() - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let items: Vec<ListItem> = lines
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(text, class)| {
            ListItem::new(text.as_str()).style(class_style(*class))
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
