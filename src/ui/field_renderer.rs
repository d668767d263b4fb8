//! Field rendering utilities for the form

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a bordered form field with its current value and focus cursor
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value = field.display_value();
    let display_value = if value.is_empty() {
        if field.is_choice() {
            if is_active {
                "(use \u{2190}/\u{2192} to choose)"
            } else {
                "(not selected)"
            }
        } else if is_active {
            ""
        } else {
            "(empty)"
        }
    } else {
        value
    };

    let cursor = if is_active && !field.is_choice() {
        "\u{258c}"
    } else {
        ""
    };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let marker = if field.required { " *" } else { "" };
    let block = Block::default()
        .title(format!(" {}{} ", field.label, marker))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the inline error line under a field, if it has one
pub fn draw_field_error(frame: &mut Frame, area: Rect, field: &FormField) {
    if let Some(error) = &field.error {
        let paragraph =
            Paragraph::new(format!(" {error}")).style(Style::default().fg(Color::Red));
        frame.render_widget(paragraph, area);
    }
}
