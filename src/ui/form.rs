//! Form layout: fields with inline errors, submit button, summary banner

use super::field_renderer::{draw_field, draw_field_error};
use crate::app::App;
use crate::state::{SummaryMessage, SUBMIT_ROW};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
const BUTTON_HEIGHT: u16 = 3;
/// Summary banner height (border + two wrapped text rows)
const SUMMARY_HEIGHT: u16 = 4;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    // One Length(3) input plus a Length(1) error line per field, then the
    // submit button, the summary banner, and the help line.
    let mut constraints = Vec::with_capacity(SUBMIT_ROW * 2 + 4);
    for _ in 0..SUBMIT_ROW {
        constraints.push(Constraint::Length(3));
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Length(SUMMARY_HEIGHT));
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    for index in 0..SUBMIT_ROW {
        if let Some(field) = app.state.form.get_field(index) {
            let is_active = app.state.form.active_field_index == index;
            draw_field(frame, chunks[index * 2], field, is_active);
            draw_field_error(frame, chunks[index * 2 + 1], field);
        }
    }

    draw_submit_button(frame, chunks[SUBMIT_ROW * 2], app);
    draw_summary(frame, chunks[SUBMIT_ROW * 2 + 1], &app.state.summary);
    draw_help(frame, chunks[SUBMIT_ROW * 2 + 2]);
}

fn draw_submit_button(frame: &mut Frame, area: Rect, app: &App) {
    let is_selected = app.state.form.is_submit_row();
    let is_enabled = !app.state.submitting;

    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {} ", app.submit_label())).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

fn draw_summary(frame: &mut Frame, area: Rect, summary: &SummaryMessage) {
    let (title, color) = match summary {
        SummaryMessage::Hidden => return,
        SummaryMessage::Error(_) => (" Error ", Color::Red),
        SummaryMessage::Success(_) => (" Success ", Color::Green),
    };

    let text = summary.text().unwrap_or_default();
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let paragraph = Paragraph::new(text.to_string())
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(paragraph, area);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("\u{2190}/\u{2192}", Style::default().fg(Color::Cyan)),
        Span::raw(": choose  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(": submit  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": reset  "),
        Span::styled("Ctrl+C", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
