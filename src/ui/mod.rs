//! UI module for rendering the TUI

mod field_renderer;
mod form;

use crate::app::App;
use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let block = Block::default()
        .title(" Stellar Insights ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    form::draw(frame, inner, app);
}
