//! Field rendering utilities for forms

use crate::state::CouponField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw one coupon field with its current text
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: CouponField,
    display_value: String,
    is_active: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), area);
}
