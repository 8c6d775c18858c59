//! Coupon create/edit form

mod field_renderer;

use crate::app::App;
use crate::state::CouponField;
use field_renderer::draw_field;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the coupon form, titled with the current form mode
pub fn draw_coupon_form(frame: &mut Frame, area: Rect, app: &App) {
    let coupon = app.form_state.form().get();

    let block = Block::default()
        .title(format!(" {} ", app.form_state.form_title().get()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(1)]; // Id
    constraints.extend(CouponField::ALL.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Length(1)); // Formatted due date
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let id_line = if coupon.is_persisted() {
        Line::from(vec![
            Span::styled("ID: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                coupon.id.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(Span::styled(
            "ID: (new coupon)",
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(Paragraph::new(id_line), chunks[0]);

    for (idx, field) in CouponField::ALL.iter().enumerate() {
        draw_field(
            frame,
            chunks[idx + 1],
            *field,
            app.field_display(*field),
            idx == app.active_field,
        );
    }

    let due_line = Line::from(vec![
        Span::styled("Expires: ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.due_date_display()),
    ]);
    frame.render_widget(Paragraph::new(due_line), chunks[CouponField::ALL.len() + 1]);
}
