//! Layout components (header, body, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const KEY_HINTS: &str = "Tab:next  ←/→:adjust  Space:toggle  Enter:submit  ^Y:copy  ^R:reset  ^P:notice";

/// Areas of the main screen
pub struct ScreenAreas {
    pub header: Rect,
    pub form: Rect,
    pub recommendations: Rect,
    pub status: Rect,
}

/// Split the screen into header, form, recommendation panel and status bar
pub fn create_layout(area: Rect) -> ScreenAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    ScreenAreas {
        header: rows[0],
        form: body[0],
        recommendations: body[1],
        status: rows[2],
    }
}

/// Draw the title and description
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            " Healthcare AI Assistant",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Fill out the form below with your information. Our AI will provide \
             personalized healthcare plan recommendations.",
            Style::default().fg(Color::Gray),
        )),
    ]);
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {KEY_HINTS}"),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    // Copy message
    if let Some(msg) = &app.state.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Session on the right
    let session = format!(" {} ", app.state.session.display());
    let width = session.chars().count() as u16;
    let session_area = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y,
        width: width.min(area.width),
        height: 1,
    };
    let session_widget =
        Paragraph::new(session).style(Style::default().bg(Color::DarkGray).fg(Color::Blue));
    frame.render_widget(session_widget, session_area);
}
