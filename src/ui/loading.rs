//! Loading overlay shown while a recommendation is pending

use crate::state::{LoadingPhase, LoadingState};
use crate::ui::components::centered_rect;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

const OVERLAY_WIDTH: u16 = 44;
const OVERLAY_HEIGHT: u16 = 6;

/// Draw the spinner and progress gauge over the current frame
pub fn draw(frame: &mut Frame, loading: &LoadingState) {
    let area = centered_rect(frame.area(), OVERLAY_WIDTH, OVERLAY_HEIGHT);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Processing... ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(inner);

    let message = Line::from(vec![
        Span::styled(
            loading.spinner(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(match loading.phase {
            LoadingPhase::Waiting => " Generating recommendations",
            LoadingPhase::Finishing => " Almost done",
        }),
    ]);
    frame.render_widget(Paragraph::new(message), chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .percent(loading.percent().min(100));
    frame.render_widget(gauge, chunks[1]);
}
