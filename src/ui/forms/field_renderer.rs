//! Field rendering utilities for forms

use crate::state::{FieldValue, FormField};
use crate::validation::{MAX_RISK_TOLERANCE, MIN_RISK_TOLERANCE};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CURSOR: &str = "▌";

/// Draw a form field, flagging it red when validation rejected it
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let border_style = match (error.is_some(), is_active) {
        (true, _) => Style::default().fg(Color::Red),
        (false, true) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }

    // Slider gets the inner width so the track fills the box.
    let inner_width = area.width.saturating_sub(2) as usize;
    let line = field_line(field, is_active, inner_width);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn field_line(field: &FormField, is_active: bool, width: usize) -> Line<'static> {
    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let placeholder_style = Style::default().fg(Color::DarkGray);

    match &field.value {
        FieldValue::Text(_) | FieldValue::Digits { .. } | FieldValue::Currency(_) => {
            let value = field.display_value();
            let mut spans = if value.is_empty() && !is_active {
                vec![Span::styled(field.placeholder, placeholder_style)]
            } else {
                vec![Span::styled(value, value_style)]
            };
            if is_active {
                spans.push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
            }
            Line::from(spans)
        }
        FieldValue::Choice { .. } => {
            let value = field.display_value();
            let shown = if value.is_empty() {
                Span::styled(field.placeholder, placeholder_style)
            } else {
                Span::styled(value, value_style)
            };
            if is_active {
                Line::from(vec![Span::raw("◀ "), shown, Span::raw(" ▶")])
            } else {
                Line::from(shown)
            }
        }
        FieldValue::Slider(value) => slider_line(*value, is_active, width),
        FieldValue::Checkbox(_) => Line::from(vec![
            Span::styled(field.display_value(), value_style.add_modifier(Modifier::BOLD)),
            Span::raw(" I consent to the collection and processing of my health information"),
        ]),
    }
}

/// "Low ━━━━●──── High  50"
fn slider_line(value: u8, is_active: bool, width: usize) -> Line<'static> {
    let label = format!(" {value:>3}");
    let track_width = width.saturating_sub("Low  High".len() + label.len()).max(3);
    let span = (MAX_RISK_TOLERANCE - MIN_RISK_TOLERANCE) as usize;
    let knob = (value as usize * (track_width - 1)) / span;

    let filled: String = "━".repeat(knob);
    let empty: String = "─".repeat(track_width - knob - 1);
    let accent = if is_active { Color::Cyan } else { Color::Blue };

    Line::from(vec![
        Span::styled("Low ", Style::default().fg(Color::Green)),
        Span::styled(filled, Style::default().fg(accent)),
        Span::styled("●", Style::default().fg(accent).add_modifier(Modifier::BOLD)),
        Span::styled(empty, Style::default().fg(Color::DarkGray)),
        Span::styled(" High", Style::default().fg(Color::Red)),
        Span::raw(label),
    ])
}

/// Text label for a risk tolerance value
pub fn risk_label(value: u8) -> &'static str {
    match value {
        0..=33 => "Low Risk",
        34..=66 => "Moderate Risk",
        _ => "High Risk",
    }
}
