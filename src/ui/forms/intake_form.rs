//! Intake form rendering

use super::field_renderer::{draw_field, risk_label};
use crate::app::App;
use crate::state::{FieldValue, FormField};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::validation::FieldName;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const PRIVACY_NOTICE: &str = "The information you provide is protected under the Health \
Insurance Portability and Accountability Act (HIPAA). We will use this information solely for \
the purpose of providing healthcare plan recommendations. Your information is encrypted and \
securely processed. We do not share your personal health information with third parties \
without your consent, except as required by law.";

/// Draw the intake form with its submit button
pub fn draw_intake_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Your Information ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // Age / Dependents / Zip
            Constraint::Length(3),             // State / Income / Dental
            Constraint::Length(3),             // Risk tolerance
            Constraint::Min(0),                // Privacy notice
            Constraint::Length(3),             // Consent
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .split(inner);

    draw_named(frame, chunks[0], app, FieldName::Name);
    draw_row(
        frame,
        chunks[1],
        app,
        &[FieldName::Age, FieldName::Dependents, FieldName::ZipCode],
    );
    draw_row(
        frame,
        chunks[2],
        app,
        &[
            FieldName::State,
            FieldName::Income,
            FieldName::DentalPlanRequired,
        ],
    );
    draw_risk_tolerance(frame, chunks[3], app);
    if app.state.show_privacy_notice {
        draw_privacy_notice(frame, chunks[4]);
    }
    draw_named(frame, chunks[5], app, FieldName::ConsentGiven);
    draw_submit(frame, chunks[6], app);
}

fn draw_named(frame: &mut Frame, area: Rect, app: &App, name: FieldName) {
    draw_form_field(frame, area, app, app.state.form.field(name));
}

fn draw_form_field(frame: &mut Frame, area: Rect, app: &App, field: &FormField) {
    draw_field(
        frame,
        area,
        field,
        app.state.form.active_field_name() == Some(field.name),
        app.state.field_error(field.name),
    );
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, names: &[FieldName]) {
    let constraints = vec![Constraint::Ratio(1, names.len() as u32); names.len()];
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (name, cell) in names.iter().zip(cells.iter()) {
        draw_named(frame, *cell, app, *name);
    }
}

fn draw_risk_tolerance(frame: &mut Frame, area: Rect, app: &App) {
    let mut field = app.state.form.risk_tolerance.clone();
    if let FieldValue::Slider(value) = field.value {
        field.label = format!("{} ({})", field.label, risk_label(value));
    }
    draw_form_field(frame, area, app, &field);
}

fn draw_privacy_notice(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let content = vec![
        Line::from(Span::styled(
            "HIPAA Privacy Notice",
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            PRIVACY_NOTICE,
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(content).wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_submit(frame: &mut Frame, area: Rect, app: &App) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(28),
            Constraint::Min(0),
        ])
        .split(area);

    let label = if app.state.is_loading() {
        "Processing..."
    } else {
        "Get AI Recommendations"
    };
    render_button(
        frame,
        cells[1],
        label,
        app.state.form.is_submit_row_active(),
        app.can_submit(),
    );
}
