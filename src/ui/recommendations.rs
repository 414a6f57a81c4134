//! Recommendation panel

use crate::app::App;
use crate::state::AppState;
use crate::submission::SubmissionState;
use crate::validation::ValidatedFormInput;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the recommendation panel for the current submission state
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" AI Recommendations ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(panel_lines(&app.state))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn panel_lines(state: &AppState) -> Vec<Line<'_>> {
    let muted = Style::default().fg(Color::DarkGray);
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut lines = match &state.submission {
        SubmissionState::Idle if !state.field_errors.is_empty() => {
            let mut lines = vec![Line::from(Span::styled(
                "Please fix the following:",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))];
            lines.extend(state.field_errors.iter().map(|error| {
                Line::from(vec![
                    Span::styled(
                        format!("• {}: ", error.field.label()),
                        Style::default().fg(Color::Red),
                    ),
                    Span::raw(error.message),
                ])
            }));
            lines
        }
        SubmissionState::Idle => vec![
            Line::from(Span::styled(
                "Complete the form and submit to receive personalized",
                muted,
            )),
            Line::from(Span::styled("healthcare plan recommendations.", muted)),
        ],
        SubmissionState::Loading { .. } => vec![Line::from(Span::styled(
            "Analyzing your information...",
            Style::default().fg(Color::Yellow),
        ))],
        SubmissionState::Done {
            recommendation_text,
        } => vec![
            Line::from(Span::raw(recommendation_text.as_str())),
            Line::raw(""),
            Line::from(vec![
                Span::styled("y", key_style),
                Span::styled(" on the submit button or ", muted),
                Span::styled("^Y", key_style),
                Span::styled(" to copy", muted),
            ]),
        ],
    };

    if !matches!(state.submission, SubmissionState::Idle) {
        if let Some(profile) = &state.submitted {
            lines.push(Line::raw(""));
            lines.extend(profile_lines(profile));
        }
    }
    lines
}

/// Summary of the profile the recommendation was built from
fn profile_lines(profile: &ValidatedFormInput) -> Vec<Line<'_>> {
    let label = Style::default().fg(Color::Blue);
    let row = |name: &'static str, value: String| {
        Line::from(vec![Span::styled(format!("{name:<11}"), label), Span::raw(value)])
    };
    vec![
        Line::from(Span::styled(
            "Submitted profile",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        row("Name", profile.name().to_string()),
        row(
            "Household",
            format!("age {}, {} dependent(s)", profile.age(), profile.dependents()),
        ),
        row(
            "Location",
            format!("{} {}", profile.state(), profile.zip_code()),
        ),
        row("Income", profile.income().as_str().to_string()),
        row(
            "Dental",
            profile.dental_plan_required().as_str().to_string(),
        ),
        row("Risk", profile.risk_tolerance().to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::test_support::{valid_raw_input, validated_input};
    use crate::validation::{validate, FieldName, RawFormInput};
    use uuid::Uuid;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.as_ref()))
            .collect()
    }

    fn state() -> AppState {
        AppState::new(Uuid::new_v4(), true)
    }

    #[test]
    fn test_idle_shows_placeholder() {
        let state = state();
        assert!(text(&panel_lines(&state)).contains("Complete the form"));
    }

    #[test]
    fn test_rejected_submit_lists_every_violation() {
        let mut state = state();
        let raw = RawFormInput {
            name: Some("J".to_string()),
            zip_code: Some("1".to_string()),
            ..valid_raw_input()
        };
        state.field_errors = validate(&raw).unwrap_err();

        let lines = panel_lines(&state);
        assert_eq!(lines.len(), 3);
        let shown = text(&lines);
        assert!(shown.contains(&format!(
            "{}: Name must be at least 2 characters.",
            FieldName::Name.label()
        )));
        assert!(shown.contains("Zip code must be 5 digits."));
    }

    #[test]
    fn test_done_shows_text_copy_hint_and_profile() {
        let mut state = state();
        state.submission = SubmissionState::Done {
            recommendation_text: "Consider a Silver plan.".to_string(),
        };
        state.submitted = Some(validated_input("yes"));

        let lines = panel_lines(&state);
        assert_eq!(lines[0].spans[0].content, "Consider a Silver plan.");
        let shown = text(&lines);
        assert!(shown.contains("to copy"));
        assert!(shown.contains("Jane Doe"));
        assert!(shown.contains("age 35, 2 dependent(s)"));
        assert!(shown.contains("AK 99501"));
        assert!(shown.contains("$28,000"));
        assert!(shown.contains("yes"));
    }
}
