//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod loading;
mod recommendations;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = layout::create_layout(frame.area());

    layout::draw_header(frame, areas.header);
    forms::draw_intake_form(frame, areas.form, app);
    recommendations::draw(frame, areas.recommendations, app);
    layout::draw_status_bar(frame, areas.status, app);

    if let Some(loading) = &app.state.loading {
        loading::draw(frame, loading);
    }

    // Error dialog sits above everything
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test]
    async fn test_draws_form_and_panel() {
        let app = App::new(TuiConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Healthcare AI Assistant"));
        assert!(text.contains("AI Recommendations"));
        assert!(text.contains("Get AI Recommendations"));
        assert!(text.contains("HIPAA Privacy Notice"));
    }

    #[tokio::test]
    async fn test_draws_error_dialog() {
        let mut app = App::new(TuiConfig::default());
        app.push_error("Failed to copy: no clipboard");
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();

        assert!(screen_text(&terminal).contains("Failed to copy"));
    }
}
