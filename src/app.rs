//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{AppState, Form, LoadingState};
use crate::submission::{SubmissionController, SubmissionState, RESPONSE_DELAY};
use crate::validation::{FieldErrors, FieldValidator};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::watch;

/// Slider step when Shift is held
const LARGE_STEP: i16 = 10;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    config: TuiConfig,
    validator: FieldValidator,
    controller: SubmissionController,
    submission_rx: watch::Receiver<SubmissionState>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig) -> Self {
        Self::with_controller(config, SubmissionController::new())
    }

    pub fn with_controller(config: TuiConfig, controller: SubmissionController) -> Self {
        let submission_rx = controller.subscribe();
        let mut state = AppState::new(controller.session_id(), config.show_privacy_notice());
        state.submission = controller.state();
        tracing::info!(session = %controller.session_id(), "session started");

        Self {
            state,
            validator: FieldValidator::new(config.state_message()),
            config,
            controller,
            submission_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Whether the submit button is enabled
    pub fn can_submit(&self) -> bool {
        self.state.form.consent_given() && !self.controller.is_loading()
    }

    /// Pull the latest submission state and advance animations.
    ///
    /// Called once per frame.
    pub fn tick(&mut self) {
        if self.submission_rx.has_changed().unwrap_or(false) {
            let next = self.submission_rx.borrow_and_update().clone();
            self.apply_submission_state(next);
        }
        if let Some(loading) = self.state.loading.as_mut() {
            loading.update();
        }
    }

    fn apply_submission_state(&mut self, next: SubmissionState) {
        match &next {
            SubmissionState::Loading { started_at } => {
                self.state.loading = Some(LoadingState::new(*started_at, RESPONSE_DELAY));
            }
            SubmissionState::Done { .. } => {
                self.state.loading = None;
                self.state.status_message = Some("Recommendation ready".to_string());
            }
            SubmissionState::Idle => {
                self.state.loading = None;
            }
        }
        tracing::debug!(state = next.label(), "submission state changed");
        self.state.submission = next;
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        if ctrl {
            match key.code {
                KeyCode::Char('y') => self.copy_recommendation(),
                KeyCode::Char('r') => self.reset(),
                KeyCode::Char('p') => self.toggle_privacy_notice(),
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Enter => {
                if self.state.form.is_submit_row_active() {
                    self.try_submit();
                } else {
                    self.state.form.next_field();
                }
            }
            KeyCode::Left => self.step_active(if shift { -LARGE_STEP } else { -1 }),
            KeyCode::Right => self.step_active(if shift { LARGE_STEP } else { 1 }),
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            KeyCode::Char(c) => self.input_char(c),
            _ => {}
        }
        Ok(())
    }

    fn input_char(&mut self, c: char) {
        match self.state.form.get_active_field_mut() {
            Some(field) if field.accepts_text() => field.push_char(c),
            Some(field) => {
                if c == ' ' {
                    field.toggle();
                }
            }
            None => {
                if c == 'y' {
                    self.copy_recommendation();
                }
            }
        }
    }

    fn step_active(&mut self, delta: i16) {
        if let Some(field) = self.state.form.get_active_field_mut() {
            field.step(delta);
        }
    }

    /// Validate the current form and hand it to the controller
    pub fn try_submit(&mut self) {
        self.state.clear_messages();

        if self.controller.is_loading() {
            self.state.status_message = Some("Processing...".to_string());
            return;
        }
        if !self.state.form.consent_given() {
            self.state.status_message =
                Some("Please consent to the privacy notice to continue".to_string());
            return;
        }

        let raw = self.state.form.snapshot();
        match self.validator.validate(&raw) {
            Ok(input) => {
                self.state.field_errors = FieldErrors::default();
                self.state.submitted = Some(input.clone());
                if let Err(err) = self.controller.submit(input) {
                    self.push_error(err.to_string());
                }
            }
            Err(errors) => {
                tracing::info!(
                    count = errors.len(),
                    fields = ?errors.field_keys(),
                    "form rejected"
                );
                if let Some(first) = errors.first_field() {
                    self.state.form.focus(first);
                }
                self.state.status_message = Some(format!(
                    "Please fix {} field{}",
                    errors.len(),
                    if errors.len() == 1 { "" } else { "s" }
                ));
                self.state.field_errors = errors;
            }
        }
    }

    /// Clear the form and abandon any pending recommendation
    pub fn reset(&mut self) {
        self.controller.cancel();
        self.state.form.reset();
        self.state.field_errors = FieldErrors::default();
        self.state.submitted = None;
        self.state.clear_messages();
        self.state.status_message = Some("Form cleared".to_string());
        tracing::info!(session = %self.controller.session_id(), "form reset");
    }

    fn toggle_privacy_notice(&mut self) {
        self.state.show_privacy_notice = !self.state.show_privacy_notice;
        self.config.show_privacy_notice = Some(self.state.show_privacy_notice);
        if let Err(e) = self.config.save() {
            tracing::warn!("Failed to save config: {e}");
            self.push_error(format!("Failed to save settings: {e}"));
        }
    }

    fn copy_recommendation(&mut self) {
        let Some(text) = self.state.recommendation().map(str::to_string) else {
            self.state.copy_message = Some("Nothing to copy yet".to_string());
            return;
        };
        match self.copy_to_clipboard(&text) {
            Ok(()) => self.state.copy_message = Some("Copied recommendation".to_string()),
            Err(e) => self.push_error(format!("Failed to copy: {e}")),
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
