//! Application state definitions

use super::forms::IntakeForm;
use super::loading_state::LoadingState;
use crate::submission::SubmissionState;
use crate::validation::{FieldErrors, FieldName, ValidatedFormInput};
use chrono::{DateTime, Local, Utc};
use std::collections::VecDeque;
use uuid::Uuid;

/// Identity of the current interaction session
#[derive(Debug, Clone)]
pub struct SessionInfo {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
}

impl SessionInfo {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            started_at: Utc::now(),
        }
    }

    /// Short id plus local start time for the status bar
    pub fn display(&self) -> String {
        let id = self.id.simple().to_string();
        let local = self.started_at.with_timezone(&Local);
        format!("session {} since {}", &id[..8], local.format("%H:%M"))
    }
}

/// Everything the UI renders
#[derive(Debug)]
pub struct AppState {
    pub session: SessionInfo,
    pub form: IntakeForm,
    /// Messages from the last rejected submit
    pub field_errors: FieldErrors,
    /// Profile accepted by the last successful submit
    pub submitted: Option<ValidatedFormInput>,
    /// Last submission state observed from the controller
    pub submission: SubmissionState,
    /// Overlay animation while loading
    pub loading: Option<LoadingState>,
    /// Queue of errors waiting to be shown in the modal dialog
    pub error_queue: VecDeque<String>,
    pub status_message: Option<String>,
    /// Copy feedback message
    pub copy_message: Option<String>,
    pub show_privacy_notice: bool,
}

impl AppState {
    pub fn new(session_id: Uuid, show_privacy_notice: bool) -> Self {
        Self {
            session: SessionInfo::new(session_id),
            form: IntakeForm::new(),
            field_errors: FieldErrors::default(),
            submitted: None,
            submission: SubmissionState::Idle,
            loading: None,
            error_queue: VecDeque::new(),
            status_message: None,
            copy_message: None,
            show_privacy_notice,
        }
    }

    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// Error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    /// Validation message for a field, if the last submit flagged it
    pub fn field_error(&self, field: FieldName) -> Option<&str> {
        self.field_errors.get(field)
    }

    pub fn clear_messages(&mut self) {
        self.status_message = None;
        self.copy_message = None;
    }

    pub fn is_loading(&self) -> bool {
        self.submission.is_loading()
    }

    pub fn recommendation(&self) -> Option<&str> {
        self.submission.recommendation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(Uuid::new_v4(), true)
    }

    mod error_queue {
        use super::*;

        #[test]
        fn test_starts_empty() {
            let state = state();
            assert!(!state.has_errors());
            assert!(state.current_error().is_none());
        }

        #[test]
        fn test_errors_shown_in_order() {
            let mut state = state();
            state.push_error("first".to_string());
            state.push_error("second".to_string());

            assert_eq!(state.current_error(), Some("first"));
            state.dismiss_error();
            assert_eq!(state.current_error(), Some("second"));
            state.dismiss_error();
            assert!(!state.has_errors());
        }

        #[test]
        fn test_dismiss_on_empty_is_noop() {
            let mut state = state();
            state.dismiss_error();
            assert!(!state.has_errors());
        }
    }

    #[test]
    fn test_new_state_is_idle_without_result() {
        let state = state();
        assert!(!state.is_loading());
        assert!(state.recommendation().is_none());
        assert!(state.field_errors.is_empty());
        assert!(state.submitted.is_none());
        assert!(state.show_privacy_notice);
    }

    #[test]
    fn test_session_display_uses_short_id() {
        let id = Uuid::new_v4();
        let session = SessionInfo::new(id);
        let display = session.display();
        assert!(display.starts_with(&format!("session {}", &id.simple().to_string()[..8])));
        assert!(display.contains(" since "));
    }

    #[test]
    fn test_clear_messages() {
        let mut state = state();
        state.status_message = Some("status".to_string());
        state.copy_message = Some("copied".to_string());
        state.clear_messages();
        assert!(state.status_message.is_none());
        assert!(state.copy_message.is_none());
    }
}
