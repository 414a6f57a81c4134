//! Submission lifecycle
//!
//! A [`SubmissionController`] owns the `Idle -> Loading -> Done` state of one
//! session. `submit` flips to `Loading` and spawns a one-shot timer; when it
//! fires the recommendation engine runs and the state becomes `Done`. Hosts
//! read the state with [`SubmissionController::state`] or watch it through
//! [`SubmissionController::subscribe`].

mod recommendation;

pub use recommendation::{CannedRecommendation, RecommendationEngine};

#[cfg(test)]
pub use recommendation::MockRecommendationEngine;

use crate::validation::ValidatedFormInput;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use uuid::Uuid;

/// Delay between submit and the recommendation appearing
pub const RESPONSE_DELAY: Duration = Duration::from_millis(1500);

/// Progress of the current submission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading {
        started_at: Instant,
    },
    Done {
        recommendation_text: String,
    },
}

impl SubmissionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn recommendation(&self) -> Option<&str> {
        match self {
            Self::Done {
                recommendation_text,
            } => Some(recommendation_text),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading { .. } => "loading",
            Self::Done { .. } => "done",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("A recommendation is already being prepared")]
    AlreadyLoading,
}

/// Drives one session's submissions.
///
/// Dropping the controller aborts any pending completion.
pub struct SubmissionController {
    session_id: Uuid,
    state_tx: watch::Sender<SubmissionState>,
    engine: Arc<dyn RecommendationEngine>,
    delay: Duration,
    /// Bumped on every submit and cancel; a completion only lands if it
    /// still matches.
    generation: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::with_engine(Arc::new(CannedRecommendation), RESPONSE_DELAY)
    }

    pub fn with_engine(engine: Arc<dyn RecommendationEngine>, delay: Duration) -> Self {
        let (state_tx, _) = watch::channel(SubmissionState::Idle);
        Self {
            session_id: Uuid::new_v4(),
            state_tx,
            engine,
            delay,
            generation: Arc::new(AtomicU64::new(0)),
            pending: None,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Current state snapshot
    pub fn state(&self) -> SubmissionState {
        self.state_tx.borrow().clone()
    }

    /// Receiver notified on every transition
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state_tx.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        self.state_tx.borrow().is_loading()
    }

    /// Start a submission.
    ///
    /// Allowed from `Idle` or `Done`. While `Loading` the call is rejected and
    /// the in-flight submission continues untouched. Must run inside a tokio
    /// runtime.
    pub fn submit(&mut self, input: ValidatedFormInput) -> Result<(), SubmitError> {
        if self.is_loading() {
            tracing::warn!(session = %self.session_id, "submit rejected while loading");
            return Err(SubmitError::AlreadyLoading);
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let started_at = Instant::now();
        self.state_tx
            .send_replace(SubmissionState::Loading { started_at });

        tracing::info!(
            session = %self.session_id,
            delay_ms = self.delay.as_millis() as u64,
            dental = input.dental_plan_required().is_required(),
            "submission started"
        );

        let state_tx = self.state_tx.clone();
        let engine = Arc::clone(&self.engine);
        let current = Arc::clone(&self.generation);
        let delay = self.delay;
        let session_id = self.session_id;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep_until(started_at + delay).await;
            let recommendation_text = engine.recommend(&input).await;

            let landed = state_tx.send_if_modified(|state| {
                if current.load(Ordering::SeqCst) != generation || !state.is_loading() {
                    return false;
                }
                *state = SubmissionState::Done {
                    recommendation_text,
                };
                true
            });

            if landed {
                tracing::info!(session = %session_id, "submission done");
            } else {
                tracing::debug!(session = %session_id, "stale completion discarded");
            }
        }));

        Ok(())
    }

    /// Abort any pending completion and return to `Idle`.
    pub fn cancel(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        let previous = self.state_tx.send_replace(SubmissionState::Idle);
        if previous.is_loading() {
            tracing::info!(session = %self.session_id, "submission cancelled");
        }
    }
}

impl Default for SubmissionController {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SubmissionController {
    fn drop(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
