//! Loading overlay animation state

use std::time::Duration;
use tokio::time::Instant;

/// Spinner frames cycled while a recommendation is pending
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Animation phase for the loading overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    /// Waiting on the response timer
    Waiting,
    /// Timer elapsed; holding at full until the result lands
    Finishing,
}

/// Progress animation for the loading overlay
#[derive(Debug)]
pub struct LoadingState {
    /// When the submission entered `Loading`
    pub started_at: Instant,
    /// Expected time until the result
    pub duration: Duration,
    /// Current animation phase
    pub phase: LoadingPhase,
    /// Eased progress from 0.0 to 1.0
    pub progress: f32,
}

impl LoadingState {
    /// Time per spinner frame
    const FRAME_DURATION: Duration = Duration::from_millis(80);

    pub fn new(started_at: Instant, duration: Duration) -> Self {
        Self {
            started_at,
            duration,
            phase: LoadingPhase::Waiting,
            progress: 0.0,
        }
    }

    /// Update animation state based on elapsed time
    pub fn update(&mut self) {
        let elapsed = self.started_at.elapsed();

        if elapsed < self.duration {
            self.phase = LoadingPhase::Waiting;
            let linear = elapsed.as_secs_f32() / self.duration.as_secs_f32();
            // Cubic ease-out: moves fast at first, settles towards the end
            self.progress = simple_easing::cubic_out(linear.clamp(0.0, 1.0));
        } else {
            self.phase = LoadingPhase::Finishing;
            self.progress = 1.0;
        }
    }

    /// Current spinner glyph
    pub fn spinner(&self) -> &'static str {
        let frame = self.started_at.elapsed().as_millis() / Self::FRAME_DURATION.as_millis();
        SPINNER[frame as usize % SPINNER.len()]
    }

    /// Progress as a whole percentage
    pub fn percent(&self) -> u16 {
        (self.progress * 100.0).round() as u16
    }
}
