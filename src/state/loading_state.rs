//! Loading placeholder state shown before the form

use std::time::{Duration, Instant};

/// Phase of the loading placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    /// Skeleton bars are showing
    Loading,
    /// Placeholder finished, form can be shown
    Complete,
}

/// Loading placeholder state
#[derive(Debug)]
pub struct LoadingState {
    /// When the placeholder started
    pub start_time: Instant,
    /// How long the placeholder stays up
    pub duration: Duration,
    /// Current phase
    pub phase: LoadingPhase,
    /// Position of the shimmer wave, 0.0 (left edge) to 1.0 (right edge)
    pub wave_position: f32,
}

impl LoadingState {
    /// One sweep of the shimmer across the skeleton bars
    const WAVE_PERIOD: Duration = Duration::from_millis(1000);

    pub fn starting_at(start_time: Instant, duration: Duration) -> Self {
        Self {
            start_time,
            duration,
            phase: LoadingPhase::Loading,
            wave_position: 0.0,
        }
    }

    /// Update phase and shimmer for the current time
    pub fn update(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.start_time);

        if elapsed >= self.duration {
            self.phase = LoadingPhase::Complete;
            return;
        }

        let period = Self::WAVE_PERIOD.as_secs_f32();
        let progress = (elapsed.as_secs_f32() % period) / period;
        // Ease in and out so the wave slows near the edges
        self.wave_position = simple_easing::sine_in_out(progress);
    }

    /// Skip to completion (user pressed a key)
    pub fn skip(&mut self) {
        self.phase = LoadingPhase::Complete;
    }

    pub fn is_complete(&self) -> bool {
        self.phase == LoadingPhase::Complete
    }
}
