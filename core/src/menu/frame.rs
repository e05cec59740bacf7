//! Repaint pacing
//!
//! Input is polled as often as the loop spins; repaints are capped at the
//! configured frame rate.

use std::time::{Duration, Instant};

/// Reference repaint cadence.
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Gates repaints to a fixed maximum rate and estimates achieved FPS.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    last_frame: Option<Instant>,
    window_start: Option<Instant>,
    frames_in_window: u32,
    fps: f32,
}

impl FramePacer {
    /// Creates a pacer for `frame_rate` frames per second (at least 1).
    pub fn new(frame_rate: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / frame_rate.max(1),
            last_frame: None,
            window_start: None,
            frames_in_window: 0,
            fps: 0.0,
        }
    }

    /// Minimum time between two repaints.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a repaint is due at `now`. Accepting a frame starts the next
    /// interval.
    pub fn ready(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_frame
            && now.saturating_duration_since(last) < self.interval
        {
            return false;
        }

        self.last_frame = Some(now);
        self.count_frame(now);
        true
    }

    /// Time until the next repaint is due.
    pub fn until_next(&self, now: Instant) -> Duration {
        match self.last_frame {
            Some(last) => self
                .interval
                .saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }

    /// Frames accepted per second over the last completed one-second window.
    pub fn fps(&self) -> f32 {
        self.fps
    }

    fn count_frame(&mut self, now: Instant) {
        let start = *self.window_start.get_or_insert(now);
        self.frames_in_window += 1;

        let elapsed = now.saturating_duration_since(start);
        if elapsed >= Duration::from_secs(1) {
            self.fps = self.frames_in_window as f32 / elapsed.as_secs_f32();
            self.frames_in_window = 0;
            self.window_start = Some(now);
        }
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_RATE)
    }
}
