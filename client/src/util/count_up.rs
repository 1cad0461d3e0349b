//! Count-up animation for the stats cards.
//!
//! Purely presentational: frames are computed from a finished snapshot and
//! never gate the fetch that produced it.

#[cfg(test)]
#[path = "count_up_test.rs"]
mod count_up_test;

use crate::net::types::StatsSnapshot;

pub const COUNT_UP_DURATION_MS: u32 = 1_500;
pub const COUNT_UP_STEPS: u32 = 60;

/// Cubic ease-out: fast start, gentle landing. Input is clamped to `0..=1`.
#[must_use]
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Values currently shown on the cards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DisplayedStats {
    pub total: u64,
    pub open: u64,
    pub avg: f64,
}

impl DisplayedStats {
    #[must_use]
    pub fn avg_label(&self) -> String {
        format!("{:.1}", self.avg)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    total: u64,
    open: u64,
    avg: f64,
    steps: u32,
    duration_ms: u32,
}

impl CountUp {
    #[must_use]
    pub fn new(target: &StatsSnapshot) -> Self {
        Self::with_timing(target, COUNT_UP_STEPS, COUNT_UP_DURATION_MS)
    }

    #[must_use]
    pub fn with_timing(target: &StatsSnapshot, steps: u32, duration_ms: u32) -> Self {
        Self {
            total: target.total_tickets,
            open: target.open_tickets,
            avg: target.avg_tickets_per_day,
            steps,
            duration_ms,
        }
    }

    /// Delay between frames in milliseconds.
    #[must_use]
    pub fn step_interval_ms(&self) -> u32 {
        if self.steps == 0 { 0 } else { self.duration_ms / self.steps }
    }

    /// Frame for `step` (1-based). Steps at or past the end, and every step
    /// of a zero-step animation, yield the exact target.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn frame(&self, step: u32) -> DisplayedStats {
        if self.steps == 0 || step >= self.steps {
            return self.target();
        }
        let eased = ease_out_cubic(f64::from(step) / f64::from(self.steps));
        DisplayedStats {
            total: (self.total as f64 * eased).round() as u64,
            open: (self.open as f64 * eased).round() as u64,
            avg: self.avg * eased,
        }
    }

    #[must_use]
    pub fn target(&self) -> DisplayedStats {
        DisplayedStats { total: self.total, open: self.open, avg: self.avg }
    }

    /// All frames in playback order; the last one is always the target.
    pub fn frames(&self) -> impl Iterator<Item = DisplayedStats> + '_ {
        (1..=self.steps.max(1)).map(move |step| self.frame(step))
    }
}
