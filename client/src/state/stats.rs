//! Stats panel state: the fetched snapshot plus the animated display.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use super::action::ActionState;
use crate::net::api::ApiError;
use crate::net::types::StatsSnapshot;
use crate::util::count_up::DisplayedStats;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatsState {
    pub snapshot: Option<StatsSnapshot>,
    pub load: ActionState,
    pub displayed: DisplayedStats,
    /// Id of the animation run allowed to write `displayed`.
    pub animation_run: u64,
}

impl StatsState {
    pub fn begin_load(&mut self) {
        self.load = ActionState::Pending;
    }

    /// Store the fetched snapshot, or a zeroed one on failure, and return the
    /// snapshot the cards should animate to.
    pub fn finish_load(&mut self, result: Result<StatsSnapshot, ApiError>) -> StatsSnapshot {
        self.load.finish(&result);
        let snapshot = result.unwrap_or_else(|e| {
            leptos::logging::warn!("stats load failed: {e}");
            StatsSnapshot::default()
        });
        self.snapshot = Some(snapshot.clone());
        snapshot
    }

    /// Start a new animation run from zero. Any older run stops at its next
    /// frame.
    pub fn begin_animation(&mut self) -> u64 {
        self.animation_run = self.animation_run.wrapping_add(1);
        self.displayed = DisplayedStats::default();
        self.animation_run
    }

    /// Apply a frame from run `run`. Returns `false` when that run has been
    /// superseded and should stop.
    pub fn apply_frame(&mut self, run: u64, frame: DisplayedStats) -> bool {
        if run != self.animation_run {
            return false;
        }
        self.displayed = frame;
        true
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.snapshot.is_none()
    }
}
