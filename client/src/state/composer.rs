//! Ticket composer form state.
//!
//! The component drives requests through `begin_*`/`finish_*` pairs: a
//! `begin_*` call returns the request body only when the form allows it, so
//! a `None` means no request is sent at all.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use super::action::ActionState;
use crate::net::api::ApiError;
use crate::net::types::{Category, Classification, ClassifyRequest, NewTicket, Priority, Ticket};

/// How long the "ticket created" notice stays visible.
pub const SUCCESS_NOTICE_MS: u32 = 4_000;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposerState {
    pub title: String,
    pub description: String,
    /// `None` until the user or the classifier picks one.
    pub category: Option<Category>,
    pub priority: Option<Priority>,
    pub classify: ActionState,
    pub submit: ActionState,
    /// Bumped on every successful create; the dismiss timer only clears the
    /// notice it was started for.
    pub success_seq: u64,
    pub show_success: bool,
}

impl ComposerState {
    /// Both required text fields hold something besides whitespace.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }

    /// Submit button state, recomputed from the current form on every read.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.submit.is_pending() && !self.classify.is_pending()
    }

    #[must_use]
    pub fn can_classify(&self) -> bool {
        !self.description.trim().is_empty() && !self.classify.is_pending()
    }

    /// Category the ticket would be created with right now.
    #[must_use]
    pub fn effective_category(&self) -> Category {
        self.category.unwrap_or_default()
    }

    #[must_use]
    pub fn effective_priority(&self) -> Priority {
        self.priority.unwrap_or_default()
    }

    pub fn begin_classify(&mut self) -> Option<ClassifyRequest> {
        if !self.can_classify() || !self.classify.begin() {
            return None;
        }
        Some(ClassifyRequest { description: self.description.trim().to_owned() })
    }

    /// Apply a classifier response. Failures leave category and priority as
    /// they were.
    pub fn finish_classify(&mut self, result: Result<Classification, ApiError>) {
        self.classify.finish(&result);
        match result {
            Ok(suggestion) => {
                let (category, priority) = suggestion.resolve();
                self.category = Some(category);
                self.priority = Some(priority);
            }
            Err(e) => leptos::logging::warn!("classification failed: {e}"),
        }
    }

    pub fn begin_submit(&mut self) -> Option<NewTicket> {
        if !self.can_submit() || !self.submit.begin() {
            return None;
        }
        Some(NewTicket::new(&self.title, &self.description, self.category, self.priority))
    }

    /// Apply a create response. On success the form resets, the notice
    /// shows, and the created ticket is returned with the notice sequence
    /// for the dismiss timer. On failure the form is kept for a retry.
    pub fn finish_submit(&mut self, result: Result<Ticket, ApiError>) -> Option<(Ticket, u64)> {
        self.submit.finish(&result);
        match result {
            Ok(ticket) => {
                self.clear_fields();
                self.success_seq = self.success_seq.wrapping_add(1);
                self.show_success = true;
                Some((ticket, self.success_seq))
            }
            Err(e) => {
                leptos::logging::warn!("ticket submit failed: {e}");
                None
            }
        }
    }

    /// Hide the success notice if it still belongs to `seq`.
    pub fn dismiss_success(&mut self, seq: u64) {
        if self.success_seq == seq {
            self.show_success = false;
        }
    }

    fn clear_fields(&mut self) {
        self.title.clear();
        self.description.clear();
        self.category = None;
        self.priority = None;
    }
}

/// Hand a finished create to `on_created` and return the notice sequence for
/// the dismiss timer. `on_created` runs once per successful create and never
/// for a failed one.
pub fn deliver_created(outcome: Option<(Ticket, u64)>, on_created: impl FnOnce(Ticket)) -> Option<u64> {
    let (ticket, seq) = outcome?;
    on_created(ticket);
    Some(seq)
}
