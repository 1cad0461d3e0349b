//! Ticket list state and role-gated status transitions.
//!
//! DESIGN
//! ======
//! The list is never patched in place. Every load replaces `items` wholesale
//! and a successful transition asks for a reload, so what is shown always
//! came from one server response.

#[cfg(test)]
#[path = "tickets_test.rs"]
mod tickets_test;

use std::collections::HashMap;

use super::action::ActionState;
use super::role::Role;
use crate::net::api::ApiError;
use crate::net::types::{StatusPatch, Ticket, TicketStatus};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TicketsState {
    pub items: Vec<Ticket>,
    pub load: ActionState,
    /// Sequence of the most recent load; older responses are dropped.
    pub load_seq: u64,
    /// Whether at least one load has completed.
    pub loaded: bool,
    /// Transition state keyed by ticket id.
    pub transitions: HashMap<String, ActionState>,
    /// Last failure worth showing inline (load or transition).
    pub notice: Option<String>,
}

impl TicketsState {
    /// Start a load and return its sequence number.
    pub fn begin_load(&mut self) -> u64 {
        self.load_seq = self.load_seq.wrapping_add(1);
        self.load = ActionState::Pending;
        self.load_seq
    }

    /// Replace the list with the response to load `seq`. Failures fall back
    /// to an empty list. Responses to superseded loads are ignored.
    pub fn finish_load(&mut self, seq: u64, result: Result<Vec<Ticket>, ApiError>) {
        if seq != self.load_seq {
            return;
        }
        self.load.finish(&result);
        self.loaded = true;
        match result {
            Ok(items) => {
                self.items = items;
                self.notice = None;
            }
            Err(e) => {
                leptos::logging::warn!("ticket list load failed: {e}");
                self.items.clear();
                self.notice = Some("Could not load tickets.".to_owned());
            }
        }
    }

    /// First load still outstanding; the view shows a skeleton.
    #[must_use]
    pub fn is_initial_load(&self) -> bool {
        !self.loaded && self.load.is_pending()
    }

    /// Loaded and nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loaded && self.items.is_empty()
    }

    #[must_use]
    pub fn is_transitioning(&self, id: &str) -> bool {
        self.transitions.get(id).is_some_and(ActionState::is_pending)
    }

    #[must_use]
    pub fn current_status(&self, id: &str) -> Option<TicketStatus> {
        self.items.iter().find(|t| t.id == id).map(|t| t.status)
    }

    /// Whether a transition button for `target` should be enabled.
    #[must_use]
    pub fn can_transition(&self, role: Role, id: &str, target: TicketStatus) -> bool {
        role.can_transition()
            && target != TicketStatus::Unknown
            && !self.is_transitioning(id)
            && self.current_status(id).is_some_and(|current| current != target)
    }

    /// Start a transition. Returns the patch body only when the role allows
    /// it, the ticket is known, nothing is in flight for it, and the target
    /// differs from the current status.
    pub fn begin_transition(&mut self, role: Role, id: &str, target: TicketStatus) -> Option<StatusPatch> {
        if !self.can_transition(role, id, target) {
            return None;
        }
        self.transitions.entry(id.to_owned()).or_default().begin();
        Some(StatusPatch { status: target })
    }

    /// Record a transition outcome. Returns `true` when the list should be
    /// reloaded.
    ///
    /// The entry for `id` is dropped either way; a failure is reported
    /// through `notice`.
    pub fn finish_transition(&mut self, id: &str, result: Result<Ticket, ApiError>) -> bool {
        self.transitions.remove(id);
        match result {
            Ok(_) => true,
            Err(e) => {
                leptos::logging::warn!("status update for ticket {id} failed: {e}");
                self.notice = Some(format!("Could not update ticket #{id}."));
                false
            }
        }
    }
}

