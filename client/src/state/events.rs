//! Ticket lifecycle notifications between sibling views.
//!
//! DESIGN
//! ======
//! The desk page owns one `RwSignal<TicketEvents>`. The composer reports a
//! creation through its callback, the page publishes it here, and the list
//! and stats views receive only the derived `created_seq` as a plain
//! `Signal<u64>`, so neither depends on the page or on each other.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TicketEvents {
    created_seq: u64,
}

impl TicketEvents {
    /// Record one successful creation.
    pub fn publish_created(&mut self) {
        self.created_seq = self.created_seq.wrapping_add(1);
    }

    #[must_use]
    pub fn created_seq(&self) -> u64 {
        self.created_seq
    }
}
