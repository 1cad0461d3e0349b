//! Client-side state models.
//!
//! DESIGN
//! ======
//! Each view owns one plain struct wrapped in an `RwSignal`. The structs hold
//! no signals themselves, so every transition is a method that can be unit
//! tested without a reactive runtime.

pub mod action;
pub mod composer;
pub mod events;
pub mod role;
pub mod stats;
pub mod tickets;
