//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the desk panels. Shared role and event state comes from
//! Leptos context; everything else is passed in as props.

pub mod filter_bar;
pub mod role_toggle;
pub mod stats_summary;
pub mod ticket_card;
pub mod ticket_composer;
pub mod ticket_list;
