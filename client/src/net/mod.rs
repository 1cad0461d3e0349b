//! Networking for the ticket REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP requests and `types` defines the JSON bodies they
//! carry.

pub mod api;
pub mod types;
