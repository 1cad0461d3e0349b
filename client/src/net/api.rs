//! REST helpers for the ticket API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since the
//! ticket views only load data after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`; callers decide the fallback
//! (empty list, zeroed stats, unchanged form) and log the failure.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

use super::types::{Classification, ClassifyRequest, NewTicket, StatsSnapshot, StatusPatch, Ticket, TicketFilter};

/// Root all endpoint paths are resolved against. Override at build time with
/// `TICKETDESK_API_ROOT`.
pub const API_ROOT: &str = match option_env!("TICKETDESK_API_ROOT") {
    Some(root) => root,
    None => "/api/",
};

/// Failure of a single ticket API request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("request body could not be encoded: {0}")]
    Encode(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("response could not be decoded: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(root: &str, path: &str) -> String {
    format!("{}/{}", root.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn tickets_endpoint(root: &str) -> String {
    endpoint(root, "tickets/")
}

#[cfg(any(test, feature = "hydrate"))]
fn stats_endpoint(root: &str) -> String {
    endpoint(root, "tickets/stats/")
}

#[cfg(any(test, feature = "hydrate"))]
fn classify_endpoint(root: &str) -> String {
    endpoint(root, "tickets/classify/")
}

#[cfg(any(test, feature = "hydrate"))]
fn ticket_endpoint(root: &str, id: &str) -> String {
    endpoint(root, &format!("tickets/{id}/"))
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the ticket list from `GET tickets/`, narrowed by `filter`.
///
/// # Errors
///
/// Returns an error if the request fails, the server responds with a non-OK
/// status, or the body is not a ticket array.
pub async fn fetch_tickets(filter: &TicketFilter) -> Result<Vec<Ticket>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = tickets_endpoint(API_ROOT);
        let resp = gloo_net::http::Request::get(&url)
            .query(filter.query_pairs())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = filter;
        Err(ApiError::Unavailable)
    }
}

/// Create a ticket via `POST tickets/`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the ticket.
pub async fn create_ticket(ticket: &NewTicket) -> Result<Ticket, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = tickets_endpoint(API_ROOT);
        let resp = gloo_net::http::Request::post(&url)
            .json(ticket)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ticket;
        Err(ApiError::Unavailable)
    }
}

/// Ask the backend classifier for a category/priority suggestion via
/// `POST tickets/classify/`.
///
/// # Errors
///
/// Returns an error if the request fails or the response is malformed.
pub async fn classify_ticket(request: &ClassifyRequest) -> Result<Classification, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = classify_endpoint(API_ROOT);
        let resp = gloo_net::http::Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Change a ticket's status via `PATCH tickets/{id}/`.
///
/// # Errors
///
/// Returns an error if the request fails or the server refuses the change.
pub async fn update_ticket_status(id: &str, patch: StatusPatch) -> Result<Ticket, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = ticket_endpoint(API_ROOT, id);
        let resp = gloo_net::http::Request::patch(&url)
            .json(&patch)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, patch);
        Err(ApiError::Unavailable)
    }
}

/// Fetch aggregate counters from `GET tickets/stats/`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is malformed.
pub async fn fetch_stats() -> Result<StatsSnapshot, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = stats_endpoint(API_ROOT);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
