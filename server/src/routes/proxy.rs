//! Same-origin reverse proxy for the ticket API.
//!
//! The browser bundle talks to `/api/...` on this host; every such request is
//! forwarded to `TICKET_API_URL` with its method, query string, body, and
//! content type preserved. Upstream status codes and bodies pass through
//! untouched so the client sees the ticket API's own errors.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;

use axum::body::{Body, Bytes};
use axum::extract::rejection::{BytesRejection, FailedToBufferBody};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },
    #[error("could not read request body: {0}")]
    BadBody(String),
    #[error("ticket API timed out")]
    Timeout,
    #[error("ticket API unreachable: {0}")]
    Upstream(String),
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::BadBody(_) => StatusCode::BAD_REQUEST,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() { Self::Timeout } else { Self::Upstream(e.to_string()) }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(error = %self, %status, "ticket API proxy failed");
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Join the upstream root, the captured path, and the raw query string.
///
/// The captured path keeps its trailing slash; the ticket API routes are
/// slash-terminated.
pub(crate) fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}/{path}?{q}"),
        None => format!("{base}/{path}"),
    }
}

/// Copy the headers the ticket API cares about onto the outgoing request.
fn forwarded_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in [header::CONTENT_TYPE, header::ACCEPT] {
        if let Some(value) = incoming.get(&name) {
            out.insert(name, value.clone());
        }
    }
    out
}

/// Only an exceeded body limit maps to 413. Any other read failure, such as
/// a client dropping mid-upload, maps to 400.
fn body_error(rejection: BytesRejection, limit: usize) -> ProxyError {
    match rejection {
        BytesRejection::FailedToBufferBody(FailedToBufferBody::LengthLimitError(_)) => {
            ProxyError::BodyTooLarge { limit }
        }
        other => ProxyError::BadBody(other.body_text()),
    }
}

/// `ANY /api/{*path}`: forward to the ticket API and relay its response.
///
/// The body limit itself is enforced by the `DefaultBodyLimit` layer in
/// `api_routes`.
pub async fn forward(
    State(state): State<AppState>,
    Path(path): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ProxyError> {
    let body = body.map_err(|rejection| body_error(rejection, state.config.proxy_body_limit_bytes))?;

    let url = upstream_url(&state.config.ticket_api_url, &path, uri.query());
    tracing::debug!(%method, %url, "forwarding to ticket API");

    let upstream = state
        .http
        .request(method, &url)
        .headers(forwarded_headers(&headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    if let Some(value) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    }
    Ok(response)
}
