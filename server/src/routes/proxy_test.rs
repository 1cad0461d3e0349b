use super::*;
use crate::config::DeskConfig;
use crate::routes::api_routes;
use axum::Router;
use axum::http::{Method, Uri};
use serde_json::{Value, json};
use tower::ServiceExt;

// =============================================================================
// upstream_url
// =============================================================================

#[test]
fn upstream_url_keeps_trailing_slash() {
    assert_eq!(
        upstream_url("http://127.0.0.1:8000/api", "tickets/", None),
        "http://127.0.0.1:8000/api/tickets/"
    );
}

#[test]
fn upstream_url_normalizes_slashes() {
    assert_eq!(
        upstream_url("http://127.0.0.1:8000/api/", "/tickets/stats/", None),
        "http://127.0.0.1:8000/api/tickets/stats/"
    );
}

#[test]
fn upstream_url_appends_query() {
    assert_eq!(
        upstream_url("http://h/api", "tickets/", Some("category=billing&search=vpn")),
        "http://h/api/tickets/?category=billing&search=vpn"
    );
}

#[test]
fn upstream_url_drops_empty_query() {
    assert_eq!(upstream_url("http://h/api", "tickets/7/", Some("")), "http://h/api/tickets/7/");
}

#[test]
fn forwarded_headers_keeps_only_content_negotiation() {
    let mut incoming = HeaderMap::new();
    incoming.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());
    incoming.insert(header::ACCEPT, "application/json".parse().unwrap());
    incoming.insert(header::COOKIE, "session=abc".parse().unwrap());

    let out = forwarded_headers(&incoming);
    assert_eq!(out.len(), 2);
    assert!(out.get(header::COOKIE).is_none());
}

#[test]
fn proxy_error_status_codes() {
    assert_eq!(ProxyError::BodyTooLarge { limit: 1 }.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(ProxyError::BadBody("reset".into()).status(), StatusCode::BAD_REQUEST);
    assert_eq!(ProxyError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(ProxyError::Upstream("refused".into()).status(), StatusCode::BAD_GATEWAY);
}

// =============================================================================
// Router round trips against a fake ticket API
// =============================================================================

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> (StatusCode, Json<Value>) {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    let status = if method == Method::POST { StatusCode::CREATED } else { StatusCode::OK };
    (
        status,
        Json(json!({
            "method": method.as_str(),
            "path": uri.path(),
            "query": uri.query(),
            "content_type": content_type,
            "body": body,
        })),
    )
}

async fn spawn_fake_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().fallback(echo);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}

fn test_state(ticket_api_url: String, proxy_body_limit_bytes: usize) -> AppState {
    AppState::new(DeskConfig {
        port: 0,
        ticket_api_url,
        ticket_api_timeout_secs: 5,
        proxy_body_limit_bytes,
    })
    .unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn forward_post_preserves_method_query_body_and_content_type() {
    let upstream = spawn_fake_upstream().await;
    let app = api_routes(test_state(upstream, 1024));

    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/api/tickets/?category=billing")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"title":"VPN down"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let echoed = json_body(response).await;
    assert_eq!(echoed["method"], "POST");
    assert_eq!(echoed["path"], "/api/tickets/");
    assert_eq!(echoed["query"], "category=billing");
    assert_eq!(echoed["content_type"], "application/json");
    assert_eq!(echoed["body"], r#"{"title":"VPN down"}"#);
}

#[tokio::test]
async fn forward_patch_reaches_ticket_path() {
    let upstream = spawn_fake_upstream().await;
    let app = api_routes(test_state(upstream, 1024));

    let request = axum::http::Request::builder()
        .method(Method::PATCH)
        .uri("/api/tickets/42/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"status":"closed"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let echoed = json_body(response).await;
    assert_eq!(echoed["method"], "PATCH");
    assert_eq!(echoed["path"], "/api/tickets/42/");
    assert_eq!(echoed["query"], Value::Null);
}

#[tokio::test]
async fn forward_rejects_oversized_body() {
    let upstream = spawn_fake_upstream().await;
    let app = api_routes(test_state(upstream, 8));

    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/api/tickets/classify/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("x".repeat(64)))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body = json_body(response).await;
    assert_eq!(body["detail"], "request body exceeds 8 bytes");
}

#[tokio::test]
async fn forward_reports_interrupted_body_as_bad_request() {
    let upstream = spawn_fake_upstream().await;
    let app = api_routes(test_state(upstream, 1024));

    let chunks: Vec<Result<Bytes, std::io::Error>> = vec![
        Ok(Bytes::from_static(br#"{"title":"#)),
        Err(std::io::Error::new(std::io::ErrorKind::ConnectionReset, "client went away")),
    ];
    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/api/tickets/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from_stream(futures::stream::iter(chunks)))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["detail"].as_str().unwrap().starts_with("could not read request body"));
}

#[tokio::test]
async fn forward_reports_bad_gateway_when_upstream_is_down() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let app = api_routes(test_state(format!("http://{addr}/api"), 1024));
    let request = axum::http::Request::builder()
        .uri("/api/tickets/stats/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn healthz_is_ok() {
    let app = api_routes(test_state("http://127.0.0.1:9/api".to_owned(), 1024));
    let request = axum::http::Request::builder()
        .uri("/healthz")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
