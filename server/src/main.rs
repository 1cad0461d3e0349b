#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("http client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("{0}")]
    Leptos(String),
    #[error("bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "ticketdesk failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = config::DeskConfig::from_env()?;
    let port = config.port;
    tracing::info!(ticket_api = %config.ticket_api_url, "proxying ticket API");

    let state = state::AppState::new(config)?;
    let app = routes::leptos_app(state).map_err(StartupError::Leptos)?;

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%port, "ticketdesk listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
