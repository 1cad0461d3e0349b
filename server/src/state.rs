//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed host config and a single pooled HTTP client used to reach
//! the upstream ticket API.

use std::sync::Arc;
use std::time::Duration;

use crate::config::DeskConfig;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<DeskConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state from config, creating the upstream HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend for the HTTP client cannot be
    /// initialized.
    pub fn new(config: DeskConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.ticket_api_timeout_secs))
            .build()?;
        Ok(Self { config: Arc::new(config), http })
    }
}
