//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TICKET_API_URL: &str = "http://127.0.0.1:8000/api";
pub const DEFAULT_TICKET_API_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PROXY_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
    #[error("{var} must be an http(s) URL, got {value}")]
    NotHttpUrl { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskConfig {
    pub port: u16,
    /// Root of the upstream ticket API, without a trailing slash.
    pub ticket_api_url: String,
    pub ticket_api_timeout_secs: u64,
    pub proxy_body_limit_bytes: usize,
}

impl DeskConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `TICKET_API_URL`: default `http://127.0.0.1:8000/api`
    /// - `TICKET_API_TIMEOUT_SECS`: default 30
    /// - `PROXY_BODY_LIMIT_BYTES`: default 1 MiB
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set but cannot be parsed, or when
    /// the ticket API URL is not an http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env_parse("PORT", DEFAULT_PORT)?;
        let ticket_api_url = parse_api_url(
            std::env::var("TICKET_API_URL")
                .ok()
                .as_deref()
                .unwrap_or(DEFAULT_TICKET_API_URL),
        )?;
        let ticket_api_timeout_secs = env_parse("TICKET_API_TIMEOUT_SECS", DEFAULT_TICKET_API_TIMEOUT_SECS)?;
        let proxy_body_limit_bytes = env_parse("PROXY_BODY_LIMIT_BYTES", DEFAULT_PROXY_BODY_LIMIT_BYTES)?;

        Ok(Self { port, ticket_api_url, ticket_api_timeout_secs, proxy_body_limit_bytes })
    }
}

fn env_parse<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
        Err(_) => Ok(default),
    }
}

fn parse_api_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::NotHttpUrl { var: "TICKET_API_URL", value: raw.to_owned() });
    }
    Ok(trimmed.to_owned())
}
