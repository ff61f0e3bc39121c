/// Default base URL of the rental API during local development.
pub const DEFAULT_API_URL: &str = "http://localhost:4000";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the rental API, without a trailing slash.
    pub api_url: String,
}

/// Errors raised while reading client configuration.
#[derive(Debug, thiserror::Error)]
pub enum ClientConfigError {
    #[error("RENTAL_API_URL must be an http(s) URL, got '{0}'")]
    InvalidUrl(String),
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from the environment (and `.env`, if present).
    ///
    /// | Env Var          | Default                 |
    /// |------------------|-------------------------|
    /// | `RENTAL_API_URL` | `http://localhost:4000` |
    pub fn from_env() -> Result<Self, ClientConfigError> {
        dotenvy::dotenv().ok();
        let raw = std::env::var("RENTAL_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        Self::with_api_url(&raw)
    }

    /// Build a configuration for an explicit base URL.
    pub fn with_api_url(api_url: &str) -> Result<Self, ClientConfigError> {
        let trimmed = api_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ClientConfigError::InvalidUrl(api_url.to_string()));
        }
        Ok(Self {
            api_url: trimmed.to_string(),
        })
    }
}
