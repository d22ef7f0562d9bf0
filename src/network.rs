//! Network URL constants and environment lookup for the API base URL.

/// Default REST API base URL (local development backend).
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Environment variable that overrides [`DEFAULT_API_URL`].
pub const API_URL_ENV: &str = "CRYPTOBOARD_API_URL";

/// Resolve the API base URL from [`API_URL_ENV`], falling back to
/// [`DEFAULT_API_URL`].
pub fn api_url_from_env() -> String {
    resolve_api_url(std::env::var(API_URL_ENV).ok())
}

/// Pick the configured URL when it is set and non-blank.
pub fn resolve_api_url(configured: Option<String>) -> String {
    match configured {
        Some(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => DEFAULT_API_URL.to_string(),
    }
}
