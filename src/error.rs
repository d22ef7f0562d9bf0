//! Unified SDK error types.

use crate::shared::AssetId;
use serde::Serialize;
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Asset not found: {0}")]
    AssetNotFound(AssetId),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

/// Error recorded in a [`FetchState`](crate::store::FetchState).
///
/// This is what views see. It is cheap to clone and compare, unlike
/// [`SdkError`], which carries transport internals.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FetchError {
    /// Transport or HTTP failure, with the underlying message.
    #[error("Network error: {0}")]
    Network(String),

    /// The requested id is absent from the current-quote collection.
    #[error("Asset not found: {0}")]
    NotFound(AssetId),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound(_))
    }
}

impl From<&SdkError> for FetchError {
    fn from(err: &SdkError) -> Self {
        match err {
            SdkError::AssetNotFound(id) => FetchError::NotFound(id.clone()),
            other => FetchError::Network(other.to_string()),
        }
    }
}

impl From<SdkError> for FetchError {
    fn from(err: SdkError) -> Self {
        FetchError::from(&err)
    }
}
