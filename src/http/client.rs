//! Low-level HTTP client: `CryptoHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens in the sub-clients). Internal to the SDK: `CryptoClient` wraps this.

use crate::domain::asset::wire::AssetResponse;
use crate::domain::price_history::wire::HistoryPointResponse;
use crate::error::HttpError;
use crate::http::retry::RetryPolicy;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the price API.
#[derive(Clone)]
pub struct CryptoHttp {
    base_url: String,
    client: Client,
    retry: RetryPolicy,
}

impl CryptoHttp {
    /// Build a client for `base_url`. `timeout` is ignored on WASM, where the
    /// browser owns request lifetimes.
    pub fn new(
        base_url: &str,
        timeout: Option<Duration>,
        retry: RetryPolicy,
    ) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(t) = timeout {
                builder = builder.timeout(t);
            }
            builder = builder.pool_max_idle_per_host(10);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        let client = builder
            .build()
            .map_err(|e| HttpError::ClientBuild(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            retry,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Quotes ───────────────────────────────────────────────────────────

    pub async fn get_current_prices(&self) -> Result<Vec<AssetResponse>, HttpError> {
        let url = format!("{}/crypto/current", self.base_url);
        self.get(&url).await
    }

    // ── History ──────────────────────────────────────────────────────────

    pub async fn get_price_history(
        &self,
        asset_id: &str,
    ) -> Result<Vec<HistoryPointResponse>, HttpError> {
        let url = format!(
            "{}/crypto/history/{}",
            self.base_url,
            urlencoding::encode(asset_id)
        );
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let Some(config) = self.retry.config() else {
            return self.do_get(url).await;
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_get::<T>(url).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => {
                            config.is_retryable_status(*status)
                        }
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                let delay = Duration::from_millis(*ms).min(config.max_delay);
                                futures_timer::Delay::new(delay).await;
                            }
                            config.is_retryable_status(429)
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => {
                            #[cfg(not(target_arch = "wasm32"))]
                            let retryable = re.is_connect() || re.is_timeout() || re.is_request();
                            #[cfg(target_arch = "wasm32")]
                            let retryable = re.is_timeout() || re.is_request();
                            retryable
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            error = %e,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else if attempt > 0 {
                        return Err(HttpError::MaxRetriesExceeded {
                            attempts: attempt + 1,
                            last_error: e.to_string(),
                        });
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let retry_after_ms = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_retry_after_ms);
        let body_text = resp.text().await.unwrap_or_default();

        Err(status_error(status_code, body_text, retry_after_ms))
    }
}

/// Map a non-success status to an [`HttpError`].
fn status_error(status: u16, body: String, retry_after_ms: Option<u64>) -> HttpError {
    match status {
        401 => HttpError::Unauthorized,
        404 => HttpError::NotFound(body),
        408 => HttpError::Timeout,
        429 => HttpError::RateLimited { retry_after_ms },
        400..=499 => HttpError::BadRequest(body),
        _ => HttpError::ServerError { status, body },
    }
}

/// `Retry-After` in delta-seconds form. HTTP-date values are ignored.
fn parse_retry_after_ms(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().map(|secs| secs.saturating_mul(1000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let http = CryptoHttp::new("http://localhost:5000/api/", None, RetryPolicy::None).unwrap();
        assert_eq!(http.base_url(), "http://localhost:5000/api");
    }

    #[test]
    fn test_status_error_mapping() {
        assert!(matches!(status_error(401, String::new(), None), HttpError::Unauthorized));
        assert!(matches!(status_error(404, "x".into(), None), HttpError::NotFound(b) if b == "x"));
        assert!(matches!(status_error(408, String::new(), None), HttpError::Timeout));
        assert!(matches!(
            status_error(429, String::new(), Some(2000)),
            HttpError::RateLimited { retry_after_ms: Some(2000) }
        ));
        assert!(matches!(status_error(422, String::new(), None), HttpError::BadRequest(_)));
        assert!(matches!(
            status_error(503, "down".into(), None),
            HttpError::ServerError { status: 503, .. }
        ));
    }

    #[test]
    fn test_parse_retry_after() {
        assert_eq!(parse_retry_after_ms("3"), Some(3000));
        assert_eq!(parse_retry_after_ms(" 0 "), Some(0));
        assert_eq!(parse_retry_after_ms("Wed, 21 Oct 2015 07:28:00 GMT"), None);
        assert_eq!(parse_retry_after_ms("18446744073709552"), Some(u64::MAX));
    }
}
