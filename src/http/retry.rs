//! Retry policies for HTTP requests.

use rand::Rng;
use std::time::Duration;

/// Retry policy for an HTTP request.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// Single attempt.
    None,
    /// Retry on transport failures + 502/503/504, with backoff on 429.
    /// Default for the quote and history endpoints, which are plain GETs.
    #[default]
    Idempotent,
    /// User-provided retry logic.
    Custom(RetryConfig),
}

impl RetryPolicy {
    /// Resolve to a concrete config, or `None` for a single attempt.
    pub fn config(&self) -> Option<RetryConfig> {
        match self {
            RetryPolicy::None => None,
            RetryPolicy::Idempotent => Some(RetryConfig::idempotent()),
            RetryPolicy::Custom(c) => Some(c.clone()),
        }
    }
}

/// Backoff schedule and retry triggers.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Extra attempts after the first request.
    pub max_retries: u32,
    pub initial_delay: Duration,
    /// Ceiling for any single backoff.
    pub max_delay: Duration,
    /// Growth of the delay per attempt.
    pub backoff_factor: f64,
    /// Spread each delay uniformly over ±25%.
    pub jitter: bool,
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::idempotent()
    }
}

impl RetryConfig {
    /// The default config for idempotent (GET) requests.
    pub fn idempotent() -> Self {
        Self {
            max_retries: 2,
            initial_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(5),
            backoff_factor: 2.0,
            jitter: true,
            retryable_statuses: vec![429, 502, 503, 504],
        }
    }

    pub fn is_retryable_status(&self, status: u16) -> bool {
        self.retryable_statuses.contains(&status)
    }

    /// Backoff before retry number `attempt + 1`.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let growth = self.backoff_factor.powi(attempt.min(64) as i32);
        let ceiling = self.max_delay.as_millis() as f64;
        let mut ms = (self.initial_delay.as_millis() as f64 * growth).min(ceiling);
        if self.jitter && ms > 0.0 {
            ms *= rand::thread_rng().gen_range(0.75..=1.25);
        }
        Duration::from_millis(ms.max(0.0).round() as u64)
    }
}
