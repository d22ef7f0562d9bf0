//! HTTP client layer: `CryptoHttp` with per-request retry policies.

pub mod client;
pub mod retry;

pub use client::CryptoHttp;
pub use retry::{RetryConfig, RetryPolicy};
