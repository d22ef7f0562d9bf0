//! # Cryptoboard SDK
//!
//! Client-side data sync and chart interaction for the Cryptoboard price
//! tracker: a ranked list of assets and, for the selected one, a pan/zoom
//! price chart. The crate produces render-ready state; it never draws.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Types, formatting, domain models, chart math (always available, WASM-safe)
//! 2. **HTTP API**: `CryptoHttp` with per-request retry policies
//! 3. **High-Level Client**: `CryptoClient` with nested sub-clients and caching
//! 4. **Store**: `DataStore` fetch/selection state over any `QuoteSource`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cryptoboard_sdk::prelude::*;
//!
//! let client = CryptoClient::builder()
//!     .base_url("http://localhost:5000/api")
//!     .build()?;
//! let store = DataStore::new(client);
//!
//! store.fetch_asset_list().await;
//! let rows = store.list_view();
//!
//! let detail = store.enter_detail("bitcoin");
//! detail.load().await;
//! let view = detail.view();
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, serde helpers and display formatting.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Chart controller, zoom/pan transform and render-ready series.
pub mod chart;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `CryptoClient`: the primary entry point for the price API.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: Store ───────────────────────────────────────────────────────────

/// `QuoteSource`: the data seam between the store and the transport.
pub mod source;

/// `DataStore`: fetch state, selection and derived view models.
pub mod store;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + formatting
    pub use crate::shared::fmt::{
        format_compact_currency, format_currency, format_market_cap, format_percentage,
        FormattedPercentage, PercentSign, PLACEHOLDER,
    };
    pub use crate::shared::AssetId;

    // Domain types
    pub use crate::domain::asset::Asset;
    pub use crate::domain::price_history::{HistoryPoint, HistorySeries};

    // Chart
    pub use crate::chart::{
        apply_gesture, Anchor, ChartController, ChartLimits, ChartPhase, ChartSeries,
        CursorShape, Gesture, ZoomTransform,
    };

    // Errors
    pub use crate::error::{FetchError, SdkError};

    // Network
    pub use crate::network::{API_URL_ENV, DEFAULT_API_URL};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{AssetsClient, CryptoClient, CryptoClientBuilder, PriceHistorySubClient};
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};

    // Store
    pub use crate::source::QuoteSource;
    pub use crate::store::{
        AssetHeader, AssetRow, ChartPanel, DataStore, DetailScope, DetailView, FetchState,
        ListView, StoreSnapshot,
    };
}
