//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Rich domain types (validated, view-ready)
//! - `wire.rs`: Raw serde structs matching backend responses
//! - `convert.rs`: `TryFrom` conversions with validation
//! - `client.rs`: Sub-client with HTTP methods and caching

pub mod asset;
pub mod price_history;
