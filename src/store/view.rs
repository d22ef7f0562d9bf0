//! Derived view models.
//!
//! Pure functions from store slots to render-ready values. Views never read
//! raw `Decimal`s; everything user-facing is already formatted here.

use super::FetchState;
use crate::chart::ChartSeries;
use crate::domain::asset::Asset;
use crate::domain::price_history::HistorySeries;
use crate::error::FetchError;
use crate::shared::fmt::{
    format_compact_currency, format_currency, format_market_cap, format_percentage,
    FormattedPercentage,
};
use crate::shared::AssetId;
use serde::Serialize;

// ─── List ────────────────────────────────────────────────────────────────────

/// One row of the ranked asset table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetRow {
    /// 1-based position in the list.
    pub rank: usize,
    pub id: AssetId,
    pub name: String,
    pub symbol: String,
    pub image_url: String,
    pub price: String,
    pub market_cap: String,
    pub market_cap_full: String,
    pub change: FormattedPercentage,
    pub selected: bool,
}

impl AssetRow {
    pub fn new(rank: usize, asset: &Asset, selected: bool) -> Self {
        Self {
            rank,
            id: asset.id.clone(),
            name: asset.name.clone(),
            symbol: asset.display_symbol(),
            image_url: asset.image_url.clone(),
            price: format_currency(asset.current_price),
            market_cap: format_compact_currency(asset.market_cap),
            market_cap_full: format_market_cap(asset.market_cap),
            change: format_percentage(asset.price_change_pct_24h),
            selected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum ListView {
    Loading,
    Failed(String),
    Rows(Vec<AssetRow>),
}

pub fn list_view(assets: &FetchState<Vec<Asset>>, selection: Option<&AssetId>) -> ListView {
    if let Some(err) = assets.error() {
        return ListView::Failed(err.to_string());
    }
    match assets.data() {
        Some(list) => ListView::Rows(
            list.iter()
                .enumerate()
                .map(|(i, a)| AssetRow::new(i + 1, a, selection == Some(&a.id)))
                .collect(),
        ),
        None if assets.is_loading() => ListView::Loading,
        None => ListView::Rows(Vec::new()),
    }
}

// ─── Detail ──────────────────────────────────────────────────────────────────

/// Header block of the detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetHeader {
    pub id: AssetId,
    pub title: String,
    pub image_url: String,
    pub price: String,
    pub change: FormattedPercentage,
    pub market_cap: String,
    pub market_cap_compact: String,
}

impl From<&Asset> for AssetHeader {
    fn from(asset: &Asset) -> Self {
        Self {
            id: asset.id.clone(),
            title: asset.title(),
            image_url: asset.image_url.clone(),
            price: format_currency(asset.current_price),
            change: format_percentage(asset.price_change_pct_24h),
            market_cap: format_market_cap(asset.market_cap),
            market_cap_compact: format_compact_currency(asset.market_cap),
        }
    }
}

/// Chart area of the detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum ChartPanel {
    Loading,
    /// Loaded, but the series has no points.
    NoData,
    /// Nothing loaded and the last attempt failed.
    Unavailable(FetchError),
    Series(ChartSeries),
}

impl ChartPanel {
    pub fn from_state(history: &FetchState<HistorySeries>) -> Self {
        match (history.data(), history.error()) {
            (Some(series), _) if series.is_empty() => ChartPanel::NoData,
            (Some(series), _) => ChartPanel::Series(ChartSeries::from(series)),
            (None, Some(err)) => ChartPanel::Unavailable(err.clone()),
            (None, None) => ChartPanel::Loading,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum DetailView {
    Loading,
    /// The asset could not be loaded; navigate back to the list.
    Redirect(FetchError),
    Ready {
        header: AssetHeader,
        chart: ChartPanel,
    },
}

pub fn detail_view(asset: &FetchState<Asset>, history: &FetchState<HistorySeries>) -> DetailView {
    if let Some(err) = asset.error() {
        return DetailView::Redirect(err.clone());
    }
    match asset.data() {
        Some(a) if !asset.is_loading() => DetailView::Ready {
            header: AssetHeader::from(a),
            chart: ChartPanel::from_state(history),
        },
        _ => DetailView::Loading,
    }
}
