//! Render-ready chart series.

use super::transform::ZoomTransform;
use crate::domain::price_history::HistorySeries;
use crate::shared::AssetId;
use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

pub const PRICE_AXIS_LABEL: &str = "Price (USD)";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub timestamp_ms: i64,
    /// Time of day, `HH:MM:SS` UTC.
    pub label: String,
    pub price: f64,
}

/// One price line, in timestamp order, ready for a rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub asset_id: AssetId,
    pub label: &'static str,
    pub points: Vec<ChartPoint>,
}

impl From<&HistorySeries> for ChartSeries {
    fn from(history: &HistorySeries) -> Self {
        let points = history
            .points()
            .iter()
            .map(|p| ChartPoint {
                timestamp_ms: p.timestamp_ms,
                label: time_label(p.timestamp_ms),
                price: p.price.to_f64().unwrap_or(0.0),
            })
            .collect();
        Self {
            asset_id: history.asset_id().clone(),
            label: PRICE_AXIS_LABEL,
            points,
        }
    }
}

fn time_label(timestamp_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms)
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_default()
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    pub fn time_range(&self) -> Option<(i64, i64)> {
        Some((self.points.first()?.timestamp_ms, self.points.last()?.timestamp_ms))
    }

    /// Position of point `index` on the time axis in `[0, 1]`. A series whose
    /// points share one timestamp is drawn in the middle.
    pub fn normalized_x(&self, index: usize) -> Option<f64> {
        let point = self.points.get(index)?;
        let (first, last) = self.time_range()?;
        let span = (last as i128 - first as i128) as f64;
        if span <= 0.0 {
            return Some(0.5);
        }
        Some((point.timestamp_ms as i128 - first as i128) as f64 / span)
    }

    /// Timestamps at the edges of the visible window.
    pub fn visible_window(&self, transform: &ZoomTransform) -> Option<(i64, i64)> {
        let (first, last) = self.time_range()?;
        let span = (last as i128 - first as i128) as f64;
        let (start, end) = transform.window_x();
        let at = |fraction: f64| {
            let ts = first as i128 + (fraction * span).round() as i128;
            ts.clamp(i64::MIN as i128, i64::MAX as i128) as i64
        };
        Some((at(start), at(end)))
    }

    /// Index of the point closest to `pointer_x` (normalized viewport
    /// coordinate), if it lies within `tolerance`.
    pub fn point_under(
        &self,
        transform: &ZoomTransform,
        pointer_x: f64,
        tolerance: f64,
    ) -> Option<usize> {
        if !pointer_x.is_finite() {
            return None;
        }
        (0..self.points.len())
            .filter_map(|i| {
                let x = transform.to_screen_x(self.normalized_x(i)?);
                Some((i, (x - pointer_x).abs()))
            })
            .filter(|(_, dist)| *dist <= tolerance)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }
}

/// Pointer style over the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorShape {
    #[default]
    Default,
    Pointer,
}

impl CursorShape {
    pub fn for_hover(over_point: bool) -> Self {
        if over_point {
            CursorShape::Pointer
        } else {
            CursorShape::Default
        }
    }
}
