//! Chart interaction: one [`ChartController`] per rendered chart.
//!
//! The controller owns the zoom/pan transform and a small state machine:
//!
//! ```text
//!   Idle ──gesture──▶ Interacting ──End──▶ Idle
//!    ▲                                       │
//!    └──────── Resetting ◀── reset() ────────┘   (from any phase)
//! ```
//!
//! Transform updates are delegated to the pure [`apply_gesture`].

pub mod series;
pub mod transform;

pub use series::{ChartPoint, ChartSeries, CursorShape, PRICE_AXIS_LABEL};
pub use transform::{apply_gesture, Anchor, ChartLimits, Gesture, ZoomTransform};

use crate::domain::price_history::HistorySeries;
use crate::shared::AssetId;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartPhase {
    #[default]
    Idle,
    Interacting,
    Resetting,
}

/// Identity of the series a controller was last synced with.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SeriesKey {
    asset_id: AssetId,
    len: usize,
    range: Option<(i64, i64)>,
}

impl SeriesKey {
    fn of(series: &HistorySeries) -> Self {
        Self {
            asset_id: series.asset_id().clone(),
            len: series.len(),
            range: series.time_range(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChartController {
    transform: ZoomTransform,
    phase: ChartPhase,
    limits: ChartLimits,
    series: Option<SeriesKey>,
}

impl ChartController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: ChartLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    pub fn current_transform(&self) -> ZoomTransform {
        self.transform
    }

    pub fn phase(&self) -> ChartPhase {
        self.phase
    }

    pub fn limits(&self) -> &ChartLimits {
        &self.limits
    }

    pub fn on_gesture(&mut self, gesture: Gesture) -> ZoomTransform {
        self.transform = apply_gesture(self.transform, &gesture, &self.limits);
        let next = if gesture.is_end() {
            ChartPhase::Idle
        } else {
            ChartPhase::Interacting
        };
        if next != self.phase {
            tracing::trace!(from = ?self.phase, to = ?next, "Chart phase");
            self.phase = next;
        }
        self.transform
    }

    /// Back to identity, synchronously, from any phase.
    pub fn reset(&mut self) {
        tracing::trace!(from = ?self.phase, "Chart reset");
        self.phase = ChartPhase::Resetting;
        self.transform = ZoomTransform::IDENTITY;
        self.phase = ChartPhase::Idle;
    }

    /// A new series was loaded into the chart. Always resets.
    pub fn load_series(&mut self, series: &HistorySeries) {
        self.series = Some(SeriesKey::of(series));
        self.reset();
    }

    /// Follow the store's history slot: resets when the series differs from
    /// the last one seen (or disappears). Returns whether it reset.
    pub fn sync(&mut self, series: Option<&HistorySeries>) -> bool {
        let key = series.map(SeriesKey::of);
        if key == self.series {
            return false;
        }
        self.series = key;
        self.reset();
        true
    }

    pub fn visible_window(&self, series: &ChartSeries) -> Option<(i64, i64)> {
        series.visible_window(&self.transform)
    }

    /// Cursor for a pointer at normalized `pointer_x`.
    pub fn cursor_at(&self, series: &ChartSeries, pointer_x: f64, tolerance: f64) -> CursorShape {
        CursorShape::for_hover(series.point_under(&self.transform, pointer_x, tolerance).is_some())
    }
}
