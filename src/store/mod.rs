//! `DataStore`: the app's shared state container.
//!
//! One store is constructed per application session and passed by reference
//! to the views that need it. It holds:
//!
//! - the asset list slot (process-wide, survives navigation);
//! - the selection (at most one asset id);
//! - the selection-scoped slots: the detail asset and its history.
//!
//! All fetches are async and suspend only while the [`QuoteSource`] is
//! talking to the network. The internal lock is never held across an
//! `.await`. Responses are applied in arrival order, subject to the request
//! guards in [`guard`]: superseded or stale responses are dropped.

pub mod fetch_state;
pub mod guard;
pub mod scope;
pub mod view;

pub use fetch_state::FetchState;
pub use guard::RequestToken;
pub use scope::DetailScope;
pub use view::{AssetHeader, AssetRow, ChartPanel, DetailView, ListView};

use crate::domain::asset::{self, Asset};
use crate::domain::price_history::HistorySeries;
use crate::error::{FetchError, SdkError};
use crate::shared::AssetId;
use crate::source::QuoteSource;
use guard::SlotSequence;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Point-in-time copy of the store for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSnapshot {
    pub assets: FetchState<Vec<Asset>>,
    pub selection: Option<AssetId>,
    pub asset: FetchState<Asset>,
    pub history: FetchState<HistorySeries>,
    pub revision: u64,
}

#[derive(Debug, Default)]
struct StoreState {
    assets: FetchState<Vec<Asset>>,
    assets_seq: SlotSequence,
    selection: Option<AssetId>,
    /// Bumped whenever selection-scoped state is invalidated.
    epoch: u64,
    asset: FetchState<Asset>,
    asset_seq: SlotSequence,
    history: FetchState<HistorySeries>,
    history_seq: SlotSequence,
    /// Bumped on every observable change.
    revision: u64,
}

impl StoreState {
    /// Invalidate in-flight scoped requests and clear the scoped slots.
    /// Returns whether observable state changed.
    fn invalidate_scope(&mut self) -> bool {
        self.epoch += 1;
        let asset_changed = self.asset.clear();
        let history_changed = self.history.clear();
        asset_changed || history_changed
    }

    /// Move the selection to `id`. Selecting the current id is a no-op.
    fn select(&mut self, id: AssetId) -> bool {
        if self.selection.as_ref() == Some(&id) {
            return false;
        }
        tracing::debug!(from = ?self.selection, to = %id, "Selection changed");
        self.selection = Some(id);
        self.invalidate_scope();
        true
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

/// Shared state container for the asset list, selection and the selected
/// asset's detail + history.
pub struct DataStore<S> {
    source: S,
    state: RwLock<StoreState>,
}

impl<S: QuoteSource> DataStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: RwLock::new(StoreState::default()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    // ── Reads ────────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> StoreSnapshot {
        let st = self.read();
        StoreSnapshot {
            assets: st.assets.clone(),
            selection: st.selection.clone(),
            asset: st.asset.clone(),
            history: st.history.clone(),
            revision: st.revision,
        }
    }

    pub fn assets(&self) -> FetchState<Vec<Asset>> {
        self.read().assets.clone()
    }

    pub fn selection(&self) -> Option<AssetId> {
        self.read().selection.clone()
    }

    /// The selected asset as found in the loaded list, if any.
    pub fn selected_asset(&self) -> Option<Asset> {
        let st = self.read();
        let id = st.selection.as_ref()?;
        st.assets
            .data()
            .and_then(|list| asset::find(list, id))
            .cloned()
    }

    /// The detail asset slot.
    pub fn asset(&self) -> FetchState<Asset> {
        self.read().asset.clone()
    }

    pub fn history(&self) -> FetchState<HistorySeries> {
        self.read().history.clone()
    }

    /// Counter bumped on every observable state change. Views can compare
    /// it against the last rendered value to decide whether to re-render.
    pub fn revision(&self) -> u64 {
        self.read().revision
    }

    /// Derived list view model.
    pub fn list_view(&self) -> ListView {
        let st = self.read();
        view::list_view(&st.assets, st.selection.as_ref())
    }

    /// Derived detail view model.
    pub fn detail_view(&self) -> DetailView {
        let st = self.read();
        view::detail_view(&st.asset, &st.history)
    }

    // ── Fetches ──────────────────────────────────────────────────────────

    /// Fetch the current-quote collection into the list slot.
    ///
    /// On success, selects the first asset if nothing is selected yet.
    /// Only the most recently issued list request may write the slot.
    pub async fn fetch_asset_list(&self) {
        let token = self.begin_asset_list();
        let result = self.source.fetch_assets().await;
        self.settle_asset_list(token, result);
    }

    /// Fetch one asset by id into the detail slot. An id missing from the
    /// collection is recorded as [`FetchError::NotFound`].
    ///
    /// The detail slot belongs to the selected asset: a fetch for any other
    /// id (or with nothing selected) is skipped.
    pub async fn fetch_asset(&self, id: &AssetId) {
        let Some(token) = self.begin_asset(id) else {
            return;
        };
        let result = self.source.fetch_asset(id).await;
        self.settle_asset(token, result);
    }

    /// Fetch the history series for `id` into the history slot.
    ///
    /// Only the selected asset's history is fetched; any other id is
    /// skipped. The response is dropped if the selection changed (or the
    /// scope was reset) while the request was in flight. A failure keeps any
    /// previously loaded series.
    pub async fn fetch_history(&self, id: &AssetId) {
        let Some(token) = self.begin_history(id) else {
            return;
        };
        let result = self.source.fetch_history(id).await;
        self.settle_history(token, result);
    }

    // ── Selection ────────────────────────────────────────────────────────

    /// Select an asset (or id). Selecting a different id clears the
    /// selection-scoped state and invalidates its in-flight requests. No
    /// fetch is triggered.
    pub fn set_selection(&self, target: impl Into<AssetId>) {
        let id = target.into();
        let mut st = self.write();
        if st.select(id) {
            st.touch();
        }
    }

    /// Drop the selection along with its scoped state.
    pub fn clear_selection(&self) {
        let mut st = self.write();
        if st.selection.take().is_some() {
            st.invalidate_scope();
            st.touch();
        }
    }

    /// Clear the detail asset and history (data, loading, error) and
    /// invalidate their in-flight requests. The selection itself is kept.
    /// Idempotent.
    pub fn reset_selection_scoped_state(&self) {
        let mut st = self.write();
        if st.invalidate_scope() {
            st.touch();
        }
    }

    /// Enter a detail view for `id`: select it and start from a clean
    /// selection scope. The returned guard resets the scope when dropped.
    pub fn enter_detail(&self, id: impl Into<AssetId>) -> DetailScope<'_, S> {
        let id = id.into();
        let epoch = {
            let mut st = self.write();
            st.select(id.clone());
            st.invalidate_scope();
            st.touch();
            st.epoch
        };
        DetailScope::new(self, id, epoch)
    }

    /// Reset the scope entered at `epoch`, unless something else already
    /// moved the store past it.
    pub(crate) fn release_scope(&self, epoch: u64) {
        let mut st = self.write();
        if st.epoch != epoch {
            tracing::trace!(epoch, live = st.epoch, "Scope already superseded");
            return;
        }
        if st.invalidate_scope() {
            st.touch();
        }
    }

    // ── Request phases ───────────────────────────────────────────────────

    pub(crate) fn begin_asset_list(&self) -> RequestToken {
        let mut st = self.write();
        st.assets.begin();
        let token = RequestToken::unscoped(st.assets_seq.issue());
        st.touch();
        tracing::debug!(seq = token.seq, "Fetching asset list");
        token
    }

    pub(crate) fn settle_asset_list(
        &self,
        token: RequestToken,
        result: Result<Vec<Asset>, SdkError>,
    ) -> bool {
        let mut st = self.write();
        if !token.is_current(&st.assets_seq, st.epoch, None) {
            tracing::debug!(seq = token.seq, "Dropping superseded asset list response");
            return false;
        }

        match result {
            Ok(assets) => {
                if st.selection.is_none() {
                    if let Some(first) = assets.first() {
                        st.select(first.id.clone());
                    }
                }
                st.assets.succeed(assets);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Asset list fetch failed");
                st.assets.fail(FetchError::from(&e));
            }
        }
        st.touch();
        true
    }

    pub(crate) fn begin_asset(&self, id: &AssetId) -> Option<RequestToken> {
        let mut st = self.write();
        if st.selection.as_ref() != Some(id) {
            tracing::debug!(asset = %id, selection = ?st.selection, "Skipping asset fetch");
            return None;
        }
        st.asset.begin();
        let token = RequestToken::scoped(st.asset_seq.issue(), st.epoch, id.clone());
        st.touch();
        tracing::debug!(asset = %id, seq = token.seq, "Fetching asset");
        Some(token)
    }

    pub(crate) fn settle_asset(
        &self,
        token: RequestToken,
        result: Result<Asset, SdkError>,
    ) -> bool {
        let mut st = self.write();
        if !token.is_current(&st.asset_seq, st.epoch, st.selection.as_ref()) {
            tracing::debug!(seq = token.seq, "Dropping stale asset response");
            return false;
        }

        match result {
            Ok(found) => st.asset.succeed(found),
            Err(e) => {
                tracing::warn!(error = %e, "Asset fetch failed");
                st.asset.fail(FetchError::from(&e));
            }
        }
        st.touch();
        true
    }

    pub(crate) fn begin_history(&self, id: &AssetId) -> Option<RequestToken> {
        let mut st = self.write();
        if st.selection.as_ref() != Some(id) {
            tracing::debug!(asset = %id, selection = ?st.selection, "Skipping history fetch");
            return None;
        }
        st.history.begin();
        let token = RequestToken::scoped(st.history_seq.issue(), st.epoch, id.clone());
        st.touch();
        tracing::debug!(asset = %id, seq = token.seq, "Fetching history");
        Some(token)
    }

    pub(crate) fn settle_history(
        &self,
        token: RequestToken,
        result: Result<HistorySeries, SdkError>,
    ) -> bool {
        let mut st = self.write();
        if !token.is_current(&st.history_seq, st.epoch, st.selection.as_ref()) {
            tracing::debug!(seq = token.seq, "Dropping stale history response");
            return false;
        }

        match result {
            Ok(series) => st.history.succeed(series),
            Err(e) => {
                tracing::warn!(error = %e, "History fetch failed");
                st.history.fail(FetchError::from(&e));
            }
        }
        st.touch();
        true
    }

    // ── Lock helpers ─────────────────────────────────────────────────────

    // Lock poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
