//! `DetailScope`: lifetime of one detail view.
//!
//! Created by [`DataStore::enter_detail`]. While the scope is alive the
//! detail asset and history slots belong to it; dropping it (navigating
//! away) clears them and invalidates anything still in flight.

use super::view::DetailView;
use super::DataStore;
use crate::shared::AssetId;
use crate::source::QuoteSource;
use futures_util::future::join;

/// Guard for the selection-scoped state of one detail view.
#[must_use = "dropping the scope immediately resets the detail state"]
pub struct DetailScope<'a, S: QuoteSource> {
    store: &'a DataStore<S>,
    asset_id: AssetId,
    epoch: u64,
}

impl<'a, S: QuoteSource> DetailScope<'a, S> {
    pub(crate) fn new(store: &'a DataStore<S>, asset_id: AssetId, epoch: u64) -> Self {
        Self {
            store,
            asset_id,
            epoch,
        }
    }

    pub fn asset_id(&self) -> &AssetId {
        &self.asset_id
    }

    pub fn store(&self) -> &'a DataStore<S> {
        self.store
    }

    /// Fetch the asset and its history concurrently.
    pub async fn load(&self) {
        join(
            self.store.fetch_asset(&self.asset_id),
            self.store.fetch_history(&self.asset_id),
        )
        .await;
    }

    /// Re-fetch only the history (e.g. a retry from the chart panel).
    pub async fn reload_history(&self) {
        self.store.fetch_history(&self.asset_id).await;
    }

    pub fn view(&self) -> DetailView {
        self.store.detail_view()
    }

    /// Back action. Equivalent to dropping the scope.
    pub fn leave(self) {}
}

impl<S: QuoteSource> Drop for DetailScope<'_, S> {
    fn drop(&mut self) {
        tracing::debug!(asset = %self.asset_id, "Leaving detail view");
        self.store.release_scope(self.epoch);
    }
}
