//! Request sequencing and stale-response guards.
//!
//! Every fetch captures a [`RequestToken`] when it is issued. When the
//! response arrives it is applied only if the token is still current:
//!
//! - the slot's sequence number must be the latest issued for that slot, so
//!   an older request that resolves late can never overwrite a newer one;
//! - for selection-scoped slots, the selection epoch must be unchanged and
//!   the live selection must still be the asset the request was for, so a
//!   response for asset A never lands while B is selected.

use crate::shared::AssetId;

/// Monotonic request counter for one slot.
#[derive(Debug, Clone, Default)]
pub(crate) struct SlotSequence {
    latest: u64,
}

impl SlotSequence {
    pub(crate) fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub(crate) fn is_latest(&self, seq: u64) -> bool {
        self.latest == seq
    }
}

/// Selection the request was issued under.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Scope {
    epoch: u64,
    asset_id: AssetId,
}

/// Captured at request time, checked at resolution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestToken {
    pub(crate) seq: u64,
    /// `None` for the list slot.
    scope: Option<Scope>,
}

impl RequestToken {
    pub(crate) fn unscoped(seq: u64) -> Self {
        Self { seq, scope: None }
    }

    pub(crate) fn scoped(seq: u64, epoch: u64, asset_id: AssetId) -> Self {
        Self {
            seq,
            scope: Some(Scope { epoch, asset_id }),
        }
    }

    /// Asset a scoped request was issued for.
    pub fn asset_id(&self) -> Option<&AssetId> {
        self.scope.as_ref().map(|s| &s.asset_id)
    }

    /// Whether a response carrying this token may still be applied.
    pub(crate) fn is_current(
        &self,
        slot: &SlotSequence,
        live_epoch: u64,
        selection: Option<&AssetId>,
    ) -> bool {
        if !slot.is_latest(self.seq) {
            return false;
        }
        match &self.scope {
            None => true,
            Some(scope) => scope.epoch == live_epoch && selection == Some(&scope.asset_id),
        }
    }
}
