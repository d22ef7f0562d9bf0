//! `FetchState<T>`: data, loading flag and error for one store slot.

use crate::error::FetchError;
use serde::Serialize;

/// State of one fetched slot (asset list, detail asset, history).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<FetchError>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

impl<T> FetchState<T> {
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    /// Nothing loaded, nothing in flight, no error.
    pub fn is_cleared(&self) -> bool {
        self.data.is_none() && !self.loading && self.error.is_none()
    }

    /// A request was issued. The error describes the latest attempt, so it
    /// is cleared here.
    pub(crate) fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub(crate) fn succeed(&mut self, data: T) {
        self.data = Some(data);
        self.loading = false;
        self.error = None;
    }

    /// Record a failure. Previously loaded data is kept.
    pub(crate) fn fail(&mut self, error: FetchError) {
        self.loading = false;
        self.error = Some(error);
    }

    /// Back to the default state. Returns whether anything changed.
    pub(crate) fn clear(&mut self) -> bool {
        let changed = !self.is_cleared();
        *self = Self::default();
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_success() {
        let mut slot = FetchState::<u32>::default();
        assert!(slot.is_cleared());
        slot.begin();
        assert!(slot.is_loading());
        slot.succeed(7);
        assert_eq!(slot.data(), Some(&7));
        assert!(!slot.is_loading());
        assert!(slot.error().is_none());
    }

    #[test]
    fn test_failure_keeps_previous_data() {
        let mut slot = FetchState::default();
        slot.succeed(vec![1, 2]);
        slot.begin();
        slot.fail(FetchError::Network("boom".to_string()));
        assert_eq!(slot.data(), Some(&vec![1, 2]));
        assert!(!slot.is_loading());
        assert_eq!(slot.error(), Some(&FetchError::Network("boom".to_string())));
    }

    #[test]
    fn test_begin_clears_stale_error() {
        let mut slot = FetchState::<u32>::default();
        slot.fail(FetchError::Network("boom".to_string()));
        slot.begin();
        assert!(slot.error().is_none());
    }

    #[test]
    fn test_clear_reports_change() {
        let mut slot = FetchState::<u32>::default();
        assert!(!slot.clear());
        slot.begin();
        assert!(slot.clear());
        assert!(slot.is_cleared());
    }
}
