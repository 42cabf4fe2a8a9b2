//! Loadable Slice
//!
//! One independently loadable unit of state: `items`, `is_loading`, `error`.
//! The slice is a plain state machine; whoever owns it (the native
//! [`RemoteStore`](super::RemoteStore) or the browser store) drives it with
//! [`begin`](LoadableSlice::begin) and [`finish`](LoadableSlice::finish).
//!
//! Every `begin` hands out a fresh [`LoadToken`]. Only the result carrying
//! the latest token is applied, so a slow response can never overwrite a
//! newer one.

use chrono::{DateTime, Utc};

use super::error::LoadError;

/// Identifies one dispatched load of a slice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadToken(u64);

impl LoadToken {
    pub fn get(&self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        LoadToken(self.0 + 1)
    }
}

/// `{items, is_loading, error}` plus bookkeeping
#[derive(Debug, Clone, PartialEq)]
pub struct LoadableSlice<T> {
    /// Last successfully loaded items; kept across failures
    pub items: Vec<T>,
    /// A load is in flight
    pub is_loading: bool,
    /// Error of the latest load, cleared when a new load begins
    pub error: Option<LoadError>,
    /// When `items` was last replaced
    pub loaded_at: Option<DateTime<Utc>>,
    latest: LoadToken,
}

impl<T> Default for LoadableSlice<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            error: None,
            loaded_at: None,
            latest: LoadToken::default(),
        }
    }
}

impl<T> LoadableSlice<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load: mark loading, clear the error, issue a new token
    pub fn begin(&mut self) -> LoadToken {
        self.latest = self.latest.next();
        self.is_loading = true;
        self.error = None;
        self.latest
    }

    /// Apply a load result. Returns `false` if the token is stale and the
    /// result was discarded.
    pub fn finish(&mut self, token: LoadToken, outcome: Result<Vec<T>, LoadError>) -> bool {
        if token != self.latest {
            tracing::debug!(
                token = token.get(),
                latest = self.latest.get(),
                "Discarding stale load result"
            );
            return false;
        }

        match outcome {
            Ok(items) => {
                self.items = items;
                self.loaded_at = Some(Utc::now());
            }
            Err(error) => {
                self.error = Some(error);
            }
        }
        self.is_loading = false;
        true
    }

    /// Settle a load that will never report back (cancelled or panicked)
    pub fn abandon(&mut self, token: LoadToken) {
        if token == self.latest && self.is_loading {
            tracing::debug!(token = token.get(), "Load abandoned before completion");
            self.is_loading = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let slice: LoadableSlice<u32> = LoadableSlice::default();
        assert!(slice.items.is_empty());
        assert!(!slice.is_loading);
        assert!(slice.error.is_none());
        assert!(slice.loaded_at.is_none());
    }

    #[test]
    fn test_success_lifecycle() {
        let mut slice = LoadableSlice::new();
        let token = slice.begin();
        assert!(slice.is_loading);

        assert!(slice.finish(token, Ok(vec![1, 2, 3])));
        assert!(!slice.is_loading);
        assert_eq!(slice.items, vec![1, 2, 3]);
        assert!(slice.loaded_at.is_some());
        assert!(slice.error.is_none());
    }

    #[test]
    fn test_failure_keeps_previous_items() {
        let mut slice = LoadableSlice::new();
        let token = slice.begin();
        slice.finish(token, Ok(vec!["Nairobi"]));

        let token = slice.begin();
        slice.finish(token, Err(LoadError::network("connection refused")));

        assert!(!slice.is_loading);
        assert_eq!(slice.items, vec!["Nairobi"]);
        assert_eq!(slice.error.as_ref().map(|e| e.message.as_str()), Some("connection refused"));
    }

    #[test]
    fn test_begin_clears_error() {
        let mut slice: LoadableSlice<u8> = LoadableSlice::new();
        let token = slice.begin();
        slice.finish(token, Err(LoadError::decode("bad")));

        slice.begin();
        assert!(slice.error.is_none());
        assert!(slice.is_loading);
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut slice = LoadableSlice::new();
        let first = slice.begin();
        let second = slice.begin();

        // Newer load settles first
        assert!(slice.finish(second, Ok(vec![2])));
        // Older load arrives late and is ignored
        assert!(!slice.finish(first, Ok(vec![1])));

        assert_eq!(slice.items, vec![2]);
        assert!(!slice.is_loading);
    }

    #[test]
    fn test_stale_result_does_not_end_loading() {
        let mut slice = LoadableSlice::new();
        let first = slice.begin();
        let second = slice.begin();

        assert!(!slice.finish(first, Err(LoadError::network("timeout"))));
        assert!(slice.is_loading);
        assert!(slice.error.is_none());

        slice.finish(second, Ok(vec![7]));
        assert!(!slice.is_loading);
    }

    #[test]
    fn test_abandon_only_latest() {
        let mut slice: LoadableSlice<u8> = LoadableSlice::new();
        let first = slice.begin();
        let second = slice.begin();

        slice.abandon(first);
        assert!(slice.is_loading);

        slice.abandon(second);
        assert!(!slice.is_loading);
        assert!(slice.error.is_none());
    }
}
