//! Remote Data Store
//!
//! Owns one [`LoadableSlice`] and fills it from a [`Source`]. Stores are
//! constructed explicitly and handed to whoever needs them; there are no
//! process-wide instances.
//!
//! The slice sits behind a `std::sync::RwLock` that is never held across an
//! await, so a drop guard can settle it synchronously if the load future is
//! cancelled or the source panics.

use async_trait::async_trait;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::error::LoadError;
use super::slice::{LoadToken, LoadableSlice};

/// Where a store gets its items from
#[async_trait]
pub trait Source: Send + Sync {
    type Item: Clone + Send + Sync + 'static;

    /// Short name used in logs
    fn label(&self) -> &str;

    /// Message shown when a failure carries no reason of its own
    fn fallback_message(&self) -> &str;

    /// Fetch and shape the items for the slice
    async fn fetch(&self) -> Result<Vec<Self::Item>, LoadError>;
}

/// A slice of remote data plus the source that fills it
pub struct RemoteStore<S: Source> {
    source: S,
    slice: Arc<RwLock<LoadableSlice<S::Item>>>,
}

impl<S: Source> RemoteStore<S> {
    /// Create an idle, empty store
    pub fn new(source: S) -> Self {
        Self {
            source,
            slice: Arc::new(RwLock::new(LoadableSlice::default())),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Read-only handle for views
    pub fn reader(&self) -> SliceReader<S::Item> {
        SliceReader {
            slice: Arc::clone(&self.slice),
        }
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> LoadableSlice<S::Item> {
        read(&self.slice).clone()
    }

    pub fn is_loading(&self) -> bool {
        read(&self.slice).is_loading
    }

    pub fn error(&self) -> Option<LoadError> {
        read(&self.slice).error.clone()
    }

    /// Fetch from the source and publish the result.
    ///
    /// Returns `true` if this call's result was applied, `false` if a newer
    /// load superseded it.
    pub async fn load(&self) -> bool {
        let token = write(&self.slice).begin();
        let in_flight = InFlight {
            slice: &self.slice,
            token,
            settled: false,
        };

        tracing::debug!(store = self.source.label(), token = token.get(), "Load started");

        let outcome = self
            .source
            .fetch()
            .await
            .map_err(|e| e.or_fallback(self.source.fallback_message()));

        match &outcome {
            Ok(items) => tracing::info!(
                store = self.source.label(),
                count = items.len(),
                "Load completed"
            ),
            Err(e) => tracing::warn!(
                store = self.source.label(),
                kind = e.kind.as_str(),
                error = %e,
                "Load failed"
            ),
        }

        in_flight.settle(outcome)
    }
}

/// Read-only view of a store's slice
#[derive(Clone)]
pub struct SliceReader<T> {
    slice: Arc<RwLock<LoadableSlice<T>>>,
}

impl<T: Clone> SliceReader<T> {
    pub fn snapshot(&self) -> LoadableSlice<T> {
        read(&self.slice).clone()
    }
}

impl<T> SliceReader<T> {
    pub fn is_loading(&self) -> bool {
        read(&self.slice).is_loading
    }

    pub fn len(&self) -> usize {
        read(&self.slice).items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Settles the slice exactly once, even when the load never completes
struct InFlight<'a, T> {
    slice: &'a RwLock<LoadableSlice<T>>,
    token: LoadToken,
    settled: bool,
}

impl<T> InFlight<'_, T> {
    fn settle(mut self, outcome: Result<Vec<T>, LoadError>) -> bool {
        self.settled = true;
        write(self.slice).finish(self.token, outcome)
    }
}

impl<T> Drop for InFlight<'_, T> {
    fn drop(&mut self) {
        if !self.settled {
            write(self.slice).abandon(self.token);
        }
    }
}

// A panic can only poison the lock between begin/finish calls, which leave
// the slice consistent, so the inner value is safe to keep using.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::sync::oneshot;

    /// Source whose responses are handed out one per call, in order
    struct ScriptedSource {
        responses: Mutex<Vec<oneshot::Receiver<Result<Vec<u32>, LoadError>>>>,
    }

    impl ScriptedSource {
        fn new(count: usize) -> (Self, Vec<oneshot::Sender<Result<Vec<u32>, LoadError>>>) {
            let (senders, receivers): (Vec<_>, Vec<_>) =
                (0..count).map(|_| oneshot::channel()).unzip();
            let mut receivers = receivers;
            receivers.reverse();
            (
                Self {
                    responses: Mutex::new(receivers),
                },
                senders,
            )
        }
    }

    #[async_trait]
    impl Source for ScriptedSource {
        type Item = u32;

        fn label(&self) -> &str {
            "scripted"
        }

        fn fallback_message(&self) -> &str {
            "Failed to fetch numbers"
        }

        async fn fetch(&self) -> Result<Vec<u32>, LoadError> {
            let rx = self.responses.lock().unwrap().pop().expect("unexpected fetch");
            rx.await.unwrap_or_else(|_| Err(LoadError::network("sender dropped")))
        }
    }

    struct PanickingSource;

    #[async_trait]
    impl Source for PanickingSource {
        type Item = u32;

        fn label(&self) -> &str {
            "panicking"
        }

        fn fallback_message(&self) -> &str {
            "Failed"
        }

        async fn fetch(&self) -> Result<Vec<u32>, LoadError> {
            panic!("transform blew up");
        }
    }

    async fn settle() {
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    #[tokio::test]
    async fn test_load_success() {
        let (source, mut senders) = ScriptedSource::new(1);
        let store = Arc::new(RemoteStore::new(source));

        let task = tokio::spawn({
            let store = Arc::clone(&store);
            async move { store.load().await }
        });
        settle().await;
        assert!(store.is_loading());

        senders.remove(0).send(Ok(vec![4, 2])).unwrap();
        assert!(task.await.unwrap());

        let slice = store.snapshot();
        assert!(!slice.is_loading);
        assert!(slice.error.is_none());
        assert_eq!(slice.items, vec![4, 2]);
    }

    #[tokio::test]
    async fn test_failure_uses_fallback_and_keeps_items() {
        let (source, mut senders) = ScriptedSource::new(2);
        let store = RemoteStore::new(source);

        senders.remove(0).send(Ok(vec![1])).unwrap();
        store.load().await;

        senders.remove(0).send(Err(LoadError::network(""))).unwrap();
        store.load().await;

        let slice = store.snapshot();
        assert!(!slice.is_loading);
        assert_eq!(slice.items, vec![1]);
        assert_eq!(
            slice.error.map(|e| e.message),
            Some("Failed to fetch numbers".to_string())
        );
    }

    #[tokio::test]
    async fn test_latest_dispatch_wins() {
        let (source, mut senders) = ScriptedSource::new(2);
        let store = Arc::new(RemoteStore::new(source));

        let first = tokio::spawn({
            let store = Arc::clone(&store);
            async move { store.load().await }
        });
        settle().await;
        let second = tokio::spawn({
            let store = Arc::clone(&store);
            async move { store.load().await }
        });
        settle().await;

        let first_tx = senders.remove(0);
        let second_tx = senders.remove(0);

        // Second request resolves first, then the first one straggles in
        second_tx.send(Ok(vec![2])).unwrap();
        assert!(second.await.unwrap());
        first_tx.send(Ok(vec![1])).unwrap();
        assert!(!first.await.unwrap());

        let slice = store.snapshot();
        assert_eq!(slice.items, vec![2]);
        assert!(!slice.is_loading);
    }

    #[tokio::test]
    async fn test_panicking_source_clears_loading() {
        let store = Arc::new(RemoteStore::new(PanickingSource));

        let result = tokio::spawn({
            let store = Arc::clone(&store);
            async move { store.load().await }
        })
        .await;

        assert!(result.is_err());
        assert!(!store.is_loading());
        assert!(store.error().is_none());
    }

    #[tokio::test]
    async fn test_cancelled_load_clears_loading() {
        let (source, _senders) = ScriptedSource::new(1);
        let store = RemoteStore::new(source);

        let timed_out = tokio::time::timeout(Duration::from_millis(20), store.load()).await;
        assert!(timed_out.is_err());
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_reader_sees_updates() {
        let (source, mut senders) = ScriptedSource::new(1);
        let store = RemoteStore::new(source);
        let reader = store.reader();
        assert!(reader.is_empty());

        senders.remove(0).send(Ok(vec![9, 8, 7])).unwrap();
        store.load().await;

        assert_eq!(reader.len(), 3);
        assert_eq!(reader.snapshot().items, vec![9, 8, 7]);
    }
}
