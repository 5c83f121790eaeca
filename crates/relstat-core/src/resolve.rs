//! Status resolution: memoized remote lookup with silent degradation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::{ListStatus, MediaId, SessionIdentity};
use crate::ports::StatusApi;

/// Memoized `media id -> list status` lookup.
///
/// The cache lives for the page load: populated lazily on first lookup per
/// key, never evicted, never refreshed. `None` is a first-class cached
/// value meaning "no list entry / unknown" — a failed fetch and a
/// successful fetch with no entry are indistinguishable downstream, by
/// design.
pub struct StatusResolver {
    api: Arc<dyn StatusApi>,
    session: RwLock<SessionIdentity>,
    cache: Mutex<HashMap<MediaId, Option<ListStatus>>>,
}

impl StatusResolver {
    pub fn new(api: Arc<dyn StatusApi>) -> Self {
        Self {
            api,
            session: RwLock::new(SessionIdentity::default()),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Replace the session identity. Called by each initialize pass; the
    /// cache is deliberately left alone (statuses are valid for the page
    /// load, not for the identity).
    pub fn set_session(&self, session: SessionIdentity) {
        *self.session.write().expect("session lock poisoned") = session;
    }

    pub fn session(&self) -> SessionIdentity {
        *self.session.read().expect("session lock poisoned")
    }

    /// The viewer's list status for `media`, or `None` for "no entry /
    /// unknown".
    ///
    /// Sequential callers get at most one network request per distinct
    /// media id. The miss check and the insert are two separate lock
    /// acquisitions: two overlapping lookups for the same uncached id can
    /// both fetch, and the last write wins. That race is accepted — the
    /// duplicate answer is identical, only the request is wasted.
    pub async fn status_for(&self, media: MediaId) -> Option<ListStatus> {
        if let Some(cached) = self.cache.lock().await.get(&media) {
            debug!(%media, status = ?cached, "status from cache");
            return *cached;
        }

        let viewer = self.session().viewer;
        let status = match self.api.media_list_status(media, viewer).await {
            Ok(status) => {
                debug!(%media, ?status, "status fetched");
                status
            }
            Err(err) => {
                debug!(%media, %err, "status fetch failed, assuming no list entry");
                None
            }
        };

        self.cache.lock().await.insert(media, status);
        status
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::domain::{ApiError, ViewerId};

    /// Scripted API that counts requests.
    struct CountingApi {
        calls: AtomicU32,
        reply: fn() -> Result<Option<ListStatus>, ApiError>,
    }

    impl CountingApi {
        fn new(reply: fn() -> Result<Option<ListStatus>, ApiError>) -> Self {
            Self {
                calls: AtomicU32::new(0),
                reply,
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::Relaxed)
        }
    }

    #[async_trait]
    impl StatusApi for CountingApi {
        async fn media_list_status(
            &self,
            _media: MediaId,
            _viewer: Option<ViewerId>,
        ) -> Result<Option<ListStatus>, ApiError> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            (self.reply)()
        }
    }

    #[tokio::test]
    async fn sequential_lookups_hit_the_network_once() {
        let api = Arc::new(CountingApi::new(|| Ok(Some(ListStatus::Completed))));
        let resolver = StatusResolver::new(api.clone());

        let first = resolver.status_for(MediaId::new(7)).await;
        let second = resolver.status_for(MediaId::new(7)).await;

        assert_eq!(first, Some(ListStatus::Completed));
        assert_eq!(second, Some(ListStatus::Completed));
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn distinct_ids_fetch_independently() {
        let api = Arc::new(CountingApi::new(|| Ok(Some(ListStatus::Current))));
        let resolver = StatusResolver::new(api.clone());

        resolver.status_for(MediaId::new(1)).await;
        resolver.status_for(MediaId::new(2)).await;

        assert_eq!(api.calls(), 2);
    }

    #[tokio::test]
    async fn no_list_entry_is_cached_as_none() {
        let api = Arc::new(CountingApi::new(|| Ok(None)));
        let resolver = StatusResolver::new(api.clone());

        assert_eq!(resolver.status_for(MediaId::new(42)).await, None);
        assert_eq!(resolver.status_for(MediaId::new(42)).await, None);
        assert_eq!(api.calls(), 1, "the None must come from the cache");
    }

    #[tokio::test]
    async fn network_failure_degrades_to_none_and_is_cached() {
        let api = Arc::new(CountingApi::new(|| {
            Err(ApiError::Malformed("scripted failure".into()))
        }));
        let resolver = StatusResolver::new(api.clone());

        assert_eq!(resolver.status_for(MediaId::new(9)).await, None);
        // Never retried within the page load.
        assert_eq!(resolver.status_for(MediaId::new(9)).await, None);
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn concurrent_misses_may_duplicate_but_agree() {
        let api = Arc::new(CountingApi::new(|| Ok(Some(ListStatus::Paused))));
        let resolver = Arc::new(StatusResolver::new(api.clone()));

        let a = tokio::spawn({
            let r = Arc::clone(&resolver);
            async move { r.status_for(MediaId::new(3)).await }
        });
        let b = tokio::spawn({
            let r = Arc::clone(&resolver);
            async move { r.status_for(MediaId::new(3)).await }
        });

        let (a, b) = (a.await.unwrap(), b.await.unwrap());
        assert_eq!(a, Some(ListStatus::Paused));
        assert_eq!(b, Some(ListStatus::Paused));
        // Non-deduplicating by design: one or two requests, never zero,
        // never more.
        let calls = api.calls();
        assert!(calls == 1 || calls == 2, "got {calls} requests");
    }

    #[tokio::test]
    async fn viewer_id_is_taken_from_the_current_session() {
        struct ViewerProbe {
            seen: std::sync::Mutex<Vec<Option<ViewerId>>>,
        }

        #[async_trait]
        impl StatusApi for ViewerProbe {
            async fn media_list_status(
                &self,
                _media: MediaId,
                viewer: Option<ViewerId>,
            ) -> Result<Option<ListStatus>, ApiError> {
                self.seen.lock().unwrap().push(viewer);
                Ok(None)
            }
        }

        let api = Arc::new(ViewerProbe {
            seen: std::sync::Mutex::new(Vec::new()),
        });
        let resolver = StatusResolver::new(api.clone());

        resolver.status_for(MediaId::new(1)).await;
        resolver.set_session(SessionIdentity {
            viewer: Some(ViewerId::new(77)),
        });
        resolver.status_for(MediaId::new(2)).await;

        let seen = api.seen.lock().unwrap().clone();
        assert_eq!(seen, vec![None, Some(ViewerId::new(77))]);
    }
}
