//! StaticStatusApi - fixture-table [`StatusApi`] for tests and demos.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use crate::domain::{ApiError, ListStatus, MediaId, ViewerId};
use crate::ports::StatusApi;

/// Answers lookups from a fixed table; media ids not in the table resolve
/// to "no list entry". Counts requests so memoization can be asserted.
#[derive(Default)]
pub struct StaticStatusApi {
    entries: Mutex<HashMap<MediaId, ListStatus>>,
    calls: AtomicU32,
}

impl StaticStatusApi {
    pub fn set(&self, media: MediaId, status: ListStatus) {
        self.entries
            .lock()
            .expect("entries lock poisoned")
            .insert(media, status);
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl StatusApi for StaticStatusApi {
    async fn media_list_status(
        &self,
        media: MediaId,
        _viewer: Option<ViewerId>,
    ) -> Result<Option<ListStatus>, ApiError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(self
            .entries
            .lock()
            .expect("entries lock poisoned")
            .get(&media)
            .copied())
    }
}
