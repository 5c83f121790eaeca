//! StatusApi port - the remote list-status query.

use async_trait::async_trait;

use crate::domain::{ApiError, ListStatus, MediaId, ViewerId};

/// One query: does `viewer` have a list entry for `media`, and with which
/// status?
///
/// `Ok(None)` means the query succeeded and no entry exists. A `viewer` of
/// `None` (no session identity) is passed through; the endpoint then has
/// nothing to personalize against and answers with no entry.
#[async_trait]
pub trait StatusApi: Send + Sync {
    async fn media_list_status(
        &self,
        media: MediaId,
        viewer: Option<ViewerId>,
    ) -> Result<Option<ListStatus>, ApiError>;
}
