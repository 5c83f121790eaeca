//! Session identity read from the host's persistent storage.

use serde::Deserialize;

use super::ids::ViewerId;

/// Storage key under which the host keeps its authentication record.
pub const AUTH_KEY: &str = "auth";

/// The locally stored identity of the current viewer.
///
/// Read once per initialize pass from the host's key-value store. Every way
/// the record can be wrong (absent key, non-JSON value, missing or
/// non-integer `id` field) degrades to "no viewer" — queries then simply
/// resolve to no personalized status. Parsing never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionIdentity {
    pub viewer: Option<ViewerId>,
}

/// Shape of the stored auth record. Only the `id` field matters to us;
/// the host keeps more alongside it.
#[derive(Debug, Deserialize)]
struct AuthRecord {
    id: Option<i64>,
}

impl SessionIdentity {
    /// Build an identity from the raw stored value, if any.
    pub fn from_stored(raw: Option<&str>) -> Self {
        let viewer = raw
            .and_then(|value| serde_json::from_str::<AuthRecord>(value).ok())
            .and_then(|record| record.id)
            .map(ViewerId::new);
        Self { viewer }
    }
}
