//! Domain identifiers (strongly-typed IDs).
//!
//! The host hands us plain integers for media entries and for the signed-in
//! viewer. A phantom-typed `Id<T>` keeps the two from being mixed up while
//! sharing one implementation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Marker trait for each ID type.
///
/// Provides the prefix used by `Display` ("media-", "viewer-").
pub trait IdMarker: Send + Sync + 'static {
    fn prefix() -> &'static str;
}

/// Generic ID type over a raw host integer.
///
/// `T` is `PhantomData`: zero runtime cost, compile-time separation.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T: IdMarker> {
    value: i64,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    pub fn new(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Raw integer as the host API expects it.
    pub fn as_i64(&self) -> i64 {
        self.value
    }
}

impl<T: IdMarker> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", T::prefix(), self.value)
    }
}

/// Marker type for media entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Media {}

impl IdMarker for Media {
    fn prefix() -> &'static str {
        "media-"
    }
}

/// Marker type for the signed-in viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Viewer {}

impl IdMarker for Viewer {
    fn prefix() -> &'static str {
        "viewer-"
    }
}

/// Identifier of a related-media entry (cache key, query variable).
pub type MediaId = Id<Media>;

/// Identifier of the viewer whose list is queried.
pub type ViewerId = Id<Viewer>;
