//! List status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The viewer's list classification for one media entry.
///
/// This is a closed set defined by the remote API; the wire form is
/// SCREAMING_SNAKE_CASE ("CURRENT", "PLANNING", ...). "No list entry" is not
/// a variant — it is modeled as `Option::None` throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListStatus {
    /// Actively watching/reading.
    Current,

    /// Planned, not started.
    Planning,

    /// Finished.
    Completed,

    /// Abandoned.
    Dropped,

    /// On hold.
    Paused,

    /// Re-watching/re-reading.
    Repeating,
}

impl ListStatus {
    /// Wire/attribute form, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ListStatus::Current => "CURRENT",
            ListStatus::Planning => "PLANNING",
            ListStatus::Completed => "COMPLETED",
            ListStatus::Dropped => "DROPPED",
            ListStatus::Paused => "PAUSED",
            ListStatus::Repeating => "REPEATING",
        }
    }
}

impl fmt::Display for ListStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
