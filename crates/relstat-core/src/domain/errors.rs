//! Error types.
//!
//! The only fallible boundary is the remote status query. Everything above
//! the resolver swallows these into "no list entry" (`None`), so the enum
//! stays small: it exists for diagnostics, not for control flow upstream.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure (connect, timeout, non-success body read).
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered, but not in the shape we expect.
    #[error("malformed response: {0}")]
    Malformed(String),
}
