//! Error taxonomy for the storefront engine

use thiserror::Error;

/// Failure talking to the storefront API.
///
/// Every variant resolves to a safe default at the component boundary:
/// catalog fetches fall back to the embedded snapshot, entitlement fetches
/// collapse to the empty set. Nothing here escapes to the rendering layer as
/// a hard failure.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Status(u16),

    /// 401 on an authenticated call. The stored session is stale and must be
    /// purged, never retried.
    #[error("session expired")]
    AuthExpired,

    #[error("malformed response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Maps a non-success HTTP status onto the taxonomy.
    pub fn from_status(status: u16) -> Self {
        if status == 401 {
            FetchError::AuthExpired
        } else {
            FetchError::Status(status)
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

/// Failure of a first-party write call (purchases, suggestions, newsletter).
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The server refused the request (purchase declined, duplicate
    /// subscription). The message is surfaced verbatim, with no retry and no
    /// local state change.
    #[error("{0}")]
    Rejected(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Failure of an engine operation.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The item id exists in neither the server response nor the local
    /// snapshot.
    #[error("unknown item: {0}")]
    UnknownItem(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
