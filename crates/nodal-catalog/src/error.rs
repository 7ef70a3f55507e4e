//! Catalog error types.

use thiserror::Error;

/// Errors that can occur when talking to the earthquake catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the catalog.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The catalog has no event with this id.
    #[error("event not found: {0}")]
    EventNotFound(String),

    /// The catalog returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },
}

/// A search-result feature that could not be read as an event summary.
///
/// Reported per event; the rest of the page is unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed event {event_id}: {reason}")]
pub struct MalformedEvent {
    /// The feature's `id`, or its position in the page when it has none.
    pub event_id: String,
    pub reason: String,
}
