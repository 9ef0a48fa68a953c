//! Error types for the price-history REST client.

use thiserror::Error;

/// Errors from fetching price data.
///
/// Surfaced to the chart tracker and rendered as a retryable error state;
/// this layer never retries on its own.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP/network error from reqwest
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the price API
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Payload did not match the expected shape
    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// Result type alias for history operations.
pub type FetchResult<T> = Result<T, FetchError>;
