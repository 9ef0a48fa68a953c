//! Error types for the live trade stream.

use thiserror::Error;

/// Errors from the streaming trade feed.
///
/// Connection-level failures after subscription are logged and end the
/// feed; they never reach the chart state machine.
#[derive(Debug, Error)]
pub enum StreamError {
    /// Initial connection failure
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Handshake did not complete in time
    #[error("connection timed out")]
    Timeout,

    /// Invalid stream URL
    #[error("invalid stream url: {0}")]
    InvalidUrl(String),

    /// WebSocket protocol error
    #[error("websocket protocol error: {0}")]
    Protocol(String),

    /// Subscribe request could not be encoded
    #[error("failed to encode subscribe request: {0}")]
    Encode(#[from] serde_json::Error),

    /// IO error on the transport
    #[error("io error: {0}")]
    Io(String),
}

impl From<tokio_tungstenite::tungstenite::Error> for StreamError {
    fn from(err: tokio_tungstenite::tungstenite::Error) -> Self {
        use tokio_tungstenite::tungstenite::Error;
        match err {
            Error::Url(e) => StreamError::InvalidUrl(e.to_string()),
            Error::Io(e) => StreamError::Io(e.to_string()),
            Error::Http(resp) => {
                StreamError::ConnectionFailed(format!("http error: {:?}", resp.status()))
            }
            Error::HttpFormat(e) => StreamError::ConnectionFailed(e.to_string()),
            other => StreamError::Protocol(other.to_string()),
        }
    }
}

/// Result type alias for stream operations.
pub type StreamResult<T> = Result<T, StreamError>;
