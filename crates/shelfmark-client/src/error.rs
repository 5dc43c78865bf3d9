//! Error types for the client layer.

use thiserror::Error;

/// Errors raised while talking to the backend.
///
/// These never reach the user directly: controllers fold them into a
/// `NetworkError` outcome.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The request could not be sent or no response arrived.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A fake or alternative transport reported a failure.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Convenience alias for client results.
pub type ClientResult<T> = std::result::Result<T, ClientError>;
