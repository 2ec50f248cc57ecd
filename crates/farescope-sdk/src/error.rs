//! SDK error types.
//!
//! [`SdkError`] is the single error type returned by every fallible
//! operation in the SDK. It wraps underlying transport and serialization
//! errors into a unified enum.

/// Error type for all SDK operations.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// Invalid or missing configuration (e.g. bad URL, missing API key).
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP transport failure (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error: status {status}: {body}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Response body, for the logs.
        body: String,
    },

    /// JSON serialization / deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
