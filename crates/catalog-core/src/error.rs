//! Error types for the catalog core.
//!
//! - [`FetchError`] - retrieving or decoding the product list
//! - [`CodecError`] - reading or writing the page location

use thiserror::Error;

/// Network/fetch-related errors for the product list request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Response body was not text
    #[error("Invalid response content")]
    InvalidContent,
    /// Body was not a valid product list
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Errors raised while reading or replacing the page location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The location or history API could not be reached.
    #[error("location unavailable: {0}")]
    LocationUnavailable(String),
    /// The query string could not be decoded.
    #[error("malformed query string: {0}")]
    MalformedQuery(String),
}
