//! Error types for PurpleAir API operations.

use thiserror::Error;

/// Errors that can occur during PurpleAir API operations.
///
/// Remote failures are deliberately absent: a non-2xx status from the API is
/// returned to the caller as ordinary data, not as an error.
#[derive(Debug, Error)]
pub enum PurpleAirError {
    /// Client constructed with neither a read key nor a write key.
    #[error(
        "at least one API key (read or write) is required; \
         email contact@purpleair.com to obtain one"
    )]
    MissingApiKey,

    /// An operation needs a key kind the client was not configured with.
    #[error("this operation requires a {0} key, but none was configured")]
    KeyNotConfigured(&'static str),

    /// HTTP transport error, including failures decoding the response body.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

/// Result type alias for PurpleAir operations.
pub type Result<T> = core::result::Result<T, PurpleAirError>;
