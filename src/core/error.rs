use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Errors raised while building a client are returned directly. Errors raised by an API
/// call are captured in [`Fetched::error`](crate::Fetched::error) instead.
#[derive(Debug, Error)]
pub enum QuandlError {
    /// The requested resource does not exist (HTTP 404).
    #[error("Invalid URL: {url}")]
    InvalidUrl {
        /// The URL that was requested.
        url: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("Request timed out: {url}")]
    Timeout {
        /// The URL that was requested.
        url: String,
    },

    /// The server returned an unsuccessful HTTP status other than 404.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// A transport-level failure (DNS, connection refused, TLS handshake, broken body).
    /// Carries the message reported by the transport.
    #[error("{0}")]
    Transport(String),

    /// No transport strategy is available in this build or environment.
    #[error("no transport available: enable the `blocking` feature or the HTTP client transport")]
    TransportUnavailable,

    /// A `trim_start`/`trim_end` value could not be resolved to a calendar date.
    #[error("invalid date expression: {0:?}")]
    InvalidDateExpression(String),

    /// The payload was not valid JSON although a decoded object was requested.
    #[error("JSON parsing error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Writing a downloaded file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configured base URL could not be parsed.
    #[error("Invalid base URL: {0}")]
    Url(#[from] url::ParseError),

    /// The HTTP client could not be constructed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
