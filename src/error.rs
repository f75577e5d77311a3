use reqwest::StatusCode;
use thiserror::Error;

/// Result type for extension client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can surface from an extension client call.
///
/// Transport failures are passed through from `reqwest` unmodified; the client
/// performs no retries and no mapping of status codes to domain errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never completed (connect failure, timeout, body decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("server returned {status}: {body}")]
    Status {
        status: StatusCode,
        /// Raw response body, typically the server's `{code, message}` JSON
        body: String,
    },

    /// Joining a path onto the base URL failed
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}
