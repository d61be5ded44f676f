use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, AuditError>;

/// Error type covering the different failure cases that can occur when the
/// tool fetches, aggregates, or emits organization data.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Raised when a required environment variable is missing or empty.
    #[error("missing required environment variable {0}")]
    MissingConfig(&'static str),

    /// Wrapper for transport-level HTTP failures.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Raised when the API answers with a non-success status code.
    #[error("API request to {url} failed with status {status}")]
    Api {
        status: reqwest::StatusCode,
        url: String,
    },

    /// Raised when a response body cannot be decoded into the expected shape.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Errors bubbled up from the CSV writer implementation.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// Wrapper for IO failures such as creating or flushing the output file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
