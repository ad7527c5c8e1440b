use thiserror::Error;

/// Errors that can occur while fetching remote tasks.
///
/// The `Display` text is what ends up in `TaskState::error`.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Source URL could not be parsed
    #[error("Invalid source URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport failure talking to the source
    #[error("Connection failed to '{url}': {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded total timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Source answered with a non-2xx status
    #[error("{status} {reason}")]
    Status { status: u16, reason: String },

    /// Body was not a JSON array of titled items
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}
