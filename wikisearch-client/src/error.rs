//! Error types for the wikisearch-client crate.
//!
//! Messages are stable lower-case strings. They are written to the developer
//! console only; the widget never shows them to the user.

/// Errors that can occur while validating or running a search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The query was empty after trimming whitespace.
    #[error("empty query")]
    EmptyQuery,

    /// The request never produced a response (connection, DNS, fetch abort).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The backend answered with a non-2xx status.
    #[error("backend returned status {0}")]
    Status(u16),

    /// The response body was not a JSON array of `[id, title]` pairs.
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid client configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl SearchError {
    /// Whether the user can fix this by editing the query.
    ///
    /// Everything else is a network or server failure and is reported with
    /// the generic error message.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Self::EmptyQuery)
    }
}

/// Convenience type alias for wikisearch-client results.
pub type Result<T> = std::result::Result<T, SearchError>;
