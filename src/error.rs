//! Error types for the search widget.

use wikisearch_client::SearchError;

/// Errors raised while mounting the widget or talking to the page.
///
/// Search failures never surface as this type at runtime: the controller
/// renders them. `Search` only appears when building the backend fails.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    /// A required element id is not present in the page.
    #[error("missing element: #{0}")]
    MissingElement(String),

    /// A DOM call failed or returned an unexpected node type.
    #[error("DOM error: {0}")]
    Dom(String),

    /// Invalid widget configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The search backend could not be set up.
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, WidgetError>;
