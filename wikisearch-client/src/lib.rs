//! # wikisearch-client
//!
//! Client side of the wikisearch backend contract.
//!
//! The backend answers `GET /search?query=<percent-encoded>` with a JSON
//! array of `[articleId, title]` pairs. This crate validates the query,
//! builds that request, and decodes the answer. It compiles for native
//! targets and for `wasm32-unknown-unknown`, where requests go through the
//! browser's `fetch`.
//!
//! ## Design
//!
//! - [`SearchBackend`] is the seam the widget depends on; [`HttpBackend`] is
//!   the production implementation
//! - No caching, no retries: one query, one request
//! - Query text is logged only at trace level

pub mod backend;
pub mod config;
pub mod error;
pub mod http;
pub mod types;

pub use backend::SearchBackend;
pub use config::{ClientConfig, SearchScope};
pub use error::{Result, SearchError};
pub use http::HttpBackend;
pub use types::{article_url, ArticleHit, ArticleId, Query, WIKIPEDIA_ARTICLE_PREFIX};

/// Run a single search against the backend described by `config`.
///
/// Convenience wrapper that trims `raw`, builds an [`HttpBackend`], and
/// issues one request.
///
/// # Errors
///
/// Returns [`SearchError::EmptyQuery`] for a blank query (no request is
/// made), [`SearchError::Config`] for an invalid config, and the transport,
/// status, or decode error of the request otherwise.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> wikisearch_client::Result<()> {
/// let config = wikisearch_client::ClientConfig::with_origin("http://localhost:8080");
/// let hits = wikisearch_client::search("cat", &config).await?;
/// for hit in &hits {
///     println!("{}: {}", hit.id, hit.title);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(raw: &str, config: &ClientConfig) -> Result<Vec<ArticleHit>> {
    let query = Query::new(raw)?;
    HttpBackend::new(config)?.search(&query).await
}
