//! HTTP implementation of [`SearchBackend`] on top of [`reqwest`].
//!
//! Issues one `GET {origin}{scope path}?{query_param}=<encoded query>` per
//! search. On wasm32, reqwest drives the browser's `fetch`, so the same code
//! serves the widget and the native probe.

use url::Url;

use crate::backend::SearchBackend;
use crate::config::ClientConfig;
use crate::error::SearchError;
use crate::types::{ArticleHit, Query};

/// Build a [`reqwest::Client`] for backend requests.
///
/// On native targets the optional timeout from `config` is applied. Browser
/// fetches are never timed out.
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &ClientConfig) -> Result<reqwest::Client, SearchError> {
    with_timeout(reqwest::Client::builder(), config)
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

#[cfg(not(target_arch = "wasm32"))]
fn with_timeout(builder: reqwest::ClientBuilder, config: &ClientConfig) -> reqwest::ClientBuilder {
    match config.timeout_seconds {
        Some(secs) => builder.timeout(std::time::Duration::from_secs(secs)),
        None => builder,
    }
}

#[cfg(target_arch = "wasm32")]
fn with_timeout(builder: reqwest::ClientBuilder, _config: &ClientConfig) -> reqwest::ClientBuilder {
    builder
}

/// Search backend reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: Url,
    query_param: String,
}

impl HttpBackend {
    /// Validate `config` and build a backend from it.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] for an invalid config, or
    /// [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let endpoint = config
            .origin_url()?
            .join(config.scope.path())
            .map_err(|e| SearchError::Config(format!("invalid endpoint path: {e}")))?;
        Ok(Self {
            client: build_client(config)?,
            endpoint,
            query_param: config.query_param.clone(),
        })
    }

    /// The endpoint URL without a query string.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Full request URL for `query`.
    pub fn request_url(&self, query: &Query) -> Url {
        let mut url = self.endpoint.clone();
        let pair = format!("{}={}", urlencoding::encode(&self.query_param), query.encoded());
        url.set_query(Some(&pair));
        url
    }
}

impl SearchBackend for HttpBackend {
    async fn search(&self, query: &Query) -> Result<Vec<ArticleHit>, SearchError> {
        let url = self.request_url(query);
        tracing::trace!(query = query.as_str(), %url, "backend search");

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("search request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("search response read failed: {e}")))?;

        tracing::trace!(bytes = body.len(), "backend response received");

        parse_hits(&body)
    }
}

/// Parse a backend response body into hits.
///
/// The body must be a JSON array of `[id, title]` pairs, or `null`, which is
/// read as no results. Order is preserved.
///
/// # Errors
///
/// Returns [`SearchError::Decode`] for anything else.
pub fn parse_hits(body: &str) -> Result<Vec<ArticleHit>, SearchError> {
    let hits: Option<Vec<ArticleHit>> =
        serde_json::from_str(body).map_err(|e| SearchError::Decode(e.to_string()))?;
    Ok(hits.unwrap_or_default())
}
