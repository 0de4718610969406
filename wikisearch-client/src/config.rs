//! Client configuration with sensible defaults.
//!
//! [`ClientConfig`] says where the backend lives and how the query is passed
//! to it. The browser widget overrides `origin` with the page origin so that
//! requests stay same-origin.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::SearchError;

/// Which backend index to query.
///
/// Every scope answers with the same `[[id, title], ...]` body; only the
/// endpoint path differs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    /// Combined ranking over body, title and anchor text.
    #[default]
    All,
    /// Article body text only.
    Body,
    /// Article titles only.
    Title,
    /// Anchor text of links pointing at the article.
    Anchor,
}

impl SearchScope {
    /// Endpoint path for this scope, relative to the origin.
    pub fn path(&self) -> &'static str {
        match self {
            Self::All => "/search",
            Self::Body => "/search_body",
            Self::Title => "/search_title",
            Self::Anchor => "/search_anchor",
        }
    }

    /// Lower-case name, as used in config files and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Body => "body",
            Self::Title => "title",
            Self::Anchor => "anchor",
        }
    }

    /// Returns all available scopes.
    pub fn all() -> &'static [SearchScope] {
        &[Self::All, Self::Body, Self::Title, Self::Anchor]
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchScope {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|scope| scope.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SearchError::Config(format!("unknown search scope: {s}")))
    }
}

/// Configuration for the search backend client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Absolute `http`/`https` base the endpoint path is resolved against.
    pub origin: String,
    /// Which endpoint to query.
    pub scope: SearchScope,
    /// Name of the query-string parameter carrying the query.
    pub query_param: String,
    /// Request timeout in seconds. `None` waits indefinitely.
    ///
    /// Only honoured on native targets; browser fetches have no timeout.
    pub timeout_seconds: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            origin: "http://localhost:8080".into(),
            scope: SearchScope::All,
            query_param: "query".into(),
            timeout_seconds: None,
        }
    }
}

impl ClientConfig {
    /// Config pointing at `origin` with every other field defaulted.
    pub fn with_origin(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            ..Default::default()
        }
    }

    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `origin` parses as an absolute `http` or `https` URL with a host
    /// - `query_param` is not empty
    /// - `timeout_seconds`, when set, is greater than 0
    pub fn validate(&self) -> Result<(), SearchError> {
        self.origin_url()?;
        if self.query_param.trim().is_empty() {
            return Err(SearchError::Config("query_param must not be empty".into()));
        }
        if self.timeout_seconds == Some(0) {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Parsed `origin`.
    pub fn origin_url(&self) -> Result<Url, SearchError> {
        let url = Url::parse(&self.origin)
            .map_err(|e| SearchError::Config(format!("invalid origin {:?}: {e}", self.origin)))?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(SearchError::Config(format!(
                "origin must be an absolute http(s) URL, got {:?}",
                self.origin
            )));
        }
        Ok(url)
    }
}
