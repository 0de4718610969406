//! Core types: the validated query and the `(id, title)` hits the backend returns.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use crate::error::SearchError;

/// Base URL that a numeric article id is appended to.
pub const WIKIPEDIA_ARTICLE_PREFIX: &str = "https://en.wikipedia.org/?curid=";

/// A trimmed, non-empty search query.
///
/// Built fresh for every submit and dropped once the request is issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Trim `raw` and wrap it.
    ///
    /// Leading and trailing whitespace and byte-order marks are removed.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyQuery`] if nothing is left after trimming.
    pub fn new(raw: &str) -> Result<Self, SearchError> {
        let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
        if trimmed.is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// The trimmed query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encoded form suitable for a query-string value.
    ///
    /// Everything outside `A-Z a-z 0-9 - _ . ~` is escaped, spaces included,
    /// so decoding the value yields the query exactly.
    pub fn encoded(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Numeric Wikipedia article id (`curid`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(pub u64);

impl ArticleId {
    /// The raw id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ArticleId {
    type Err = SearchError;

    /// Accepts decimal digits only; signs, blanks and exponents are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SearchError::Decode(format!("article id is not numeric: {s:?}")));
        }
        s.parse::<u64>()
            .map(Self)
            .map_err(|e| SearchError::Decode(format!("article id out of range: {e}")))
    }
}

impl<'de> Deserialize<'de> for ArticleId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = ArticleId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a non-negative integer or a string of decimal digits")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ArticleId, E> {
                Ok(ArticleId(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ArticleId, E> {
                u64::try_from(v)
                    .map(ArticleId)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ArticleId, E> {
                v.parse()
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// One search hit: an article id and its title.
///
/// On the wire this is a two-element array `[id, title]`. A `null` title is
/// read as empty text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "WireHit")]
pub struct ArticleHit {
    /// Wikipedia article id.
    pub id: ArticleId,
    /// Article title, unescaped.
    pub title: String,
}

#[derive(Deserialize)]
struct WireHit(ArticleId, Option<String>);

impl From<WireHit> for ArticleHit {
    fn from(WireHit(id, title): WireHit) -> Self {
        Self {
            id,
            title: title.unwrap_or_default(),
        }
    }
}

impl ArticleHit {
    /// Construct a hit from its parts.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: ArticleId(id),
            title: title.into(),
        }
    }
}

/// URL of article `id` under `prefix`.
pub fn article_url(prefix: &str, id: ArticleId) -> String {
    format!("{prefix}{id}")
}
