//! What the output container shows, and the request-sequence token that
//! decides whether a finished request may still change it.

use std::cell::Cell;

use wikisearch_client::ArticleHit;

/// Everything the output container can display.
///
/// Each transition replaces the container content wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Nothing submitted yet. The container keeps its initial content.
    #[default]
    Idle,
    /// The submitted query was blank.
    EmptyQuery,
    /// A request is in flight.
    Loading,
    /// The backend answered with at least one hit.
    Results(Vec<ArticleHit>),
    /// The backend answered with no hits.
    NoResults,
    /// Transport, status or decode failure. The cause is only logged.
    Error,
}

impl ViewState {
    /// State for a successful backend answer.
    pub fn from_hits(hits: Vec<ArticleHit>) -> Self {
        if hits.is_empty() {
            Self::NoResults
        } else {
            Self::Results(hits)
        }
    }

    /// Whether this state ends a submit.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Idle | Self::Loading)
    }
}

/// Opaque token identifying one submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Monotonic counter of submits.
///
/// Every submit takes a fresh token. A response may render only while its
/// token is still the latest, so an older request that resolves late can
/// never overwrite a newer state.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: Cell<u64>,
}

impl RequestSequence {
    /// Issue the next token, superseding all earlier ones.
    pub fn next(&self) -> RequestToken {
        let token = self.latest.get().wrapping_add(1);
        self.latest.set(token);
        RequestToken(token)
    }

    /// Whether `token` is the most recently issued one.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.get() == token.0
    }
}
