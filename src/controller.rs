//! The search controller: submit a query, render its outcome, open results.
//!
//! The controller owns no page globals. Its backend, output container and
//! navigator are injected, so the same state machine runs in the browser,
//! in the native probe, and in tests.

use wikisearch_client::{article_url, ArticleId, Query, SearchBackend, SearchError};

use crate::state::{RequestSequence, ViewState};
use crate::view::{Navigator, ResultsView};

/// Drives one output container from user submits.
///
/// ```text
/// Idle --submit(blank)-----> EmptyQuery
/// Idle --submit(query)-----> Loading --ok--> Results | NoResults
///                                    --err-> Error
/// ```
///
/// Every state is terminal until the next submit. Overlapping submits are
/// ordered by a [`RequestSequence`]: only the latest submit may render.
pub struct SearchController<B, V, N> {
    backend: B,
    view: V,
    navigator: N,
    article_url_prefix: String,
    sequence: RequestSequence,
}

impl<B, V, N> SearchController<B, V, N>
where
    B: SearchBackend,
    V: ResultsView,
    N: Navigator,
{
    /// Build a controller. Nothing is rendered until the first submit.
    pub fn new(backend: B, view: V, navigator: N, article_url_prefix: impl Into<String>) -> Self {
        Self {
            backend,
            view,
            navigator,
            article_url_prefix: article_url_prefix.into(),
            sequence: RequestSequence::default(),
        }
    }

    /// The output container.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Handle a submit with the raw input value.
    ///
    /// A blank query renders [`ViewState::EmptyQuery`] without touching the
    /// backend. Otherwise [`ViewState::Loading`] is rendered, one request is
    /// issued, and its outcome is rendered unless a later submit has
    /// happened in the meantime. Failures never propagate: they render
    /// [`ViewState::Error`] and log the cause.
    ///
    /// Returns the state this call rendered last, or `None` if its response
    /// was discarded as stale.
    pub async fn submit(&self, raw: &str) -> Option<ViewState> {
        let token = self.sequence.next();

        let query = match Query::new(raw) {
            Ok(query) => query,
            Err(err) => {
                debug_assert!(err.is_user_correctable());
                return Some(self.show(ViewState::EmptyQuery));
            }
        };

        tracing::trace!(query = query.as_str(), "submitting search");
        self.view.render(&ViewState::Loading);

        let outcome = self.backend.search(&query).await;

        if !self.sequence.is_current(token) {
            tracing::debug!(
                outcome_ok = outcome.is_ok(),
                "discarding response superseded by a newer submit"
            );
            return None;
        }

        let state = match outcome {
            Ok(hits) => {
                tracing::debug!(count = hits.len(), "search returned results");
                ViewState::from_hits(hits)
            }
            Err(err) => {
                log_failure(&err);
                ViewState::Error
            }
        };
        Some(self.show(state))
    }

    /// URL of article `id`.
    pub fn article_url(&self, id: ArticleId) -> String {
        article_url(&self.article_url_prefix, id)
    }

    /// Open article `id` in a new tab. Refusals are logged, not raised.
    pub fn open_article(&self, id: ArticleId) {
        let url = self.article_url(id);
        tracing::debug!(%url, "opening article");
        if let Err(err) = self.navigator.open(&url) {
            tracing::warn!(%url, error = %err, "failed to open article");
        }
    }

    /// Open the article named by a result item's id attribute.
    ///
    /// Used by delegated click handling: `attr` is the attribute value of
    /// the clicked item, or `None` when the click landed outside any item.
    /// Returns whether an article was opened.
    pub fn open_from_attribute(&self, attr: Option<&str>) -> bool {
        let Some(raw) = attr else {
            return false;
        };
        match raw.parse::<ArticleId>() {
            Ok(id) => {
                self.open_article(id);
                true
            }
            Err(err) => {
                tracing::debug!(attr = raw, error = %err, "ignoring click on malformed item");
                false
            }
        }
    }

    fn show(&self, state: ViewState) -> ViewState {
        debug_assert!(state.is_terminal());
        self.view.render(&state);
        state
    }
}

fn log_failure(err: &SearchError) {
    tracing::warn!(error = %err, "search failed");
}
