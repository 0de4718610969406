//! Trait definition for the search backend seam.
//!
//! The widget talks to the backend only through [`SearchBackend`], so the
//! controller can be driven by the real HTTP client or by an in-memory
//! double in tests.

use std::future::Future;

use crate::error::SearchError;
use crate::types::{ArticleHit, Query};

/// Something that answers a query with an ordered list of article hits.
///
/// Implementors handle their own:
///
/// - request construction and query encoding
/// - transport and status handling
/// - decoding of the `[[id, title], ...]` body
///
/// The returned future carries no `Send` bound: in the browser the request
/// is a JS promise pinned to the UI thread.
pub trait SearchBackend {
    /// Run one search and return the hits in backend order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the request fails, the backend answers with
    /// a non-2xx status, or the body cannot be decoded.
    fn search(&self, query: &Query) -> impl Future<Output = Result<Vec<ArticleHit>, SearchError>>;
}

impl<B: SearchBackend> SearchBackend for &B {
    fn search(&self, query: &Query) -> impl Future<Output = Result<Vec<ArticleHit>, SearchError>> {
        (**self).search(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A mock backend for testing trait bounds and async execution.
    struct MockBackend {
        hits: Option<Vec<ArticleHit>>,
    }

    impl MockBackend {
        fn new(hits: Vec<ArticleHit>) -> Self {
            Self { hits: Some(hits) }
        }

        fn failing() -> Self {
            Self { hits: None }
        }
    }

    impl SearchBackend for MockBackend {
        async fn search(&self, _query: &Query) -> Result<Vec<ArticleHit>, SearchError> {
            self.hits
                .clone()
                .ok_or_else(|| SearchError::Http("mock backend failure".into()))
        }
    }

    #[tokio::test]
    async fn mock_backend_returns_hits() {
        let backend = MockBackend::new(vec![ArticleHit::new(39201, "Cat")]);
        let query = Query::new("cat").expect("non-empty");

        let hits = backend.search(&query).await.expect("should succeed");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Cat");
    }

    #[tokio::test]
    async fn mock_backend_propagates_errors() {
        let backend = MockBackend::failing();
        let query = Query::new("cat").expect("non-empty");

        let result = backend.search(&query).await;
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("mock backend failure"));
    }

    #[tokio::test]
    async fn reference_delegates_to_backend() {
        let backend = MockBackend::new(vec![]);
        let by_ref = &backend;
        let query = Query::new("zzzzqqqq").expect("non-empty");

        let hits = by_ref.search(&query).await.expect("should succeed");
        assert!(hits.is_empty());
    }
}
