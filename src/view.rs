//! Seams between the controller and the page.
//!
//! [`ResultsView`] is the output container, [`Navigator`] opens articles.
//! The browser implementations live in `dom`; [`MarkupBuffer`] is an
//! in-memory container that renders the same markup without a page.

use std::cell::{Cell, RefCell};

use crate::error::WidgetError;
use crate::render::{render_markup, Escape, TextEscaper};
use crate::state::ViewState;

/// The output container. Every call replaces what was shown before.
pub trait ResultsView {
    /// Show `state`, discarding the previous content.
    fn render(&self, state: &ViewState);
}

/// Opens an article URL in a new browsing context.
pub trait Navigator {
    /// Open `url` in a new tab.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Dom`] if the browser refuses to open it.
    fn open(&self, url: &str) -> Result<(), WidgetError>;
}

impl<V: ResultsView + ?Sized> ResultsView for &V {
    fn render(&self, state: &ViewState) {
        (**self).render(state);
    }
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn open(&self, url: &str) -> Result<(), WidgetError> {
        (**self).open(url)
    }
}

/// An output container held in memory.
///
/// Keeps the current markup and the last state, and counts renders.
#[derive(Debug, Default)]
pub struct MarkupBuffer<E = TextEscaper> {
    escaper: E,
    markup: RefCell<String>,
    state: RefCell<ViewState>,
    renders: Cell<usize>,
}

impl MarkupBuffer {
    /// Buffer escaping with [`TextEscaper`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: Escape> MarkupBuffer<E> {
    /// Buffer escaping with `escaper`.
    pub fn with_escaper(escaper: E) -> Self {
        Self {
            escaper,
            markup: RefCell::default(),
            state: RefCell::default(),
            renders: Cell::default(),
        }
    }

    /// Current container markup.
    pub fn markup(&self) -> String {
        self.markup.borrow().clone()
    }

    /// Last rendered state.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Number of renders so far.
    pub fn render_count(&self) -> usize {
        self.renders.get()
    }
}

impl<E: Escape> ResultsView for MarkupBuffer<E> {
    fn render(&self, state: &ViewState) {
        *self.markup.borrow_mut() = render_markup(state, &self.escaper);
        *self.state.borrow_mut() = state.clone();
        self.renders.set(self.renders.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wikisearch_client::ArticleHit;

    #[test]
    fn new_buffer_is_idle_and_empty() {
        let buffer = MarkupBuffer::new();
        assert_eq!(buffer.state(), ViewState::Idle);
        assert_eq!(buffer.markup(), "");
        assert_eq!(buffer.render_count(), 0);
    }

    #[test]
    fn render_replaces_content() {
        let buffer = MarkupBuffer::new();
        buffer.render(&ViewState::Results(vec![
            ArticleHit::new(1, "One"),
            ArticleHit::new(2, "Two"),
        ]));
        buffer.render(&ViewState::Loading);

        assert_eq!(buffer.state(), ViewState::Loading);
        assert_eq!(buffer.markup(), r#"<div class="loading">⏳ Searching...</div>"#);
        assert_eq!(buffer.render_count(), 2);
    }

    #[test]
    fn custom_escaper_is_used_for_titles() {
        struct Redact;
        impl Escape for Redact {
            fn escape(&self, _text: &str) -> String {
                "[redacted]".into()
            }
        }

        let buffer = MarkupBuffer::with_escaper(Redact);
        buffer.render(&ViewState::Results(vec![ArticleHit::new(9, "secret")]));
        assert!(buffer.markup().contains("[redacted]"));
        assert!(!buffer.markup().contains("secret"));
    }

    #[test]
    fn reference_delegates_render() {
        let buffer = MarkupBuffer::new();
        let by_ref = &buffer;
        by_ref.render(&ViewState::Error);
        assert_eq!(buffer.state(), ViewState::Error);
    }
}
