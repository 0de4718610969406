//! Markup for each [`ViewState`].
//!
//! Titles are the only backend-controlled text that reaches the page, and
//! they only ever pass through an [`Escape`] implementation first. Article
//! ids are integers by construction. Result items carry their id in a
//! `data-article-id` attribute so a single listener on the container can
//! dispatch clicks.

use std::fmt::Write as _;

use wikisearch_client::ArticleHit;

use crate::state::ViewState;

/// Shown when the submitted query is blank.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search term";
/// Shown while a request is in flight.
pub const LOADING_MESSAGE: &str = "⏳ Searching...";
/// Shown when the backend returns no hits.
pub const NO_RESULTS_MESSAGE: &str = "No results found. Try a different search term.";
/// Shown for every transport, status or decode failure.
pub const ERROR_MESSAGE: &str = "⚠️ Error performing search. Please try again.";

/// Attribute holding the article id on each result item.
pub const ARTICLE_ID_ATTR: &str = "data-article-id";

/// Turns arbitrary text into markup that displays as that text.
pub trait Escape {
    /// Escape `text` for use as element content.
    fn escape(&self, text: &str) -> String;
}

/// Escaping by the HTML fragment serialization rules for text nodes.
///
/// Produces the same output a browser gives when text is assigned to an
/// element's `textContent` and read back through `innerHTML`: `&`, `<`,
/// `>` and U+00A0 are replaced, everything else is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextEscaper;

impl Escape for TextEscaper {
    fn escape(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '\u{a0}' => out.push_str("&nbsp;"),
                other => out.push(other),
            }
        }
        out
    }
}

/// CSS class and text for the message states.
///
/// Returns `None` for `Idle` and `Results`.
pub fn message(state: &ViewState) -> Option<(&'static str, &'static str)> {
    match state {
        ViewState::EmptyQuery => Some(("no-results", EMPTY_QUERY_MESSAGE)),
        ViewState::Loading => Some(("loading", LOADING_MESSAGE)),
        ViewState::NoResults => Some(("no-results", NO_RESULTS_MESSAGE)),
        ViewState::Error => Some(("no-results", ERROR_MESSAGE)),
        ViewState::Idle | ViewState::Results(_) => None,
    }
}

/// Full container markup for `state`.
///
/// `Idle` renders as empty content.
pub fn render_markup(state: &ViewState, escaper: &impl Escape) -> String {
    match state {
        ViewState::Idle => String::new(),
        ViewState::Results(hits) => {
            let mut out = String::new();
            for hit in hits {
                push_item(&mut out, hit, escaper);
            }
            out
        }
        other => match message(other) {
            Some((class, text)) => format!(r#"<div class="{class}">{text}</div>"#),
            None => String::new(),
        },
    }
}

fn push_item(out: &mut String, hit: &ArticleHit, escaper: &impl Escape) {
    // Writing to a String cannot fail.
    let _ = write!(
        out,
        r#"<div class="result-item" {ARTICLE_ID_ATTR}="{id}"><div class="result-title">{title}</div><div class="result-id">Article ID: {id}</div></div>"#,
        id = hit.id,
        title = escaper.escape(&hit.title),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escaper_replaces_markup_characters() {
        assert_eq!(
            TextEscaper.escape(r#"<script>alert("x") & 'y'</script>"#),
            r#"&lt;script&gt;alert("x") &amp; 'y'&lt;/script&gt;"#
        );
    }

    #[test]
    fn escaper_replaces_nbsp_only_among_whitespace() {
        assert_eq!(TextEscaper.escape("a\u{a0}b c"), "a&nbsp;b c");
    }

    #[test]
    fn escaper_keeps_plain_text() {
        assert_eq!(TextEscaper.escape("Cat (film)"), "Cat (film)");
        assert_eq!(TextEscaper.escape(""), "");
    }

    #[test]
    fn idle_renders_nothing() {
        assert_eq!(render_markup(&ViewState::Idle, &TextEscaper), "");
    }

    #[test]
    fn message_states_render_single_div() {
        assert_eq!(
            render_markup(&ViewState::EmptyQuery, &TextEscaper),
            r#"<div class="no-results">Please enter a search term</div>"#
        );
        assert_eq!(
            render_markup(&ViewState::Loading, &TextEscaper),
            r#"<div class="loading">⏳ Searching...</div>"#
        );
        assert_eq!(
            render_markup(&ViewState::NoResults, &TextEscaper),
            r#"<div class="no-results">No results found. Try a different search term.</div>"#
        );
        assert_eq!(
            render_markup(&ViewState::Error, &TextEscaper),
            r#"<div class="no-results">⚠️ Error performing search. Please try again.</div>"#
        );
    }

    #[test]
    fn results_render_one_item_per_hit() {
        let state = ViewState::Results(vec![ArticleHit::new(39201, "Cat")]);
        assert_eq!(
            render_markup(&state, &TextEscaper),
            concat!(
                r#"<div class="result-item" data-article-id="39201">"#,
                r#"<div class="result-title">Cat</div>"#,
                r#"<div class="result-id">Article ID: 39201</div>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn titles_go_through_escaper() {
        struct Shout;
        impl Escape for Shout {
            fn escape(&self, text: &str) -> String {
                text.to_uppercase()
            }
        }
        let state = ViewState::Results(vec![ArticleHit::new(1, "quiet")]);
        assert!(render_markup(&state, &Shout).contains(">QUIET<"));
    }

    #[test]
    fn message_is_none_for_idle_and_results() {
        assert!(message(&ViewState::Idle).is_none());
        assert!(message(&ViewState::Results(vec![])).is_none());
    }
}
