//! wikisearch: a search box that lists Wikipedia articles.
//!
//! The widget reads a query from a text input, asks a same-origin backend
//! for matching `(article id, title)` pairs, and renders them as a clickable
//! list that opens `https://en.wikipedia.org/?curid=<id>` in a new tab.
//!
//! # Architecture
//!
//! - **Controller** ([`SearchController`]): the submit state machine, with
//!   the backend, output container and navigator injected
//! - **Render** ([`render`]): markup for each [`ViewState`], titles escaped
//! - **Client** ([`wikisearch_client`]): query encoding, HTTP, decoding
//! - **DOM** (`dom`, wasm32 only): element lookup, listeners, `window.open`

pub mod config;
pub mod controller;
pub mod error;
pub mod render;
pub mod state;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use config::WidgetConfig;
pub use controller::SearchController;
pub use error::{Result, WidgetError};
pub use state::ViewState;
pub use view::{MarkupBuffer, Navigator, ResultsView};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    if let Err(err) = dom::mount(WidgetConfig::default()) {
        tracing::error!(error = %err, "search widget failed to mount");
    }
}
