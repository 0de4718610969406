//! Browser binding: the page's elements, `window.open`, and event wiring.
//!
//! Compiled for `wasm32` only. [`mount`] resolves the three elements of
//! the page contract, builds a [`SearchController`] around them and attaches
//! three listeners: button click, Enter in the input, and one delegated click
//! listener on the output container.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlInputElement, KeyboardEvent, Window};
use wikisearch_client::HttpBackend;

use crate::config::WidgetConfig;
use crate::controller::SearchController;
use crate::error::WidgetError;
use crate::render::{render_markup, Escape, TextEscaper, ARTICLE_ID_ATTR};
use crate::state::ViewState;
use crate::view::{Navigator, ResultsView};

/// Controller wired to the live page.
pub type DomController = SearchController<HttpBackend, DomView, WindowNavigator>;

fn js_err(context: &str, err: JsValue) -> WidgetError {
    WidgetError::Dom(format!("{context}: {err:?}"))
}

/// Escapes text with the browser's own serializer.
///
/// The text is assigned as `textContent` of a detached `<div>` and read back
/// through `innerHTML`.
pub struct BrowserEscaper {
    document: Document,
}

impl BrowserEscaper {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl Escape for BrowserEscaper {
    fn escape(&self, text: &str) -> String {
        match self.document.create_element("div") {
            Ok(scratch) => {
                scratch.set_text_content(Some(text));
                scratch.inner_html()
            }
            Err(err) => {
                tracing::warn!(error = ?err, "createElement failed, escaping without the DOM");
                TextEscaper.escape(text)
            }
        }
    }
}

/// The page's output container.
pub struct DomView {
    container: Element,
    escaper: BrowserEscaper,
}

impl DomView {
    pub fn new(container: Element, document: Document) -> Self {
        Self {
            container,
            escaper: BrowserEscaper::new(document),
        }
    }
}

impl ResultsView for DomView {
    fn render(&self, state: &ViewState) {
        self.container
            .set_inner_html(&render_markup(state, &self.escaper));
    }
}

/// Opens articles with `window.open(url, "_blank")`.
pub struct WindowNavigator {
    window: Window,
}

impl WindowNavigator {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Navigator for WindowNavigator {
    fn open(&self, url: &str) -> Result<(), WidgetError> {
        match self.window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(WidgetError::Dom("popup blocked".into())),
            Err(err) => Err(js_err("window.open", err)),
        }
    }
}

fn element_by_id(document: &Document, id: &str) -> Result<Element, WidgetError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| WidgetError::MissingElement(id.to_owned()))
}

/// Bind the widget to the current page.
///
/// The backend origin is taken from `window.location.origin`, so requests
/// are same-origin whatever `config.client.origin` says. Listeners live for
/// the lifetime of the page.
///
/// # Errors
///
/// Returns [`WidgetError`] if the config is invalid, an element is missing or
/// has the wrong type, or a listener cannot be attached.
pub fn mount(mut config: WidgetConfig) -> Result<Rc<DomController>, WidgetError> {
    let window = web_sys::window().ok_or_else(|| WidgetError::Dom("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| WidgetError::Dom("no document".into()))?;

    config.client.origin = window
        .location()
        .origin()
        .map_err(|e| js_err("location.origin", e))?;
    config.validate()?;

    let input: HtmlInputElement = element_by_id(&document, &config.input_id)?
        .dyn_into()
        .map_err(|_| WidgetError::Dom(format!("#{} is not an <input>", config.input_id)))?;
    let button = element_by_id(&document, &config.button_id)?;
    let container = element_by_id(&document, &config.results_id)?;

    let controller = Rc::new(SearchController::new(
        HttpBackend::new(&config.client)?,
        DomView::new(container.clone(), document),
        WindowNavigator::new(window),
        config.article_url_prefix.clone(),
    ));

    let on_click = {
        let controller = Rc::clone(&controller);
        let input = input.clone();
        Closure::<dyn FnMut()>::new(move || spawn_submit(&controller, &input))
    };
    button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| js_err("button click listener", e))?;
    on_click.forget();

    let on_key = {
        let controller = Rc::clone(&controller);
        let field = input.clone();
        Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                spawn_submit(&controller, &field);
            }
        })
    };
    input
        .add_event_listener_with_callback("keypress", on_key.as_ref().unchecked_ref())
        .map_err(|e| js_err("input keypress listener", e))?;
    on_key.forget();

    let on_result_click = {
        let controller = Rc::clone(&controller);
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let attr = clicked_article_id(&event);
            controller.open_from_attribute(attr.as_deref());
        })
    };
    container
        .add_event_listener_with_callback("click", on_result_click.as_ref().unchecked_ref())
        .map_err(|e| js_err("container click listener", e))?;
    on_result_click.forget();

    if config.focus_on_load {
        if let Err(err) = input.focus() {
            tracing::warn!(error = ?err, "could not focus search input");
        }
    }

    tracing::info!(
        input = %config.input_id,
        results = %config.results_id,
        endpoint = %config.client.scope.path(),
        "search widget mounted"
    );
    Ok(controller)
}

/// Read the input and run a submit without blocking the event handler.
fn spawn_submit(controller: &Rc<DomController>, input: &HtmlInputElement) {
    let controller = Rc::clone(controller);
    let raw = input.value();
    wasm_bindgen_futures::spawn_local(async move {
        controller.submit(&raw).await;
    });
}

/// `data-article-id` of the result item enclosing the click target, if any.
fn clicked_article_id(event: &Event) -> Option<String> {
    let target: Element = event.target()?.dyn_into().ok()?;
    let item = target
        .closest(&format!("[{ARTICLE_ID_ATTR}]"))
        .ok()
        .flatten()?;
    item.get_attribute(ARTICLE_ID_ATTR)
}
