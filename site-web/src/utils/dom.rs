//! DOM helpers

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement, HtmlTextAreaElement};

/// Run `f` once the document is parsed: now if it already is, otherwise on
/// `DOMContentLoaded`.
pub fn on_dom_ready<F>(document: &Document, f: F)
where
    F: FnOnce(&Document) + 'static,
{
    if document.ready_state() != "loading" {
        f(document);
        return;
    }

    let target = document.clone();
    let callback: Closure<dyn FnMut(Event)> = Closure::once(move |_: Event| f(&target));
    let listener: &js_sys::Function = callback.as_ref().unchecked_ref();
    match document.add_event_listener_with_callback("DOMContentLoaded", listener) {
        // the listener lives as long as the page
        Ok(()) => callback.forget(),
        Err(e) => log::error!("Failed to listen for DOMContentLoaded: {:?}", e),
    }
}

/// Current value of an `<input>` or `<textarea>`.
pub fn field_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        element.text_content().unwrap_or_default()
    }
}

/// Content of `<meta name="...">`, if present.
pub fn meta_content(document: &Document, name: &str) -> Option<String> {
    document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
}
