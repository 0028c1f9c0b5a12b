//! Falling Stars
//!
//! DOM and timer bindings for `lib_client::star`. Each star is a
//! `<div class="star">` on `document.body` carrying `--start`, `--end` and
//! `animation-duration`; `style.css` turns those into the fall.

use gloo_timers::callback::{Interval, Timeout};
use lib_client::star::{Scheduler, Star, StarCanvas, StarSpawner, STAR_CLASS};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

/// Appends stars to `document.body`.
pub struct BodyCanvas {
    document: Document,
}

impl BodyCanvas {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl StarCanvas for BodyCanvas {
    type Node = HtmlElement;
    type Error = JsValue;

    fn append(&self, star: &Star) -> Result<HtmlElement, JsValue> {
        let body = self
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;

        let element: HtmlElement = self
            .document
            .create_element("div")?
            .dyn_into()
            .map_err(JsValue::from)?;
        element.set_class_name(STAR_CLASS);

        let style = element.style();
        style.set_property("--start", &star.start.to_string())?;
        style.set_property("--end", &star.end.to_string())?;
        style.set_property("animation-duration", &star.duration_css())?;

        body.append_child(&element)?;
        Ok(element)
    }

    fn remove(&self, node: &HtmlElement) {
        node.remove();
    }
}

/// `setTimeout` / `setInterval` through gloo.
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    type Repeat = Interval;

    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }

    fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, task)
    }

    fn detach(&self, repeat: Interval) {
        repeat.forget();
    }
}

/// Start dropping stars onto the page.
pub fn start(document: Document) -> StarSpawner<GlooScheduler> {
    StarSpawner::start(
        Rc::new(BodyCanvas::new(document)),
        Rc::new(GlooScheduler),
        js_sys::Math::random,
    )
}
