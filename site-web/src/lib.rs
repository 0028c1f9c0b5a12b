//! Starfall site front end
//!
//! Loaded as a WASM module by `index.html`. On start it
//! - begins dropping falling stars onto `document.body`, and
//! - once the DOM is parsed, wires the contact form (`#userForm`) to the
//!   submission endpoint.
//!
//! The behavior lives in `lib-client`; this crate only binds it to the page.

use wasm_bindgen::prelude::*;

mod components;
mod utils;

use components::{contact_form, starfield};

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Starfall site starting");

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("No document available, nothing to do");
        return;
    };

    starfield::start(document.clone()).run_forever();

    utils::dom::on_dom_ready(&document, |document| {
        contact_form::bind(document);
    });
}
