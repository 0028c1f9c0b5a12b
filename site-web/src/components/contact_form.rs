//! Contact Form
//!
//! Binds `#userForm` to `lib_client::submission::ContactSubmitter`, with
//! `gloo-net` as the transport.

use crate::utils::constants::{
    BUILD_CONTACT_ENDPOINT, EMAIL_ID, FORM_ID, MESSAGE_ID, NAME_ID, STATUS_ID, SUBMIT_SELECTOR,
};
use crate::utils::dom::{field_value, meta_content};
use async_trait::async_trait;
use gloo_net::http::Request;
use lib_client::config::{resolve_endpoint, ENDPOINT_META_NAME};
use lib_client::submission::{
    ContactSubmitter, ContactTransport, FormFields, FormView, JsonRequest, StatusMessage,
    TransportError, TransportResponse,
};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlFormElement};

/// `fetch` through gloo-net.
pub struct GlooTransport;

#[async_trait(?Send)]
impl ContactTransport for GlooTransport {
    async fn send(&self, request: JsonRequest) -> Result<TransportResponse, TransportError> {
        let response = Request::post(&request.url)
            .header("Content-Type", request.content_type)
            .body(request.body)
            .map_err(|e| TransportError(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status();
        let body = if response.ok() {
            String::new()
        } else {
            response.text().await.map_err(|e| TransportError(e.to_string()))?
        };

        Ok(TransportResponse { status, body })
    }
}

/// The form's elements, looked up once at bind time.
pub struct DomFormView {
    form: HtmlFormElement,
    name: Element,
    email: Element,
    message: Element,
    status: Option<HtmlElement>,
}

impl DomFormView {
    /// `None` when the form or one of its inputs is missing.
    pub fn from_document(document: &Document) -> Option<Self> {
        let form = document
            .get_element_by_id(FORM_ID)?
            .dyn_into::<HtmlFormElement>()
            .ok()?;

        let field = |id: &str| {
            let element = document.get_element_by_id(id);
            if element.is_none() {
                log::warn!("Contact form has no #{} field", id);
            }
            element
        };

        Some(Self {
            form,
            name: field(NAME_ID)?,
            email: field(EMAIL_ID)?,
            message: field(MESSAGE_ID)?,
            status: document
                .get_element_by_id(STATUS_ID)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
        })
    }
}

impl FormView for DomFormView {
    fn read_fields(&self) -> FormFields {
        FormFields {
            name: field_value(&self.name),
            email: field_value(&self.email),
            message: field_value(&self.message),
        }
    }

    fn show_status(&self, status: &StatusMessage) {
        let Some(element) = &self.status else {
            log::warn!("No #{} element, status not shown: {}", STATUS_ID, status.text);
            return;
        };
        element.set_text_content(Some(&status.text));
        if let Err(e) = element.style().set_property("color", status.tone.color()) {
            log::debug!("Failed to color status: {:?}", e);
        }
    }

    fn reset(&self) {
        self.form.reset();
    }

    fn set_busy(&self, busy: bool) {
        let Ok(Some(button)) = self.form.query_selector(SUBMIT_SELECTOR) else {
            return;
        };
        let result = if busy {
            button.set_attribute("disabled", "")
        } else {
            button.remove_attribute("disabled")
        };
        if let Err(e) = result {
            log::debug!("Failed to toggle submit button: {:?}", e);
        }
    }
}

/// Attach the submit handler. Does nothing if the page has no contact form.
pub fn bind(document: &Document) {
    let Some(view) = DomFormView::from_document(document) else {
        log::debug!("No usable #{} on this page", FORM_ID);
        return;
    };

    let endpoint = resolve_endpoint(
        meta_content(document, ENDPOINT_META_NAME).as_deref(),
        BUILD_CONTACT_ENDPOINT,
    );
    log::info!("Contact form posts to {}", endpoint);

    let form = view.form.clone();
    let submitter = Rc::new(ContactSubmitter::new(GlooTransport, view, endpoint));

    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        let submitter = Rc::clone(&submitter);
        wasm_bindgen_futures::spawn_local(async move {
            submitter.handle_submit().await;
        });
    });

    match form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref()) {
        // the handler lives as long as the page
        Ok(()) => on_submit.forget(),
        Err(e) => log::error!("Failed to bind contact form: {:?}", e),
    }
}
