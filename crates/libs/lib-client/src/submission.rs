//! # Contact Form Submission
//!
//! One submit event runs through
//!
//! ```text
//! Idle -> Validating -> Invalid
//!                    -> Submitting -> Success | Failed
//! ```
//!
//! and always ends with a line of status text on the page. Nothing escapes the
//! handler: validation, server rejections and transport failures all become a
//! [`SubmitError`] whose `Display` is exactly what the visitor reads.
//!
//! While one attempt is `Submitting`, further submit events are ignored.

use async_trait::async_trait;
use lib_utils::validation::is_valid_email;
use serde_json::Value;
use shared::dto::contact::ContactSubmission;
use std::cell::Cell;

pub const CONTENT_TYPE_JSON: &str = "application/json";

pub const MSG_SUCCESS: &str = "Submitted successfully!";
pub const MSG_UNKNOWN_ERROR: &str = "Unknown error";

// region: --- Errors

/// Input problems found before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill out all fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Why a submission attempt did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Non-2xx reply. `message` is the server's text or "Unknown error".
    #[error("Submission failed: {message}")]
    Rejected { status: u16, message: String },

    /// The request or its error body never arrived intact. The detail is for
    /// logs only.
    #[error("Submission failed: Network or server error.")]
    Transport(String),
}

/// Failure reported by a [`ContactTransport`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

// endregion: --- Errors

// region: --- Status

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Error,
}

impl StatusTone {
    /// CSS color of the status line.
    pub fn color(self) -> &'static str {
        match self {
            StatusTone::Success => "green",
            StatusTone::Error => "red",
        }
    }
}

/// Text and tone written to the status element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub tone: StatusTone,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: StatusTone::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: StatusTone::Error }
    }

    /// Status line for a finished attempt.
    pub fn for_outcome(outcome: &Result<(), SubmitError>) -> Self {
        match outcome {
            Ok(()) => Self::success(MSG_SUCCESS),
            Err(err) => Self::error(err.to_string()),
        }
    }
}

// endregion: --- Status

// region: --- Seams

/// Untrimmed values as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// The form as the submitter sees it.
pub trait FormView {
    fn read_fields(&self) -> FormFields;
    fn show_status(&self, status: &StatusMessage);
    /// Clear every input.
    fn reset(&self);
    /// Called with `true` when a request starts and `false` when it ends.
    fn set_busy(&self, busy: bool);
}

/// A JSON POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonRequest {
    pub url: String,
    pub content_type: &'static str,
    pub body: String,
}

impl JsonRequest {
    pub fn post(url: &str, body: String) -> Self {
        Self {
            url: url.to_string(),
            content_type: CONTENT_TYPE_JSON,
            body,
        }
    }
}

/// Status and, for non-2xx replies, the body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends the request. Implementations only read the body of non-2xx replies.
#[async_trait(?Send)]
pub trait ContactTransport {
    async fn send(&self, request: JsonRequest) -> Result<TransportResponse, TransportError>;
}

// endregion: --- Seams

// region: --- Rules

/// Empty fields first, then the email pattern.
pub fn validate(submission: &ContactSubmission) -> Result<(), ValidationError> {
    if submission.has_blank_field() {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(&submission.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Turn a reply into the attempt's outcome.
///
/// A non-2xx body must be JSON. Its `message` is shown when it is truthy in
/// the JavaScript sense, rendered the way JavaScript would concatenate it:
/// `42` shows as `42`, `true` as `true`. A missing, `null`, `false`, `0` or
/// empty `message` becomes "Unknown error". A body that is not JSON, or is
/// JSON `null`, counts as a transport failure.
pub fn interpret_response(response: TransportResponse) -> Result<(), SubmitError> {
    if response.is_success() {
        return Ok(());
    }

    let status = response.status;
    let body: Value = serde_json::from_str(&response.body).map_err(|e| {
        SubmitError::Transport(format!("unreadable error body (status {}): {}", status, e))
    })?;
    if body.is_null() {
        return Err(SubmitError::Transport(format!("null error body (status {})", status)));
    }

    let message = body
        .get("message")
        .filter(|message| is_truthy(message))
        .map(js_text)
        .unwrap_or_else(|| MSG_UNKNOWN_ERROR.to_string());

    Err(SubmitError::Rejected { status, message })
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// `String(value)` for a JSON value.
fn js_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            // 2.0 prints as 2
            (_, _, Some(f)) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
            (_, _, Some(f)) => f.to_string(),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        // elements joined by commas, null elements as empty strings
        Value::Array(items) => items
            .iter()
            .map(|item| if item.is_null() { String::new() } else { js_text(item) })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

// endregion: --- Rules

// region: --- Submitter

/// Clears the in-flight flag and releases the form however the attempt ends.
struct InFlight<'a, V: FormView> {
    flag: &'a Cell<bool>,
    view: &'a V,
}

impl<'a, V: FormView> InFlight<'a, V> {
    fn enter(flag: &'a Cell<bool>, view: &'a V) -> Self {
        flag.set(true);
        view.set_busy(true);
        Self { flag, view }
    }
}

impl<V: FormView> Drop for InFlight<'_, V> {
    fn drop(&mut self) {
        self.flag.set(false);
        self.view.set_busy(false);
    }
}

/// Handles submit events for one form.
pub struct ContactSubmitter<T, V> {
    transport: T,
    view: V,
    endpoint: String,
    in_flight: Cell<bool>,
}

impl<T: ContactTransport, V: FormView> ContactSubmitter<T, V> {
    pub fn new(transport: T, view: V, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            view,
            endpoint: endpoint.into(),
            in_flight: Cell::new(false),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Run one submit event to completion.
    ///
    /// Returns `None` when an earlier attempt is still in flight; the event is
    /// dropped without touching the page.
    pub async fn handle_submit(&self) -> Option<Result<(), SubmitError>> {
        if self.in_flight.get() {
            log::debug!("Submit ignored, a submission is already in flight");
            return None;
        }

        let fields = self.view.read_fields();
        let submission = ContactSubmission::from_raw(&fields.name, &fields.email, &fields.message);

        let outcome = match validate(&submission) {
            Ok(()) => {
                let _guard = InFlight::enter(&self.in_flight, &self.view);
                self.send(&submission).await
            }
            Err(err) => Err(err.into()),
        };

        self.report(&outcome);
        Some(outcome)
    }

    async fn send(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        let body = serde_json::to_string(submission)
            .map_err(|e| SubmitError::Transport(format!("failed to encode submission: {}", e)))?;

        log::debug!("Posting contact submission to {}", self.endpoint);
        let response = self
            .transport
            .send(JsonRequest::post(&self.endpoint, body))
            .await
            .map_err(|e| SubmitError::Transport(e.0))?;

        interpret_response(response)
    }

    fn report(&self, outcome: &Result<(), SubmitError>) {
        match outcome {
            Ok(()) => log::info!("Contact form submitted"),
            Err(SubmitError::Transport(detail)) => log::error!("Error submitting form: {}", detail),
            Err(err) => log::warn!("Contact form not submitted: {}", err),
        }

        self.view.show_status(&StatusMessage::for_outcome(outcome));
        if outcome.is_ok() {
            self.view.reset();
        }
    }
}

// endregion: --- Submitter

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(status: u16, body: &str) -> TransportResponse {
        TransportResponse { status, body: body.to_string() }
    }

    #[test]
    fn test_validate_order_reports_blank_before_email() {
        let blank = ContactSubmission::from_raw("", "nope", "hi");
        assert_eq!(validate(&blank), Err(ValidationError::MissingFields));

        let bad_email = ContactSubmission::from_raw("Alice", "foo@bar", "hi");
        assert_eq!(validate(&bad_email), Err(ValidationError::InvalidEmail));

        let good = ContactSubmission::from_raw("Alice", "a@b.com", "hi");
        assert_eq!(validate(&good), Ok(()));
    }

    #[test]
    fn test_byte_order_mark_inside_email_is_invalid() {
        let submission = ContactSubmission::from_raw("Alice", "a\u{FEFF}b@c.com", "hi");
        assert_eq!(validate(&submission), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_success_range() {
        assert!(reply(200, "").is_success());
        assert!(reply(204, "").is_success());
        assert!(!reply(199, "").is_success());
        assert!(!reply(300, "").is_success());
    }

    #[test]
    fn test_rejection_uses_server_message() {
        let outcome = interpret_response(reply(429, r#"{"message":"Rate limited"}"#));
        let err = outcome.unwrap_err();
        assert_eq!(err.to_string(), "Submission failed: Rate limited");
    }

    #[test]
    fn test_rejection_without_usable_message() {
        for body in [
            r#"{}"#,
            r#"{"message":""}"#,
            r#"{"message":null}"#,
            r#"{"message":false}"#,
            r#"{"message":0}"#,
            r#"[]"#,
        ] {
            let err = interpret_response(reply(500, body)).unwrap_err();
            assert_eq!(err.to_string(), "Submission failed: Unknown error", "body {body}");
        }
    }

    #[test]
    fn test_rejection_renders_truthy_non_string_message() {
        for (body, shown) in [
            (r#"{"message":42}"#, "Submission failed: 42"),
            (r#"{"message":true}"#, "Submission failed: true"),
            (r#"{"message":2.0}"#, "Submission failed: 2"),
            (r#"{"message":1.5}"#, "Submission failed: 1.5"),
            (r#"{"message":["a",null,3]}"#, "Submission failed: a,,3"),
            (r#"{"message":{"detail":"x"}}"#, "Submission failed: [object Object]"),
        ] {
            let err = interpret_response(reply(500, body)).unwrap_err();
            assert_eq!(err.to_string(), shown, "body {body}");
        }
    }

    #[test]
    fn test_unparsable_error_body_is_transport_failure() {
        for body in ["<html>Bad Gateway</html>", "", "null"] {
            let err = interpret_response(reply(502, body)).unwrap_err();
            assert!(matches!(err, SubmitError::Transport(_)), "body {body:?}");
            assert_eq!(err.to_string(), "Submission failed: Network or server error.");
        }
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(StatusMessage::for_outcome(&Ok(())).tone.color(), "green");
        let invalid = Err(SubmitError::from(ValidationError::InvalidEmail));
        let status = StatusMessage::for_outcome(&invalid);
        assert_eq!(status.text, "Please enter a valid email address.");
        assert_eq!(status.tone.color(), "red");
    }
}
