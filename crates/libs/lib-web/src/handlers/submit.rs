//! # Submit Handler
//!
//! Receives the contact form.
//!
//! ## Replies
//!
//! | Case | Status | `message` |
//! |---|---|---|
//! | Body is not a JSON object with string fields | 400 | `Invalid request body` |
//! | name, email or message missing or blank | 400 | `Missing required fields` |
//! | email does not match the form's pattern | 400 | `Invalid email address` |
//! | Writing the record failed | 500 | `Failed to save submission` |
//! | Stored | 200 | `Submission saved successfully` |

use axum::{body::Bytes, extract::State, Json};
use lib_core::{AppError, Result, StoredSubmission, SubmissionStore};
use lib_utils::{time::now_utc, validation::is_valid_email};
use serde::Deserialize;
use shared::dto::contact::{ApiMessage, ContactSubmission};
use shared::utils::mask_email;
use tracing::{debug, info, instrument};

pub const MSG_SAVED: &str = "Submission saved successfully";
pub const MSG_INVALID_BODY: &str = "Invalid request body";
pub const MSG_MISSING_FIELDS: &str = "Missing required fields";
pub const MSG_INVALID_EMAIL: &str = "Invalid email address";

/// Raw body; every field may be absent.
#[derive(Debug, Deserialize)]
struct SubmitPayload {
    name: Option<String>,
    email: Option<String>,
    message: Option<String>,
}

impl SubmitPayload {
    fn into_submission(self) -> Result<ContactSubmission> {
        let submission = ContactSubmission::from_raw(
            self.name.as_deref().unwrap_or_default(),
            self.email.as_deref().unwrap_or_default(),
            self.message.as_deref().unwrap_or_default(),
        );
        if submission.has_blank_field() {
            return Err(AppError::InvalidInput(MSG_MISSING_FIELDS.to_string()));
        }
        if !is_valid_email(&submission.email) {
            return Err(AppError::InvalidInput(MSG_INVALID_EMAIL.to_string()));
        }
        Ok(submission)
    }
}

/// Store a contact submission.
///
/// **Route**: `POST /submit`
///
/// The body is parsed by hand rather than with the `Json` extractor so that a
/// malformed or mistyped body gets the same `{"message": ...}` reply as every
/// other error.
#[instrument(skip_all)]
pub async fn submit(State(store): State<SubmissionStore>, body: Bytes) -> Result<Json<ApiMessage>> {
    let payload: SubmitPayload = serde_json::from_slice(&body).map_err(|e| {
        debug!("Rejecting body ({} bytes): {}", body.len(), e);
        AppError::InvalidInput(MSG_INVALID_BODY.to_string())
    })?;

    let submission = payload.into_submission()?;
    let record = StoredSubmission::new(submission, now_utc());
    let path = store.save(&record).await?;

    info!(
        email = %mask_email(&record.email),
        message_chars = record.message.chars().count(),
        file = %path.display(),
        "Submission saved"
    );

    Ok(Json(ApiMessage::new(MSG_SAVED)))
}
