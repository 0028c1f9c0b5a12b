use chrono::{DateTime, Utc};
use lib_utils::time::format_file_stamp;
use serde::{Deserialize, Serialize};
use shared::dto::contact::ContactSubmission;

/// Longest email part of a file name, in bytes. Keeps the whole name well
/// under the usual 255-byte file name limit.
pub const MAX_EMAIL_IN_FILE_NAME: usize = 128;

/// A submission as written to disk.
///
/// `timestamp` is the receive time in file-stamp form
/// (`2024-03-01T12-30-05-123456Z`) and also prefixes the file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: String,
}

impl StoredSubmission {
    /// Stamp a validated submission with its receive time.
    pub fn new(submission: ContactSubmission, received_at: DateTime<Utc>) -> Self {
        Self {
            name: submission.name,
            email: submission.email,
            message: submission.message,
            timestamp: format_file_stamp(received_at),
        }
    }

    /// File name for this record: `<timestamp>_<email>.json`.
    ///
    /// Characters outside `[A-Za-z0-9@._+-]` in the email become `_`, so the
    /// name never leaves the submissions directory. The email part is cut to
    /// [`MAX_EMAIL_IN_FILE_NAME`] bytes; the record itself keeps the full
    /// address.
    pub fn file_name(&self) -> String {
        // every kept or substituted char is ASCII, so one char is one byte
        let safe_email: String = self
            .email
            .chars()
            .take(MAX_EMAIL_IN_FILE_NAME)
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '@' | '.' | '_' | '+' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("{}_{}.json", self.timestamp, safe_email)
    }
}
