//! # Contact Data Transfer Objects
//!
//! Request and response structures for the contact form endpoint.

use serde::{Deserialize, Serialize};

/// Body of `POST /submit`.
///
/// Values are trimmed at construction time; the struct itself does not
/// validate, see `lib_client::submission::validate` for the form rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Build a submission from raw form input, trimming every field.
    ///
    /// Byte order marks are trimmed along with whitespace, as browsers do.
    pub fn from_raw(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: trim_input(name),
            email: trim_input(email),
            message: trim_input(message),
        }
    }

    /// True when any field is empty.
    pub fn has_blank_field(&self) -> bool {
        self.name.is_empty() || self.email.is_empty() || self.message.is_empty()
    }
}

fn trim_input(value: &str) -> String {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .to_string()
}

/// Reply body used by the submission API for success and error alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_trims_every_field() {
        let submission = ContactSubmission::from_raw("  Alice\t", "\na@b.com ", " hi ");
        assert_eq!(submission.name, "Alice");
        assert_eq!(submission.email, "a@b.com");
        assert_eq!(submission.message, "hi");
        assert!(!submission.has_blank_field());
    }

    #[test]
    fn test_from_raw_trims_byte_order_marks() {
        let submission =
            ContactSubmission::from_raw("\u{FEFF}Alice ", "a@b.com\u{FEFF}", "\u{FEFF}");
        assert_eq!(submission.name, "Alice");
        assert_eq!(submission.email, "a@b.com");
        assert!(submission.has_blank_field());
    }

    #[test]
    fn test_whitespace_only_field_is_blank() {
        let submission = ContactSubmission::from_raw("Alice", "a@b.com", "   ");
        assert!(submission.has_blank_field());
    }

    #[test]
    fn test_wire_order_is_name_email_message() {
        let submission = ContactSubmission::from_raw("Alice", "a@b.com", "hi");
        let json = serde_json::to_string(&submission).unwrap();
        assert_eq!(json, r#"{"name":"Alice","email":"a@b.com","message":"hi"}"#);
    }

    #[test]
    fn test_api_message_parses_server_reply() {
        let reply: ApiMessage = serde_json::from_str(r#"{"message":"Rate limited"}"#).unwrap();
        assert_eq!(reply, ApiMessage::new("Rate limited"));
    }
}
