//! # Validation Utilities
//!
//! Input validation helpers shared by the contact form and the submission API.
//!
//! Whitespace follows the browser's rules, which also count the byte order
//! mark (U+FEFF) as whitespace; see `shared::dto::contact` for the matching
//! trim.

use regex::Regex;
use std::sync::OnceLock;

/// One or more non-space non-`@` characters, `@`, the same, `.`, the same.
const EMAIL_PATTERN: &str = r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
}

/// Check an address against the contact form's email pattern.
///
/// The pattern is intentionally loose: `a@b.c` passes, while `foo@bar`,
/// `foo.com`, `@bar.com` and anything containing whitespace fail.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}
