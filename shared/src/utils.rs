//! # Shared Utility Functions
//!
//! Helpers for keeping contact data out of logs.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::mask_email;
//!
//! assert_eq!(mask_email("alice@example.com"), "a***@example.com");
//! ```

/// Hide the local part of an email address, keeping its first character.
///
/// Input without an `@` is masked entirely.
///
/// # Examples
///
/// ```rust
/// use shared::utils::mask_email;
///
/// assert_eq!(mask_email("bob@b.com"), "b***@b.com");
/// assert_eq!(mask_email("not-an-email"), "***");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("alice@example.com"), "a***@example.com");
        assert_eq!(mask_email("@example.com"), "***@example.com");
        assert_eq!(mask_email("plain"), "***");
    }
}
