//! # Endpoint Configuration
//!
//! The contact form posts to a fixed URL unless the page or the build says
//! otherwise. Resolution order:
//!
//! 1. `<meta name="contact-endpoint" content="...">` in the page
//! 2. `CONTACT_ENDPOINT` at compile time
//! 3. [`DEFAULT_CONTACT_ENDPOINT`]
//!
//! Blank values are skipped.

/// Production endpoint the form was deployed against.
pub const DEFAULT_CONTACT_ENDPOINT: &str =
    "https://s9bzfqke59.execute-api.ap-south-1.amazonaws.com/submit";

/// `name` of the meta tag that overrides the endpoint.
pub const ENDPOINT_META_NAME: &str = "contact-endpoint";

/// Pick the endpoint from the page override, the build override, or the default.
pub fn resolve_endpoint(page: Option<&str>, build: Option<&str>) -> String {
    [page, build]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|candidate| !candidate.is_empty())
        .unwrap_or(DEFAULT_CONTACT_ENDPOINT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_override_wins() {
        let endpoint =
            resolve_endpoint(Some("http://127.0.0.1:3001/submit"), Some("https://build/submit"));
        assert_eq!(endpoint, "http://127.0.0.1:3001/submit");
    }

    #[test]
    fn test_blank_page_value_falls_through_to_build() {
        let endpoint = resolve_endpoint(Some("   "), Some(" https://build/submit "));
        assert_eq!(endpoint, "https://build/submit");
    }

    #[test]
    fn test_default_when_nothing_set() {
        assert_eq!(resolve_endpoint(None, None), DEFAULT_CONTACT_ENDPOINT);
        assert_eq!(resolve_endpoint(Some(""), Some("")), DEFAULT_CONTACT_ENDPOINT);
    }
}
