//! Application constants

// Element ids expected in index.html
pub const FORM_ID: &str = "userForm";
pub const NAME_ID: &str = "name";
pub const EMAIL_ID: &str = "email";
pub const MESSAGE_ID: &str = "message";
pub const STATUS_ID: &str = "formStatus";

pub const SUBMIT_SELECTOR: &str = "button[type=submit], input[type=submit]";

/// Build-time endpoint override.
pub const BUILD_CONTACT_ENDPOINT: Option<&str> = option_env!("CONTACT_ENDPOINT");
