//! Page components

pub mod contact_form;
pub mod starfield;
