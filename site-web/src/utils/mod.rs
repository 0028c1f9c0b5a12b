//! Utilities

pub mod constants;
pub mod dom;
