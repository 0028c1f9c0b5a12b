//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged between the contact form and the submission API.
//!
//! ## Module Organization
//!
//! - [`contact`] - Contact submission body and `{"message": ...}` replies
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /submit
//! Content-Type: application/json
//!
//! {
//!   "name": "Alice",
//!   "email": "a@b.com",
//!   "message": "hi"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "message": "Submission saved successfully"
//! }
//! ```

pub mod contact;

pub use contact::*;
