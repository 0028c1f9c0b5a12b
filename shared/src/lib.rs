//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the browser front end (`site-web`)
//! and the submission API (`lib-web`). All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::contact`]**: Contact form submission and API reply DTOs
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::mask_email`]**: Hide the local part of an address in logs
//!
//! ## Wire Format
//!
//! - Field names are the lowercase Rust field names (`name`, `email`, `message`)
//! - Fields serialize in declaration order, so a submission always encodes as
//!   `{"name":...,"email":...,"message":...}`
//!
//! ## Usage in Frontend
//!
//! ```rust
//! use shared::dto::contact::ContactSubmission;
//!
//! let submission = ContactSubmission::from_raw(" Alice ", "a@b.com", "hi\n");
//! assert_eq!(
//!     serde_json::to_string(&submission).unwrap(),
//!     r#"{"name":"Alice","email":"a@b.com","message":"hi"}"#
//! );
//! ```
//!
//! ## Usage in Backend
//!
//! ```rust,ignore
//! use shared::dto::contact::ApiMessage;
//! use axum::Json;
//!
//! async fn ok() -> Json<ApiMessage> {
//!     Json(ApiMessage::new("Submission saved successfully"))
//! }
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
