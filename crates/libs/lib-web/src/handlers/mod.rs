//! # HTTP Request Handlers
//!
//! - **[`submit`]**: `POST /submit` - Validate and store a contact submission
//! - **[`health`]**: `GET /health` - Liveness probe
//!
//! ## Error Handling
//!
//! Handlers return `lib_core::Result<T>`; [`lib_core::AppError`] renders as
//! `{"message": ..., "code": ...}` with the matching status code, which is the
//! shape the contact form reads.

pub mod health;
pub mod submit;
