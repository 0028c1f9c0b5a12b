//! # Web Library
//!
//! HTTP handlers, middleware and server start-up for the contact API.
//!
//! ## Endpoints
//!
//! ```bash
//! # Submit the contact form
//! curl -X POST http://127.0.0.1:3001/submit \
//!   -H 'Content-Type: application/json' \
//!   -d '{"name":"Alice","email":"a@b.com","message":"hi"}'
//! # {"message":"Submission saved successfully"}
//!
//! # Liveness
//! curl http://127.0.0.1:3001/health
//! ```
//!
//! When `SITE_DIR` is set, every other path is served from that directory.

pub mod handlers;
pub mod middleware;
pub mod server;

pub use server::{create_router, init_tracing, start_server, AppState};
