//! # Request Stamping Middleware
//!
//! Gives every request an ID and a receive time, and echoes the ID back in the
//! `X-Request-ID` response header.
//!
//! An `X-Request-ID` set by a proxy in front of the API is kept when it looks
//! sane (non-empty, at most 128 visible ASCII characters); otherwise a UUID v4
//! is generated.
//!
//! Handlers can read the stamp via `Extension<RequestStamp>`:
//!
//! ```rust,ignore
//! use axum::extract::Extension;
//! use lib_web::middleware::RequestStamp;
//!
//! async fn handler(Extension(stamp): Extension<RequestStamp>) -> String {
//!     format!("Request ID: {}", stamp.id)
//! }
//! ```

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_FORWARDED_ID_LEN: usize = 128;

/// Request metadata for tracing and debugging.
#[derive(Clone, Debug)]
pub struct RequestStamp {
    /// Unique request identifier
    pub id: String,
    /// When the request entered the stack
    pub received: Instant,
}

impl RequestStamp {
    fn from_request(req: &Request) -> Self {
        let forwarded = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|id| is_usable_id(id))
            .map(str::to_string);

        Self {
            id: forwarded.unwrap_or_else(|| Uuid::new_v4().to_string()),
            received: Instant::now(),
        }
    }
}

fn is_usable_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_FORWARDED_ID_LEN
        && id.bytes().all(|b| b.is_ascii_graphic())
}

/// Request stamping middleware.
pub async fn stamp_req(mut req: Request, next: Next) -> Response {
    let stamp = RequestStamp::from_request(&req);
    req.extensions_mut().insert(stamp.clone());

    let mut res = next.run(req).await;

    if let Ok(header_value) = HeaderValue::from_str(&stamp.id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, header_value);
    }

    res
}
