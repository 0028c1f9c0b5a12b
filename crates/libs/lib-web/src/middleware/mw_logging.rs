//! # Request/Response Logging Middleware
//!
//! Logs method, path, client address hints and the outcome of every request,
//! correlated by the request ID from [`super::mw_req_stamp`].
//!
//! Bodies are never logged: every body this API receives is personal data.

use super::mw_req_stamp::RequestStamp;
use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};
use tracing::{error, info, warn};

/// Request/response logging middleware.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let (request_id, received) = req
        .extensions()
        .get::<RequestStamp>()
        .map(|s| (s.id.clone(), s.received))
        .unwrap_or_else(|| ("unknown".to_string(), std::time::Instant::now()));

    let origin = req
        .headers()
        .get("origin")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    let client_ip = req
        .headers()
        .get("x-forwarded-for")
        .or_else(|| req.headers().get("x-real-ip"))
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        origin = ?origin,
        client_ip = ?client_ip,
        "[REQUEST] {} {}",
        method,
        path
    );

    let response = next.run(req).await;

    let duration_ms = received.elapsed().as_millis() as u64;
    let status = response.status();

    if status.is_server_error() {
        error!(
            request_id = %request_id,
            status = status.as_u16(),
            duration_ms,
            "[RESPONSE] {} {} -> {} ({}ms) [SERVER ERROR]",
            method,
            path,
            status.as_u16(),
            duration_ms
        );
    } else if status.is_client_error() {
        warn!(
            request_id = %request_id,
            status = status.as_u16(),
            duration_ms,
            "[RESPONSE] {} {} -> {} ({}ms) [CLIENT ERROR]",
            method,
            path,
            status.as_u16(),
            duration_ms
        );
    } else {
        info!(
            request_id = %request_id,
            status = status.as_u16(),
            duration_ms,
            "[RESPONSE] {} {} -> {} ({}ms)",
            method,
            path,
            status.as_u16(),
            duration_ms
        );
    }

    response
}
