//! # Health Handler

/// Liveness probe.
///
/// **Route**: `GET /health`
pub async fn health() -> &'static str {
    "OK"
}
