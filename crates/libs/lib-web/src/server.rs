//! # Server Setup
//!
//! Tracing initialization, route registration, and HTTP server startup.

// region: --- Imports
use crate::handlers;
use crate::middleware::{log_requests, stamp_req, RequestStamp};
use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use lib_core::{Config, SubmissionStore};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
// endregion: --- Imports

// region: --- AppState
/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: SubmissionStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = SubmissionStore::new(config.submissions_dir.clone());
        Self { config, store }
    }
}

impl axum::extract::FromRef<AppState> for SubmissionStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl axum::extract::FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
// endregion: --- AppState

// region: --- Tracing
/// Install the global tracing subscriber.
///
/// `log_level` is an `EnvFilter` directive; anything unparsable falls back to
/// `info`. A second call keeps the first subscriber.
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        warn!("Tracing subscriber already installed");
    }
}
// endregion: --- Tracing

// region: --- Server Setup
/// Initialize and start the HTTP server.
///
/// # Errors
///
/// This function will return an error if:
/// - The submissions directory cannot be created
/// - Server binding fails
pub async fn start_server(config: Config) -> anyhow::Result<()> {
    init_tracing(&config.log_level);

    info!(" CONTACT API STARTING");
    info!(" Log level: {}", config.log_level);
    info!(" Submissions directory: {}", config.submissions_dir.display());

    let state = AppState::new(config.clone());
    state.store.init().await?;

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    info!(" SERVER READY: http://{}", config.bind_address);
    info!("   POST /submit");
    info!("   GET  /health");
    match &config.site_dir {
        Some(dir) => info!("   GET  /*  (static files from {})", dir.display()),
        None => info!("   SITE_DIR not set, static files disabled"),
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(" Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!(" Shutdown requested");
}

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    // the form is posted cross-origin from wherever the site is hosted
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let site_dir = state.config.site_dir.clone();

    let router = Router::new()
        .route("/submit", post(handlers::submit::submit))
        .route("/health", get(handlers::health::health));

    let router = match site_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router.fallback(|| async { (StatusCode::NOT_FOUND, "Route not found") }),
    };

    router
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .extensions()
                    .get::<RequestStamp>()
                    .map(|s| s.id.clone())
                    .unwrap_or_else(|| "unknown".to_string());
                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(axum::middleware::from_fn(log_requests))
        // outermost, so the stamp exists for everything below
        .layer(axum::middleware::from_fn(stamp_req))
}
// endregion: --- Server Setup
