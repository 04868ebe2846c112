//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use super::handlers;
use super::state::AppState;

/// Maximum accepted request body size.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Build the CORS layer for an explicit origin list.
///
/// Credentials are allowed, which rules out wildcard methods and headers,
/// so both are mirrored from the preflight request instead. A literal `*`
/// origin cannot be combined with credentials and is skipped.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| {
            if origin == "*" {
                warn!("ignoring wildcard CORS origin; list origins explicitly");
                return None;
            }
            match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(%origin, "ignoring invalid CORS origin");
                    None
                }
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        // Startups and their content
        .route(
            "/api/startups",
            get(handlers::list_startups).post(handlers::create_startup),
        )
        .route("/api/startups/{startup_id}", get(handlers::get_startup))
        .route(
            "/api/startups/{startup_id}/content",
            get(handlers::list_content).post(handlers::add_content),
        )
        .route(
            "/api/startups/{startup_id}/content/{content_id}",
            delete(handlers::delete_content),
        )
        .route(
            "/api/startups/{startup_id}/analyze",
            post(handlers::analyze_startup),
        )
        // Investors
        .route(
            "/api/investors",
            get(handlers::list_investors).post(handlers::create_investor),
        )
        .route(
            "/api/investors/{investor_id}",
            get(handlers::get_investor)
                .put(handlers::update_investor)
                .delete(handlers::delete_investor),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}
