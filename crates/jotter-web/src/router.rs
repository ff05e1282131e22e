//! Axum router - maps all URL paths to handlers.

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::get,
    Router,
};
use jotter_config::Config;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    services::ServeDir,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing::warn;

use crate::state::{AppState, SharedState};
use crate::handlers::{
    notes::{create_note, delete_note, get_note, list_notes, log_notes_request, update_note},
    page::{not_found, notes_page},
    system::health,
};
use crate::sse::sse_handler;

/// Build and return the full Axum router.
pub fn build_router(state: AppState, config: &Config) -> Router {
    let shared: SharedState = Arc::new(state);

    let notes_api = Router::new()
        .route("/api/notes",      get(list_notes).post(create_note))
        .route("/api/notes/{id}", get(get_note).put(update_note).delete(delete_note))
        .route_layer(middleware::from_fn(log_notes_request));

    Router::new()
        // Pages
        .route("/",      get(notes_page))
        .route("/notes", get(notes_page))

        // SSE streaming
        .route("/api/events", get(sse_handler))

        // API endpoints
        .merge(notes_api)
        .route("/api/health", get(health))

        // Static files
        .nest_service("/static", ServeDir::new(&config.server.static_dir))
        .fallback(not_found)

        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors_layer(config)),
        )
        .with_state(shared)
}

/// CORS for the configured browser origins, with credentials.
///
/// A `*` entry allows any origin, without credentials.
fn cors_layer(config: &Config) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let origins = &config.cors.allowed_origins;
    if origins.iter().any(|origin| origin == "*") {
        warn!("Wildcard CORS origin configured, allowing any origin without credentials");
        return base.allow_origin(AllowOrigin::any());
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
}
