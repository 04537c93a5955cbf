use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{MediaService, TranscriptFetcher};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{health_handler, webhook_handler};
use crate::presentation::state::AppState;

/// Assembles the router. `callback_path` is derived from the configured
/// callback URL so the served route matches what was registered remotely.
pub fn create_router<M, F>(state: AppState<M, F>, callback_path: &str) -> Router
where
    M: MediaService + 'static,
    F: TranscriptFetcher + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route(callback_path, post(webhook_handler::<M, F>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
