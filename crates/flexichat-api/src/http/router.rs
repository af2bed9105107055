//! Axum router configuration with middleware.
//!
//! All routes are under `/api/`.
//! Middleware: CORS (permissive), request tracing.

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::chat;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/", get(chat::index))
        .route("/chat", post(chat::send_message))
        .route("/chat/history", get(chat::get_history))
        .route("/chat/clear", delete(chat::clear_chat));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
