use std::path::Path;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api::controller::home::HomeController;
use crate::app_state::AppState;

/// Build the main application router
pub fn app_router(static_dir: &Path) -> Router<AppState> {
    Router::new()
        // Homepage
        .route("/", get(HomeController::index))
        // Health check
        .route("/health", get(HomeController::health))
        // Static assets, served verbatim
        .nest_service("/static", ServeDir::new(static_dir))
        // Fallback handler for 404
        .fallback(handler_404)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}

// Handler for 404 Not Found
async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
