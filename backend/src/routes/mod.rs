//! Route definitions for the Crop Advisor demo host

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Languages and string tables
        .route("/languages", get(handlers::list_languages))
        .route("/translations/:section", get(handlers::get_translations))
        // Farm details form and recommendations
        .route("/form/sample", get(handlers::sample_form))
        .route("/recommendations", post(handlers::recommend_crops))
        // Chat assistant overlay (WebSocket)
        .route("/chat", get(handlers::chat_socket))
}
