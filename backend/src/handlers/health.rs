//! Health check handlers

use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::Language;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub languages: usize,
    pub timestamp: DateTime<Utc>,
}

/// Health check endpoint handler
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        languages: Language::ALL.len(),
        timestamp: Utc::now(),
    })
}
