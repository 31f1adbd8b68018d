//! Crop recommendation handler

use axum::Json;
use serde::Serialize;
use shared::{get_recommendations, Crop, FormData, Language, RECOMMENDATION_COUNT};

use crate::error::AppResult;

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub language: Language,
    pub recommendations: &'static [Crop; RECOMMENDATION_COUNT],
}

/// Submit the farm details form and get three crop suggestions
pub async fn recommend_crops(Json(form): Json<FormData>) -> AppResult<Json<RecommendationsResponse>> {
    let details = form.submit()?;

    tracing::info!(
        location = %details.location,
        language = %details.language,
        "Recommending crops"
    );

    Ok(Json(RecommendationsResponse {
        language: details.language,
        recommendations: get_recommendations(&details),
    }))
}
