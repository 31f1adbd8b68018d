//! Farm details form helpers

use axum::{extract::Query, Json};
use shared::FormData;

use super::LanguageQuery;

/// A form prefilled the way "Enable Location (Demo)" fills it
pub async fn sample_form(Query(query): Query<LanguageQuery>) -> Json<FormData> {
    let mut form = FormData::new(query.language());
    form.fill_sample_location();
    Json(form)
}
