//! Language list and string tables

use axum::{
    extract::{Path, Query},
    Json,
};
use shared::{language_options, Language, LanguageOption, Localized, Section, SectionStrings};

use super::LanguageQuery;
use crate::error::AppResult;

/// List the languages offered on the selection screen
pub async fn list_languages() -> Json<Vec<LanguageOption>> {
    Json(language_options())
}

/// Strings of one screen section in the requested language
///
/// Languages without their own strings are answered in English; the response
/// says which language actually served the request.
pub async fn get_translations(
    Path(section): Path<String>,
    Query(query): Query<LanguageQuery>,
) -> AppResult<Json<Localized<SectionStrings>>> {
    let section: Section = section.parse()?;
    let language: Language = query.language();
    let localized = section.localize(language);

    if localized.language != localized.requested {
        tracing::debug!(
            %section,
            requested = %localized.requested,
            served = %localized.language,
            "Serving fallback strings"
        );
    }

    Ok(Json(localized))
}
