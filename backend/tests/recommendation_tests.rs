//! Crop recommendation tests
//!
//! Property-based and unit tests for:
//! - Property 1: Recommendations Ignore Farm Readings
//! - Property 2: Form Submission Requires Every Reading

use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::{
    get_recommendations, recommendations_in, FormData, FormError, Language, SoilType,
    RECOMMENDATION_COUNT,
};
use std::str::FromStr;

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Generate numeric strings the way a `number` input accepts them
fn reading_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (-60i32..=60).prop_map(|n| n.to_string()),
        (0u32..5000, 0u32..100).prop_map(|(whole, frac)| format!("{}.{}", whole, frac)),
        Just("1e3".to_string()),
        Just("-0.5".to_string()),
        (-320i32..=308).prop_map(|exp| format!("1e{}", exp)),
        (1u32..10, 25usize..40).prop_map(|(lead, zeros)| format!("{}{}", lead, "0".repeat(zeros))),
        Just("1e30".to_string()),
        Just("1e-40".to_string()),
    ]
}

fn soil_strategy() -> impl Strategy<Value = Option<SoilType>> {
    prop_oneof![
        Just(None),
        prop::sample::select(SoilType::ALL.to_vec()).prop_map(Some),
    ]
}

fn language_strategy() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

prop_compose! {
    fn complete_form_strategy()(
        location in "[A-Za-z][A-Za-z ]{0,20}",
        temperature in reading_strategy(),
        rainfall in reading_strategy(),
        soil_type in soil_strategy(),
        soil_ph in reading_strategy(),
        farm_size in reading_strategy(),
        language in language_strategy(),
    ) -> FormData {
        FormData {
            location,
            temperature,
            rainfall,
            soil_type,
            soil_ph,
            farm_size,
            language,
        }
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    /// Property 1: Recommendations Ignore Farm Readings
    /// Any complete form yields exactly the three catalog crops for its language.
    #[test]
    fn test_recommendations_depend_only_on_language(form in complete_form_strategy()) {
        let details = form.submit().unwrap();
        let crops = get_recommendations(&details);

        prop_assert_eq!(crops.len(), RECOMMENDATION_COUNT);
        prop_assert_eq!(crops, recommendations_in(form.language));
    }

    /// Property 2: Form Submission Requires Every Reading
    /// Blanking any one numeric reading blocks submission and names that field.
    #[test]
    fn test_blank_reading_blocks_submission(
        form in complete_form_strategy(),
        blank in 0usize..4,
    ) {
        let mut form = form;
        let field = match blank {
            0 => { form.temperature.clear(); "temperature" }
            1 => { form.rainfall.clear(); "rainfall" }
            2 => { form.soil_ph.clear(); "soil_ph" }
            _ => { form.farm_size.clear(); "farm_size" }
        };

        let err = form.submit().unwrap_err();
        let err_field = err.field();
        prop_assert_eq!(err_field.as_deref(), Some(field));
    }

    /// Only Hindi has its own catalog; every other language gets the English one
    #[test]
    fn test_untranslated_language_gets_english_crops(language in language_strategy()) {
        let same_as_english = recommendations_in(language) == recommendations_in(Language::English);
        prop_assert_eq!(same_as_english, language != Language::Hindi);
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn test_english_catalog_order() {
    let names: Vec<&str> = recommendations_in(Language::English)
        .iter()
        .map(|crop| crop.name)
        .collect();
    assert_eq!(names, vec!["Rice (Basmati)", "Wheat", "Sugarcane"]);
}

#[test]
fn test_hindi_catalog_order() {
    let names: Vec<&str> = recommendations_in(Language::Hindi)
        .iter()
        .map(|crop| crop.name)
        .collect();
    assert_eq!(names, vec!["चावल (बासमती)", "गेहूं", "गन्ना"]);
}

#[test]
fn test_extreme_readings_are_accepted() {
    let mut form = FormData::new(Language::English);
    form.location = "Jaisalmer".to_string();
    form.temperature = "-40".to_string();
    form.rainfall = "0".to_string();
    form.soil_ph = "14".to_string();
    form.farm_size = "0.25".to_string();

    let details = form.submit().unwrap();
    assert_eq!(details.temperature_celsius, Decimal::from_str("-40").unwrap());
    assert_eq!(details.farm_size_acres, Decimal::from_str("0.25").unwrap());
    assert_eq!(get_recommendations(&details).len(), RECOMMENDATION_COUNT);
}

#[test]
fn test_out_of_range_magnitudes_saturate() {
    let mut form = FormData::new(Language::Hindi);
    form.location = "Leh".to_string();
    form.temperature = "-1e300".to_string();
    form.rainfall = "100000000000000000000000000000".to_string();
    form.soil_ph = "1e-40".to_string();
    form.farm_size = "1e30".to_string();

    let details = form.submit().unwrap();
    assert_eq!(details.temperature_celsius, Decimal::MIN);
    assert_eq!(details.rainfall_mm, Decimal::MAX);
    assert!(details.soil_ph < Decimal::new(1, 20));
    assert_eq!(details.farm_size_acres, Decimal::MAX);
    assert_eq!(get_recommendations(&details), recommendations_in(Language::Hindi));
}

#[test]
fn test_non_numeric_reading_is_rejected() {
    let mut form = FormData::new(Language::English);
    form.fill_sample_location();
    form.farm_size = "two".to_string();

    let err = form.submit().unwrap_err();
    assert!(matches!(err, FormError::Invalid(_)));
    assert_eq!(err.field().as_deref(), Some("farm_size"));
}
