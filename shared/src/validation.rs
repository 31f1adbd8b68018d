//! Validation utilities for Crop Advisor
//!
//! Mirrors what a browser does for required `number` inputs: a value must be
//! present and parse as a number. Ranges are never checked.

use validator::ValidationError;

// ============================================================================
// Form Validations
// ============================================================================

/// Required numeric input: non-empty and numeric
pub fn validate_number(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("this field is required".into());
        return Err(err);
    }
    if !is_number(value) {
        let mut err = ValidationError::new("number");
        err.message = Some("enter a number".into());
        return Err(err);
    }
    Ok(())
}

/// Whether `value` is something a `number` input would accept
pub fn is_number(value: &str) -> bool {
    parse_number(value).is_some()
}

/// Parse a number the way a `number` input does; any finite double is valid
pub fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

// ============================================================================
// Chat Validations
// ============================================================================

/// Chat input that would actually be sent
pub fn is_sendable_message(text: &str) -> bool {
    !text.trim().is_empty()
}
