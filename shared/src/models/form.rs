//! Farm details form

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::{Validate, ValidationErrors};

use crate::types::Language;
use crate::validation::{parse_number, validate_number};

/// Soil types offered by the form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Clay,
    Sandy,
    Loamy,
    Silt,
    Peaty,
    Chalky,
}

impl SoilType {
    pub const ALL: [SoilType; 6] = [
        SoilType::Clay,
        SoilType::Sandy,
        SoilType::Loamy,
        SoilType::Silt,
        SoilType::Peaty,
        SoilType::Chalky,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Clay => "clay",
            SoilType::Sandy => "sandy",
            SoilType::Loamy => "loamy",
            SoilType::Silt => "silt",
            SoilType::Peaty => "peaty",
            SoilType::Chalky => "chalky",
        }
    }

    /// Option label in the given language
    pub fn label(&self, language: Language) -> &'static str {
        let labels = &crate::i18n::FORM.get(language).soil_types;
        match self {
            SoilType::Clay => labels.clay,
            SoilType::Sandy => labels.sandy,
            SoilType::Loamy => labels.loamy,
            SoilType::Silt => labels.silt,
            SoilType::Peaty => labels.peaty,
            SoilType::Chalky => labels.chalky,
        }
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SoilType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SoilType::ALL
            .into_iter()
            .find(|soil| soil.as_str() == s.trim())
            .ok_or_else(|| FormError::UnknownSoilType(s.to_string()))
    }
}

/// Editable fields of the form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Location,
    Temperature,
    Rainfall,
    SoilType,
    SoilPh,
    FarmSize,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Location => "location",
            FormField::Temperature => "temperature",
            FormField::Rainfall => "rainfall",
            FormField::SoilType => "soil_type",
            FormField::SoilPh => "soil_ph",
            FormField::FarmSize => "farm_size",
        }
    }
}

impl FromStr for FormField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "location" => Ok(FormField::Location),
            "temperature" => Ok(FormField::Temperature),
            "rainfall" => Ok(FormField::Rainfall),
            "soil_type" | "soilType" => Ok(FormField::SoilType),
            "soil_ph" | "soilPh" => Ok(FormField::SoilPh),
            "farm_size" | "farmSize" => Ok(FormField::FarmSize),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

/// Raw form state, exactly as typed
///
/// Numeric fields stay strings until submission; the only checks are the ones
/// a browser would apply to required `number` inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct FormData {
    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,
    #[validate(custom = "validate_number")]
    pub temperature: String,
    #[validate(custom = "validate_number")]
    pub rainfall: String,
    /// Not required; the select starts empty
    pub soil_type: Option<SoilType>,
    #[validate(custom = "validate_number")]
    pub soil_ph: String,
    #[validate(custom = "validate_number")]
    pub farm_size: String,
    pub language: Language,
}

/// Values filled in by the "Enable Location (Demo)" button
pub mod sample {
    pub const LOCATION: &str = "Delhi";
    pub const TEMPERATURE: &str = "28";
    pub const RAINFALL: &str = "850";
    pub const SOIL_TYPE: super::SoilType = super::SoilType::Loamy;
    pub const SOIL_PH: &str = "6.8";
}

impl FormData {
    /// Empty form for the given language
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }

    /// Apply a single keystroke-level edit
    pub fn set(&mut self, field: FormField, value: &str) -> Result<(), FormError> {
        match field {
            FormField::Location => self.location = value.to_string(),
            FormField::Temperature => self.temperature = value.to_string(),
            FormField::Rainfall => self.rainfall = value.to_string(),
            FormField::SoilType => {
                self.soil_type = if value.trim().is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                }
            }
            FormField::SoilPh => self.soil_ph = value.to_string(),
            FormField::FarmSize => self.farm_size = value.to_string(),
        }
        Ok(())
    }

    /// Fill demo location data; farm size is left as typed
    pub fn fill_sample_location(&mut self) {
        self.location = sample::LOCATION.to_string();
        self.temperature = sample::TEMPERATURE.to_string();
        self.rainfall = sample::RAINFALL.to_string();
        self.soil_type = Some(sample::SOIL_TYPE);
        self.soil_ph = sample::SOIL_PH.to_string();
    }

    /// True when nothing has been entered yet
    pub fn is_blank(&self) -> bool {
        self.location.is_empty()
            && self.temperature.is_empty()
            && self.rainfall.is_empty()
            && self.soil_type.is_none()
            && self.soil_ph.is_empty()
            && self.farm_size.is_empty()
    }

    /// Validate and convert into [`FarmDetails`]
    pub fn submit(&self) -> Result<FarmDetails, FormError> {
        self.validate()?;

        Ok(FarmDetails {
            location: self.location.trim().to_string(),
            temperature_celsius: parse_decimal(FormField::Temperature, &self.temperature)?,
            rainfall_mm: parse_decimal(FormField::Rainfall, &self.rainfall)?,
            soil_type: self.soil_type,
            soil_ph: parse_decimal(FormField::SoilPh, &self.soil_ph)?,
            farm_size_acres: parse_decimal(FormField::FarmSize, &self.farm_size)?,
            language: self.language,
        })
    }
}

fn parse_decimal(field: FormField, value: &str) -> Result<Decimal, FormError> {
    let value = value.trim();
    if let Ok(exact) = Decimal::from_str(value).or_else(|_| Decimal::from_scientific(value)) {
        return Ok(exact);
    }

    let number = parse_number(value).ok_or_else(|| FormError::NotANumber {
        field: field.as_str(),
        value: value.to_string(),
    })?;
    Ok(saturate(number))
}

/// Nearest decimal to a finite double: too large saturates, too small is zero
fn saturate(number: f64) -> Decimal {
    Decimal::from_f64(number).unwrap_or(if number.abs() < 1.0 {
        Decimal::ZERO
    } else if number > 0.0 {
        Decimal::MAX
    } else {
        Decimal::MIN
    })
}

/// A submitted form
///
/// Readings are parsed but not range-checked; nothing downstream reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmDetails {
    pub location: String,
    pub temperature_celsius: Decimal,
    pub rainfall_mm: Decimal,
    pub soil_type: Option<SoilType>,
    pub soil_ph: Decimal,
    pub farm_size_acres: Decimal,
    pub language: Language,
}

/// Why a form could not be edited or submitted
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("form is incomplete: {0}")]
    Invalid(#[from] ValidationErrors),

    #[error("{field} is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("unknown soil type: {0}")]
    UnknownSoilType(String),

    #[error("unknown form field: {0}")]
    UnknownField(String),
}

impl FormError {
    /// Name of the first offending field, when there is one
    pub fn field(&self) -> Option<String> {
        match self {
            FormError::Invalid(errors) => {
                let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
                fields.sort_unstable_by_key(|name| field_order(name));
                fields.first().map(|name| name.to_string())
            }
            FormError::NotANumber { field, .. } => Some(field.to_string()),
            FormError::UnknownSoilType(_) => Some(FormField::SoilType.as_str().to_string()),
            FormError::UnknownField(name) => Some(name.clone()),
        }
    }
}

/// Position of a field on the form, so errors point at the topmost one
fn field_order(name: &str) -> usize {
    [
        FormField::Location,
        FormField::Temperature,
        FormField::Rainfall,
        FormField::SoilType,
        FormField::SoilPh,
        FormField::FarmSize,
    ]
    .iter()
    .position(|field| field.as_str() == name)
    .unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormData {
        FormData {
            location: "Nashik".to_string(),
            temperature: "31".to_string(),
            rainfall: "700".to_string(),
            soil_type: Some(SoilType::Clay),
            soil_ph: "7.2".to_string(),
            farm_size: "3".to_string(),
            language: Language::Marathi,
        }
    }

    #[test]
    fn test_new_form_is_blank() {
        let form = FormData::new(Language::Hindi);
        assert!(form.is_blank());
        assert_eq!(form.language, Language::Hindi);
    }

    #[test]
    fn test_submit_filled_form() {
        let details = filled().submit().unwrap();
        assert_eq!(details.location, "Nashik");
        assert_eq!(details.soil_ph, Decimal::new(72, 1));
        assert_eq!(details.language, Language::Marathi);
    }

    #[test]
    fn test_soil_type_is_optional() {
        let mut form = filled();
        form.soil_type = None;
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_missing_location_blocks_submit() {
        let mut form = filled();
        form.location.clear();
        let err = form.submit().unwrap_err();
        assert_eq!(err.field().as_deref(), Some("location"));
    }

    #[test]
    fn test_empty_number_blocks_submit() {
        let mut form = filled();
        form.farm_size.clear();
        let err = form.submit().unwrap_err();
        assert_eq!(err.field().as_deref(), Some("farm_size"));
    }

    #[test]
    fn test_topmost_missing_field_is_reported() {
        let form = FormData::new(Language::English);
        let err = form.submit().unwrap_err();
        assert_eq!(err.field().as_deref(), Some("location"));
    }

    #[test]
    fn test_non_numeric_input_blocks_submit() {
        let mut form = filled();
        form.rainfall = "lots".to_string();
        let err = form.submit().unwrap_err();
        assert_eq!(err.field().as_deref(), Some("rainfall"));
    }

    #[test]
    fn test_negative_and_out_of_range_values_are_accepted() {
        let mut form = filled();
        form.temperature = "-12".to_string();
        form.soil_ph = "19".to_string();
        let details = form.submit().unwrap();
        assert_eq!(details.temperature_celsius, Decimal::from(-12));
    }

    #[test]
    fn test_extreme_magnitudes_saturate() {
        let mut form = filled();
        form.farm_size = "1e30".to_string();
        form.rainfall = "100000000000000000000000000000".to_string();
        form.soil_ph = "1e-40".to_string();
        form.temperature = "-1e300".to_string();
        let details = form.submit().unwrap();
        assert_eq!(details.farm_size_acres, Decimal::MAX);
        assert_eq!(details.rainfall_mm, Decimal::MAX);
        assert!(details.soil_ph >= Decimal::ZERO);
        assert!(details.soil_ph < Decimal::new(1, 20));
        assert_eq!(details.temperature_celsius, Decimal::MIN);
    }

    #[test]
    fn test_set_fields() {
        let mut form = FormData::new(Language::English);
        form.set(FormField::Location, "Pune").unwrap();
        form.set(FormField::SoilType, "sandy").unwrap();
        assert_eq!(form.location, "Pune");
        assert_eq!(form.soil_type, Some(SoilType::Sandy));

        form.set(FormField::SoilType, "").unwrap();
        assert_eq!(form.soil_type, None);

        assert!(form.set(FormField::SoilType, "lava").is_err());
    }

    #[test]
    fn test_fill_sample_location_keeps_farm_size() {
        let mut form = FormData::new(Language::English);
        form.farm_size = "5".to_string();
        form.fill_sample_location();
        assert_eq!(form.location, "Delhi");
        assert_eq!(form.temperature, "28");
        assert_eq!(form.rainfall, "850");
        assert_eq!(form.soil_type, Some(SoilType::Loamy));
        assert_eq!(form.soil_ph, "6.8");
        assert_eq!(form.farm_size, "5");
    }

    #[test]
    fn test_field_names_accept_camel_case() {
        assert_eq!("soilPh".parse::<FormField>().unwrap(), FormField::SoilPh);
        assert_eq!("farm_size".parse::<FormField>().unwrap(), FormField::FarmSize);
        assert!("crop".parse::<FormField>().is_err());
    }

    #[test]
    fn test_soil_labels_are_localized() {
        assert_eq!(SoilType::Loamy.label(Language::English), "🌱 Loamy (Best)");
        assert_eq!(SoilType::Loamy.label(Language::Hindi), "🌱 दोमट मिट्टी (सबसे अच्छी)");
        assert_eq!(SoilType::Loamy.label(Language::Tamil), "🌱 Loamy (Best)");
    }
}
