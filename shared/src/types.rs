//! Languages offered by Crop Advisor

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Languages offered on the language selection screen.
///
/// Only English and Hindi carry translations; the others are selectable and
/// render the English strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Tamil,
    Bengali,
    Marathi,
    Telugu,
}

impl Language {
    /// Every selectable language, in the order the selection screen lists them
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Hindi,
        Language::Tamil,
        Language::Bengali,
        Language::Marathi,
        Language::Telugu,
    ];

    /// Language used whenever a code is unknown or has no translation
    pub const DEFAULT: Language = Language::English;

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Tamil => "tamil",
            Language::Bengali => "bengali",
            Language::Marathi => "marathi",
            Language::Telugu => "telugu",
        }
    }

    /// English display name
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Tamil => "Tamil",
            Language::Bengali => "Bengali",
            Language::Marathi => "Marathi",
            Language::Telugu => "Telugu",
        }
    }

    /// Name written in the language itself
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी",
            Language::Tamil => "தமிழ்",
            Language::Bengali => "বাংলা",
            Language::Marathi => "मराठी",
            Language::Telugu => "తెలుగు",
        }
    }

    /// Parse a language code, `None` when the code is not one we offer
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }

    /// Parse a language code, falling back to [`Language::DEFAULT`]
    pub fn resolve(code: &str) -> Self {
        Self::from_code(code).unwrap_or(Self::DEFAULT)
    }

    /// The quick toggle flips English to Hindi and everything else to English
    pub fn toggled(&self) -> Self {
        match self {
            Language::English => Language::Hindi,
            _ => Language::English,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

/// Incoming codes are matched leniently; unknown ones mean English
impl From<String> for Language {
    fn from(code: String) -> Self {
        Self::resolve(&code)
    }
}

/// Returned by strict parsing of a language code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language code: {0}")]
pub struct UnknownLanguage(pub String);

/// Entry of the language selection list
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: &'static str,
    pub name: &'static str,
    pub native: &'static str,
    /// Whether the UI has its own strings for this language
    pub translated: bool,
}

/// Languages as listed on the selection screen
pub fn language_options() -> Vec<LanguageOption> {
    Language::ALL
        .into_iter()
        .map(|lang| LanguageOption {
            code: lang.code(),
            name: lang.name(),
            native: lang.native_name(),
            translated: crate::i18n::is_translated(lang),
        })
        .collect()
}
