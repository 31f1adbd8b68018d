//! HTTP handlers for the Crop Advisor demo host

pub mod chat;
pub mod form;
pub mod health;
pub mod i18n;
pub mod recommendations;

pub use chat::*;
pub use form::*;
pub use health::*;
pub use i18n::*;
pub use recommendations::*;

use serde::Deserialize;
use shared::Language;

/// `?lang=<code>`; missing or unsupported codes mean English
#[derive(Debug, Default, Deserialize)]
pub struct LanguageQuery {
    pub lang: Option<String>,
}

impl LanguageQuery {
    pub fn language(&self) -> Language {
        self.lang
            .as_deref()
            .map(Language::resolve)
            .unwrap_or(Language::DEFAULT)
    }
}
