//! Localized string tables
//!
//! Every table is a [`ResourceBundle`]: one record per translated language,
//! with the first entry acting as the default locale. A lookup for a language
//! without its own record returns the default record whole; records are never
//! merged field by field.

mod strings;

pub use strings::*;

use serde::Serialize;
use std::str::FromStr;

use crate::types::Language;

/// A static table of localized records keyed by language
#[derive(Debug)]
pub struct ResourceBundle<T: 'static> {
    entries: &'static [(Language, T)],
}

/// Result of a lookup, remembering which language actually served it
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Localized<S> {
    /// Language the caller asked for (unknown codes are already resolved)
    pub requested: Language,
    /// Language whose record was returned
    pub language: Language,
    pub strings: S,
}

impl<T: 'static> ResourceBundle<T> {
    /// Build a bundle; the first entry is the default locale.
    pub const fn new(entries: &'static [(Language, T)]) -> Self {
        assert!(!entries.is_empty(), "a resource bundle needs a default entry");
        Self { entries }
    }

    pub fn default_language(&self) -> Language {
        self.entries[0].0
    }

    /// Whether the bundle carries its own record for `language`
    pub fn has(&self, language: Language) -> bool {
        self.entries.iter().any(|(lang, _)| *lang == language)
    }

    /// Language whose record serves `language`
    pub fn resolve(&self, language: Language) -> Language {
        if self.has(language) {
            language
        } else {
            self.default_language()
        }
    }

    /// Record for `language`, or the default record
    pub fn get(&self, language: Language) -> &'static T {
        let entries = self.entries;
        let (_, value) = entries
            .iter()
            .find(|(lang, _)| *lang == language)
            .unwrap_or(&entries[0]);
        value
    }

    /// Lookup by a raw code; unknown codes are served by the default locale
    pub fn lookup(&self, code: &str) -> Localized<&'static T> {
        self.localize(Language::resolve(code))
    }

    pub fn localize(&self, language: Language) -> Localized<&'static T> {
        Localized {
            requested: language,
            language: self.resolve(language),
            strings: self.get(language),
        }
    }

    /// Languages with their own record, default first
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.entries.iter().map(|(lang, _)| *lang)
    }
}

/// Whether the UI has its own strings for `language`
pub fn is_translated(language: Language) -> bool {
    FORM.has(language)
}

// ============================================================================
// Sections
// ============================================================================

/// Groups of strings, one per screen or overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Landing,
    LanguageSelect,
    Form,
    Results,
    Chat,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Landing,
        Section::LanguageSelect,
        Section::Form,
        Section::Results,
        Section::Chat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Landing => "landing",
            Section::LanguageSelect => "language_select",
            Section::Form => "form",
            Section::Results => "results",
            Section::Chat => "chat",
        }
    }

    /// Localized strings of this section
    pub fn localize(&self, language: Language) -> Localized<SectionStrings> {
        fn wrap<T>(
            localized: Localized<&'static T>,
            into: fn(&'static T) -> SectionStrings,
        ) -> Localized<SectionStrings> {
            Localized {
                requested: localized.requested,
                language: localized.language,
                strings: into(localized.strings),
            }
        }

        match self {
            Section::Landing => wrap(LANDING.localize(language), SectionStrings::Landing),
            Section::LanguageSelect => wrap(
                LANGUAGE_SELECT.localize(language),
                SectionStrings::LanguageSelect,
            ),
            Section::Form => wrap(FORM.localize(language), SectionStrings::Form),
            Section::Results => wrap(RESULTS.localize(language), SectionStrings::Results),
            Section::Chat => wrap(CHAT.localize(language), SectionStrings::Chat),
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Returned when a section name is not one of [`Section::ALL`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown string section: {0}")]
pub struct UnknownSection(pub String);

/// Strings of any one section, serialized as the bare record
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum SectionStrings {
    Landing(&'static LandingStrings),
    LanguageSelect(&'static LanguageSelectStrings),
    Form(&'static FormStrings),
    Results(&'static ResultsStrings),
    Chat(&'static ChatStrings),
}
