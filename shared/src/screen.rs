//! Screen flow
//!
//! The app shows exactly one screen at a time. The current screen is a single
//! enum value, so two screens can never be active together, and rendering is
//! an exhaustive match over it.
//!
//! ```text
//! Landing --get_started--> LanguageSelect --select_language--> Form
//!    ^                                                          |  ^
//!    |                                                   submit |  | back_to_form
//!    +------------------------ back_to_home ---------------- Results
//! ```

use serde::Serialize;

use crate::i18n::{
    FormStrings, LandingStrings, LanguageSelectStrings, ResultsStrings, FORM, LANDING,
    LANGUAGE_SELECT, RESULTS,
};
use crate::models::{Crop, CropBadges, FarmDetails, FormData, FormError, FormField};
use crate::recommendations::{recommendations_in, RECOMMENDATION_COUNT};
use crate::types::{language_options, Language, LanguageOption};

/// The screen currently shown
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Landing,
    LanguageSelect,
    /// Form being filled in; dropped when the screen is left
    Form(FormData),
    Results {
        details: FarmDetails,
        crops: &'static [Crop; RECOMMENDATION_COUNT],
    },
}

/// Screen without its payload, for logging and for bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenKind {
    Landing,
    LanguageSelect,
    Form,
    Results,
}

impl ScreenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenKind::Landing => "landing",
            ScreenKind::LanguageSelect => "language_select",
            ScreenKind::Form => "form",
            ScreenKind::Results => "results",
        }
    }
}

impl std::fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Landing => ScreenKind::Landing,
            Screen::LanguageSelect => ScreenKind::LanguageSelect,
            Screen::Form(_) => ScreenKind::Form,
            Screen::Results { .. } => ScreenKind::Results,
        }
    }
}

/// A button press or input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    GetStarted,
    SelectLanguage(String),
    EditField(FormField, String),
    FillSampleLocation,
    Submit,
    BackToForm,
    BackToHome,
    ToggleLanguage,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::GetStarted => "get_started",
            Action::SelectLanguage(_) => "select_language",
            Action::EditField(..) => "edit_field",
            Action::FillSampleLocation => "fill_sample_location",
            Action::Submit => "submit",
            Action::BackToForm => "back_to_form",
            Action::BackToHome => "back_to_home",
            Action::ToggleLanguage => "toggle_language",
        }
    }
}

/// Why an action was not applied; the screen is left as it was
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScreenError {
    #[error("{action} is not available on the {screen} screen")]
    Unavailable {
        action: &'static str,
        screen: ScreenKind,
    },

    #[error(transparent)]
    Form(#[from] FormError),
}

/// Top-level app state: the current screen plus the active language
#[derive(Debug, Clone, PartialEq)]
pub struct App {
    screen: Screen,
    language: Language,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            screen: Screen::Landing,
            language: Language::DEFAULT,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Apply an action to the current screen
    pub fn dispatch(&mut self, action: Action) -> Result<ScreenKind, ScreenError> {
        match action {
            Action::BackToHome => self.screen = Screen::Landing,
            Action::ToggleLanguage => self.set_language(self.language.toggled()),
            action => {
                if let Some(next) = self.step(action)? {
                    self.screen = next;
                }
            }
        }
        Ok(self.screen.kind())
    }

    /// Screen-specific actions; `None` keeps the current screen
    fn step(&mut self, action: Action) -> Result<Option<Screen>, ScreenError> {
        let next = match (&mut self.screen, action) {
            (Screen::Landing, Action::GetStarted) => Screen::LanguageSelect,
            (Screen::LanguageSelect, Action::SelectLanguage(code)) => {
                self.language = Language::resolve(&code);
                Screen::Form(FormData::new(self.language))
            }
            (Screen::Form(form), Action::EditField(field, value)) => {
                form.set(field, &value)?;
                return Ok(None);
            }
            (Screen::Form(form), Action::FillSampleLocation) => {
                form.fill_sample_location();
                return Ok(None);
            }
            (Screen::Form(form), Action::Submit) => {
                let details = form.submit()?;
                let crops = recommendations_in(details.language);
                Screen::Results { details, crops }
            }
            (Screen::Results { .. }, Action::BackToForm) => Screen::Form(FormData::new(self.language)),
            (screen, action) => {
                return Err(ScreenError::Unavailable {
                    action: action.name(),
                    screen: screen.kind(),
                })
            }
        };
        Ok(Some(next))
    }

    /// Switch language; the open form and shown recommendations follow it
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        match &mut self.screen {
            Screen::Form(form) => form.language = language,
            Screen::Results { details, crops } => {
                details.language = language;
                *crops = recommendations_in(language);
            }
            Screen::Landing | Screen::LanguageSelect => {}
        }
    }

    /// Everything needed to draw the current screen
    pub fn view(&self) -> View<'_> {
        let language = self.language;
        let toggle_label = language.toggled().native_name();

        match &self.screen {
            Screen::Landing => View::Landing {
                language,
                toggle_label,
                strings: LANDING.get(language),
            },
            Screen::LanguageSelect => View::LanguageSelect {
                language,
                strings: LANGUAGE_SELECT.get(language),
                options: language_options(),
            },
            Screen::Form(form) => View::Form {
                language,
                language_name: language.native_name(),
                toggle_label,
                strings: FORM.get(language),
                form,
            },
            Screen::Results { crops, .. } => {
                let strings = RESULTS.get(language);
                View::Results {
                    language,
                    toggle_label,
                    strings,
                    cards: crops
                        .iter()
                        .map(|crop| CropCard {
                            crop,
                            badges: crop.badges(strings),
                        })
                        .collect(),
                }
            }
        }
    }
}

/// A recommendation with its localized badges
#[derive(Debug, Clone, Serialize)]
pub struct CropCard {
    #[serde(flatten)]
    pub crop: &'static Crop,
    pub badges: CropBadges,
}

/// Render model of the current screen
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum View<'a> {
    Landing {
        language: Language,
        toggle_label: &'static str,
        strings: &'static LandingStrings,
    },
    LanguageSelect {
        language: Language,
        strings: &'static LanguageSelectStrings,
        options: Vec<LanguageOption>,
    },
    Form {
        language: Language,
        language_name: &'static str,
        toggle_label: &'static str,
        strings: &'static FormStrings,
        form: &'a FormData,
    },
    Results {
        language: Language,
        toggle_label: &'static str,
        strings: &'static ResultsStrings,
        cards: Vec<CropCard>,
    },
}
