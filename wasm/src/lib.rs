//! WebAssembly module for Crop Advisor
//!
//! Runs the screen flow in the browser:
//! - Landing, language selection, farm details form and results
//! - Localized string tables with English fallback
//! - Farm details validation and the fixed crop recommendations
//!
//! Structured values cross the boundary as JSON strings.

use serde::Serialize;
use shared::{
    get_recommendations, is_number, language_options, Action, App, Crop, FormData, FormField,
    Language, ScreenKind, Section, RECOMMENDATION_COUNT,
};
use wasm_bindgen::prelude::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    log("Crop Advisor module loaded");
}

// ===== Screen flow =====

/// The whole front end state machine, owned by the page
#[wasm_bindgen]
pub struct CropAdvisorApp {
    app: App,
}

impl Default for CropAdvisorApp {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl CropAdvisorApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { app: App::new() }
    }

    /// "Get Started" on the landing page
    pub fn get_started(&mut self) -> Result<String, JsValue> {
        self.apply(Action::GetStarted)
    }

    pub fn select_language(&mut self, code: &str) -> Result<String, JsValue> {
        self.apply(Action::SelectLanguage(code.to_string()))
    }

    /// Record one input change; `field` is the input's name
    pub fn edit_field(&mut self, field: &str, value: &str) -> Result<String, JsValue> {
        self.try_edit_field(field, value).map_err(to_js)
    }

    /// "Enable Location (Demo)"
    pub fn fill_sample_location(&mut self) -> Result<String, JsValue> {
        self.apply(Action::FillSampleLocation)
    }

    pub fn submit(&mut self) -> Result<String, JsValue> {
        self.apply(Action::Submit)
    }

    pub fn back_to_form(&mut self) -> Result<String, JsValue> {
        self.apply(Action::BackToForm)
    }

    pub fn back_to_home(&mut self) -> Result<String, JsValue> {
        self.apply(Action::BackToHome)
    }

    /// Header button switching between English and Hindi
    pub fn toggle_language(&mut self) -> Result<String, JsValue> {
        self.apply(Action::ToggleLanguage)
    }

    #[wasm_bindgen(getter)]
    pub fn screen(&self) -> String {
        self.app.screen().kind().as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn language(&self) -> String {
        self.app.language().code().to_string()
    }

    /// Render model of the current screen
    pub fn view_json(&self) -> Result<String, JsValue> {
        to_json(&self.app.view()).map_err(to_js)
    }
}

impl CropAdvisorApp {
    fn apply(&mut self, action: Action) -> Result<String, JsValue> {
        self.try_apply(action)
            .map(|kind| kind.as_str().to_string())
            .map_err(to_js)
    }

    fn try_apply(&mut self, action: Action) -> Result<ScreenKind, String> {
        let name = action.name();
        self.app.dispatch(action).map_err(|e| {
            log(&format!("{} rejected: {}", name, e));
            e.to_string()
        })
    }

    fn try_edit_field(&mut self, field: &str, value: &str) -> Result<String, String> {
        let field: FormField = field.parse().map_err(|e: shared::FormError| e.to_string())?;
        self.try_apply(Action::EditField(field, value.to_string()))
            .map(|kind| kind.as_str().to_string())
    }
}

// ===== Lookups =====

#[derive(Serialize)]
struct Recommendations {
    language: Language,
    recommendations: &'static [Crop; RECOMMENDATION_COUNT],
}

/// Strings of one section (`landing`, `language_select`, `form`, `results`,
/// `chat`) in the language with the given code
#[wasm_bindgen]
pub fn translations_json(section: &str, code: &str) -> Result<String, JsValue> {
    try_translations_json(section, code).map_err(to_js)
}

/// The six selectable languages
#[wasm_bindgen]
pub fn languages_json() -> Result<String, JsValue> {
    to_json(&language_options()).map_err(to_js)
}

/// Submit a form given as JSON and get the three crops for its language
#[wasm_bindgen]
pub fn recommendations_json(form_json: &str) -> Result<String, JsValue> {
    try_recommendations_json(form_json).map_err(to_js)
}

/// Whether a number input would accept `value`
#[wasm_bindgen]
pub fn validate_number_input(value: &str) -> bool {
    is_number(value)
}

fn try_translations_json(section: &str, code: &str) -> Result<String, String> {
    let section: Section = section.parse().map_err(|e: shared::i18n::UnknownSection| e.to_string())?;
    to_json(&section.localize(Language::resolve(code)))
}

fn try_recommendations_json(form_json: &str) -> Result<String, String> {
    let form: FormData =
        serde_json::from_str(form_json).map_err(|e| format!("Invalid form JSON: {}", e))?;
    let details = form.submit().map_err(|e| e.to_string())?;
    to_json(&Recommendations {
        language: details.language,
        recommendations: get_recommendations(&details),
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization failed: {}", e))
}

fn to_js(message: String) -> JsValue {
    JsValue::from_str(&message)
}

fn log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_unavailable_action_is_js_error() {
        let mut app = CropAdvisorApp::new();
        assert!(app.submit().is_err());
    }
}
