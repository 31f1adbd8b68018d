//! Shared types and models for Crop Advisor
//!
//! This crate holds everything the demo host (backend) and the browser
//! bindings (wasm) have in common: languages and their string tables, the
//! farm details form, the fixed crop catalog, the chat transcript and the
//! screen flow.

pub mod i18n;
pub mod models;
pub mod recommendations;
pub mod screen;
pub mod types;
pub mod validation;

pub use i18n::{Localized, ResourceBundle, Section, SectionStrings};
pub use models::*;
pub use recommendations::*;
pub use screen::*;
pub use types::*;
pub use validation::*;
