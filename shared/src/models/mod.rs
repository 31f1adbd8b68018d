//! Domain models for Crop Advisor

mod chat;
mod crop;
mod form;

pub use chat::*;
pub use crop::*;
pub use form::*;
