//! Long-lived services behind the HTTP handlers

pub mod chat;
