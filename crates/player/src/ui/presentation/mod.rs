//! Presentation layer - Dioxus components and hooks

pub mod components;
pub mod hooks;
pub mod services;

pub use services::UiServices;
