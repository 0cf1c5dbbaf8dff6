//! Pokedex player crate.
//!
//! Contains the UI, the query cache and the HTTP adapters. Native and wasm
//! builds differ only in the adapters, selected with `cfg`.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod state;
pub mod ui;

pub use config::PlayerConfig;
pub use ui::{app, Route};
