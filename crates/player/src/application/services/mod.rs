//! Application services

pub mod pokedex_service;

pub use pokedex_service::PokedexService;
