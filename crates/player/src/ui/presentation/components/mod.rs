//! Reusable presentation components

mod pokemon_card;

pub use pokemon_card::PokemonCard;
