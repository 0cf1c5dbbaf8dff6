//! Data transfer objects
//!
//! Wire shapes of the roster provider's responses. Services deserialize into
//! these and convert them into domain records, so presentation never sees
//! provider JSON.

pub mod pokeapi;

pub use pokeapi::{
    AbilitySlotDto, NamedResourceDto, PokemonDetailDto, ResourceListDto, SpritesDto,
    TypeDetailDto, TypeMemberDto, TypeSlotDto,
};
