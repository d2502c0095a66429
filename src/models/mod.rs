//! Response models for the PokeAPI
//!
//! Typed views of the JSON bodies the client decodes. Unknown fields are
//! ignored so the models only carry what the Pokedex prints.

pub mod location_area;
pub mod pokemon;

// Re-export commonly used types
pub use location_area::{LocationAreaDetail, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
