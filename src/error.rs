//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror. The cache itself has no
//! error states; everything here comes from the API client or the REPL.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex client and REPL.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// HTTP request could not be sent or its body could not be read
    #[error("error making request: {0}")]
    Request(#[from] reqwest::Error),

    /// API answered with a status other than 200
    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),

    /// API has no Pokemon under that name
    #[error("pokemon not found: {0}")]
    PokemonNotFound(String),

    /// Response body (fresh or cached) was not the expected JSON
    #[error("error decoding response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A command was invoked without its required argument
    #[error("please provide a {0}")]
    MissingArgument(&'static str),

    /// Reading input or writing output failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;
