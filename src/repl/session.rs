//! REPL session state
//!
//! Pagination cursors, the caught Pokemon and the API client a REPL works with.

use std::collections::BTreeMap;

use rand::Rng;

use crate::api::PokeApiClient;
use crate::models::Pokemon;

/// Upper bound (exclusive) of a catch roll
pub const CATCH_CEILING: u32 = 300;

/// Source of catch rolls in `[0, ceiling)`
pub trait CatchRoll: Send {
    fn roll(&mut self, ceiling: u32) -> u32;
}

/// Uniform rolls from the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomRoll;

impl CatchRoll for RandomRoll {
    fn roll(&mut self, ceiling: u32) -> u32 {
        rand::thread_rng().gen_range(0..ceiling.max(1))
    }
}

/// A catch succeeds when the roll beats the Pokemon's base experience.
///
/// Base experience runs from about 36 for common Pokemon to over 600 for
/// legendaries, so anything at or above the ceiling can never be caught.
pub fn is_caught(roll: u32, base_experience: u32) -> bool {
    roll > base_experience
}

/// Mutable state shared by all commands of one REPL run
pub struct Session {
    client: PokeApiClient,
    next_url: Option<String>,
    previous_url: Option<String>,
    pokedex: BTreeMap<String, Pokemon>,
    roll: Box<dyn CatchRoll>,
}

impl Session {
    /// Creates a session that rolls catches randomly.
    pub fn new(client: PokeApiClient) -> Self {
        Self::with_roll(client, Box::new(RandomRoll))
    }

    /// Creates a session with a custom catch roll.
    pub fn with_roll(client: PokeApiClient, roll: Box<dyn CatchRoll>) -> Self {
        Self {
            client,
            next_url: None,
            previous_url: None,
            pokedex: BTreeMap::new(),
            roll,
        }
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    pub fn next_url(&self) -> Option<&str> {
        self.next_url.as_deref()
    }

    pub fn previous_url(&self) -> Option<&str> {
        self.previous_url.as_deref()
    }

    /// Replaces both pagination cursors with the links of the page just shown.
    pub fn set_cursors(&mut self, next: Option<String>, previous: Option<String>) {
        self.next_url = next;
        self.previous_url = previous;
    }

    /// Draws a catch roll in `[0, CATCH_CEILING)`.
    pub fn roll_catch(&mut self) -> u32 {
        self.roll.roll(CATCH_CEILING)
    }

    /// Records a caught Pokemon under the name the user typed.
    pub fn record_catch(&mut self, name: impl Into<String>, pokemon: Pokemon) {
        self.pokedex.insert(name.into(), pokemon);
    }

    /// Looks up a caught Pokemon.
    pub fn caught(&self, name: &str) -> Option<&Pokemon> {
        self.pokedex.get(name)
    }

    /// Names of all caught Pokemon, in alphabetical order.
    pub fn caught_names(&self) -> impl Iterator<Item = &str> {
        self.pokedex.keys().map(String::as_str)
    }
}
