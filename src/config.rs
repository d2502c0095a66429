//! Configuration Module
//!
//! Handles loading the Pokedex configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::ExpirationPolicy;

/// Default PokeAPI endpoint
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Pokedex configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// How long cached API responses live
    pub cache_ttl: Duration,
    /// Whether cache lookups also enforce the TTL
    pub cache_policy: ExpirationPolicy,
    /// Base URL of the PokeAPI, without a trailing slash
    pub base_url: String,
    /// Timeout applied to each HTTP request
    pub request_timeout: Duration,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_TTL_SECS` - Cache TTL in seconds (default: 300)
    /// - `POKEDEX_CACHE_READ_CHECK` - `true` to reject stale entries on lookup (default: false)
    /// - `POKEAPI_BASE_URL` - API base URL (default: https://pokeapi.co/api/v2)
    /// - `POKEAPI_TIMEOUT_SECS` - HTTP request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            cache_ttl: env::var("POKEDEX_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.cache_ttl),
            cache_policy: env::var("POKEDEX_CACHE_READ_CHECK")
                .ok()
                .and_then(|v| ExpirationPolicy::from_read_check_flag(&v))
                .unwrap_or(defaults.cache_policy),
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.base_url),
            request_timeout: env::var("POKEAPI_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(5 * 60),
            cache_policy: ExpirationPolicy::SweepOnly,
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}
