//! API Module
//!
//! HTTP client for the PokeAPI REST service.
//!
//! # Endpoints
//! - `GET /location-area` - Paginated list of location areas
//! - `GET /location-area/{name}` - Pokemon encounters in one area
//! - `GET /pokemon/{name}` - A single Pokemon

pub mod client;

pub use client::{Fetched, PokeApiClient, Source};
