// PokeAPI module.
// Provides the HTTP client, cache-backed accessors, and response types.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::PokeApiClient;
pub use types::*;
