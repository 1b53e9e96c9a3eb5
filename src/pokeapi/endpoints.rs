// PokeAPI endpoint accessors.
// Typed fetch-through methods for the three catalog shapes we browse.

use crate::error::Result;

use super::client::{POKEAPI_BASE, PokeApiClient};
use super::types::{LocationArea, Pokemon, ResourcePage};

/// URL of the first page of the location-area listing.
pub fn location_areas_url() -> String {
    format!("{}/location-area", POKEAPI_BASE)
}

/// URL of a single location area by name.
pub fn location_area_url(name: &str) -> String {
    format!("{}/location-area/{}", POKEAPI_BASE, name)
}

/// URL of a single pokemon by name.
pub fn pokemon_url(name: &str) -> String {
    format!("{}/pokemon/{}", POKEAPI_BASE, name)
}

impl PokeApiClient {
    /// One page of the location-area listing. `url` is either the first-page
    /// URL or a `next`/`previous` link carried over from an earlier page.
    pub async fn get_location_area_page(&self, url: &str) -> Result<ResourcePage> {
        self.fetch_cached(url).await
    }

    /// The pokemon encountered in one location area.
    pub async fn get_location_area(&self, url: &str) -> Result<LocationArea> {
        self.fetch_cached(url).await
    }

    /// Detail record for one pokemon.
    pub async fn get_pokemon(&self, url: &str) -> Result<Pokemon> {
        self.fetch_cached(url).await
    }
}
