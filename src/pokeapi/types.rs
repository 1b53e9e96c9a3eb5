// PokeAPI response types.
// Defines structs for deserializing the catalog endpoints we browse.

use serde::Deserialize;

/// A named resource reference: the display name plus the URL of its record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of a paginated resource listing.
///
/// `next` and `previous` are absolute URLs rendered by the API; they are
/// followed verbatim, never reconstructed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourcePage {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// The pokemon encountered in a single location area.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocationArea {
    pub pokemon_encounters: Vec<Encounter>,
}

/// A single encounter slot within a location area.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Encounter {
    pub pokemon: NamedResource,
}

/// Detail record for one pokemon.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Pokemon {
    pub name: String,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub base_experience: u32,
    pub stats: Vec<PokemonStat>,
    pub types: Vec<PokemonType>,
}

/// A base stat value paired with the stat it describes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// A type tag on a pokemon.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonType {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_page_deserializes_with_null_links() {
        let body = r#"{
            "count": 2,
            "next": "https://pokeapi.co/api/v2/location-area/?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"},
                {"name": "eterna-city-area", "url": "https://pokeapi.co/api/v2/location-area/2/"}
            ]
        }"#;

        let page: ResourcePage = serde_json::from_str(body).unwrap();
        assert_eq!(page.count, 2);
        assert!(page.next.is_some());
        assert_eq!(page.previous, None);
        assert_eq!(page.results[1].name, "eterna-city-area");
    }

    #[test]
    fn location_area_deserializes_encounters() {
        let body = r#"{
            "name": "canalave-city-area",
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "https://pokeapi.co/api/v2/pokemon/72/"}},
                {"pokemon": {"name": "staryu", "url": "https://pokeapi.co/api/v2/pokemon/120/"}}
            ]
        }"#;

        let area: LocationArea = serde_json::from_str(body).unwrap();
        let names: Vec<&str> = area
            .pokemon_encounters
            .iter()
            .map(|e| e.pokemon.name.as_str())
            .collect();
        assert_eq!(names, vec!["tentacool", "staryu"]);
    }

    #[test]
    fn pokemon_deserializes_stats_and_types() {
        let body = r#"{
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "base_experience": 112,
            "stats": [
                {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/"}}
            ],
            "types": [
                {"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}
            ]
        }"#;

        let pokemon: Pokemon = serde_json::from_str(body).unwrap();
        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(pokemon.base_experience, 112);
        assert_eq!(pokemon.stats[0].stat.name, "hp");
        assert_eq!(pokemon.stats[0].base_stat, 35);
        assert_eq!(pokemon.types[0].kind.name, "electric");
    }

    #[test]
    fn missing_base_experience_defaults_to_zero() {
        let body = r#"{
            "name": "missingno",
            "height": 1,
            "weight": 1,
            "stats": [],
            "types": []
        }"#;

        let pokemon: Pokemon = serde_json::from_str(body).unwrap();
        assert_eq!(pokemon.base_experience, 0);
    }
}
