// REPL command loop.
// Parses user input, dispatches commands, and tracks pagination state.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::error::Result;
use crate::pokeapi::{PokeApiClient, endpoints};

/// Command table shown by `help`, in display order.
const COMMANDS: &[(&str, &str)] = &[
    ("help", "Show the available commands"),
    ("exit", "Leave the pokedex"),
    ("map", "Show the next page of location areas"),
    ("mapb", "Show the previous page of location areas"),
    ("explore <area>", "List the pokemon found in a location area"),
    ("inspect <pokemon>", "Show the record for a pokemon"),
];

/// Pagination bookkeeping carried across `map`/`mapb` invocations.
///
/// `next` starts at the first listing page and thereafter holds the `next`
/// link from the most recent page, so exhausting the catalog leaves it empty
/// rather than wrapping around.
#[derive(Debug)]
struct Pager {
    next: Option<String>,
    previous: Option<String>,
}

impl Pager {
    fn new() -> Self {
        Self {
            next: Some(endpoints::location_areas_url()),
            previous: None,
        }
    }

    /// Record the links of the page just displayed.
    fn turn_to(&mut self, next: Option<String>, previous: Option<String>) {
        self.next = next;
        self.previous = previous;
    }
}

/// Main application state for the interactive session.
pub struct App {
    client: PokeApiClient,
    pager: Pager,
    should_quit: bool,
}

impl App {
    pub fn new(client: PokeApiClient) -> Self {
        Self {
            client,
            pager: Pager::new(),
            should_quit: false,
        }
    }

    /// Run the REPL until `exit` or end of input.
    pub async fn run(&mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        println!("Welcome to the pokedex! Type \"help\" to see the available commands.");

        while !self.should_quit {
            print!("pokedex > ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            let input = clean_input(&line);
            let Some((command, args)) = input.split_first() else {
                continue;
            };

            // Command failures are reported and the session continues.
            if let Err(err) = self.dispatch(command, args).await {
                println!("{err}");
            }
        }

        println!("Closing the pokedex... goodbye!");
        Ok(())
    }

    async fn dispatch(&mut self, command: &str, args: &[String]) -> Result<()> {
        match command {
            "help" => {
                print_help();
                Ok(())
            }
            "exit" => {
                self.should_quit = true;
                Ok(())
            }
            "map" => self.command_map().await,
            "mapb" => self.command_map_back().await,
            "explore" => match args.first() {
                Some(area) => self.command_explore(area).await,
                None => {
                    println!("usage: explore <area>");
                    Ok(())
                }
            },
            "inspect" => match args.first() {
                Some(name) => self.command_inspect(name).await,
                None => {
                    println!("usage: inspect <pokemon>");
                    Ok(())
                }
            },
            other => {
                println!("Unknown command: {other}. Try \"help\".");
                Ok(())
            }
        }
    }

    /// Display the next page of location areas.
    async fn command_map(&mut self) -> Result<()> {
        let Some(url) = self.pager.next.clone() else {
            println!("you're on the last page");
            return Ok(());
        };

        let page = self.client.get_location_area_page(&url).await?;
        for area in &page.results {
            println!("{}", area.name);
        }
        self.pager.turn_to(page.next, page.previous);
        Ok(())
    }

    /// Display the previous page of location areas.
    async fn command_map_back(&mut self) -> Result<()> {
        let Some(url) = self.pager.previous.clone() else {
            println!("you're on the first page");
            return Ok(());
        };

        let page = self.client.get_location_area_page(&url).await?;
        for area in &page.results {
            println!("{}", area.name);
        }
        self.pager.turn_to(page.next, page.previous);
        Ok(())
    }

    /// List the pokemon encountered in the named location area.
    async fn command_explore(&self, area: &str) -> Result<()> {
        println!("Exploring {}...", area);
        let url = endpoints::location_area_url(area);
        let encounters = self.client.get_location_area(&url).await?;

        println!("Found pokemon:");
        for encounter in &encounters.pokemon_encounters {
            println!(" - {}", encounter.pokemon.name);
        }
        Ok(())
    }

    /// Print the detail record for the named pokemon.
    async fn command_inspect(&self, name: &str) -> Result<()> {
        let pokemon = self.client.get_pokemon(&endpoints::pokemon_url(name)).await?;

        println!("Name: {}", pokemon.name);
        println!("Height: {}", pokemon.height);
        println!("Weight: {}", pokemon.weight);
        println!("Base experience: {}", pokemon.base_experience);
        println!("Stats:");
        for stat in &pokemon.stats {
            println!("  -{}: {}", stat.stat.name, stat.base_stat);
        }
        println!("Types:");
        for ty in &pokemon.types {
            println!("  - {}", ty.kind.name);
        }
        Ok(())
    }
}

fn print_help() {
    println!("Welcome to the pokedex!");
    println!("Usage:");
    println!();
    for (usage, description) in COMMANDS {
        println!("  {usage:<20}{description}");
    }
}

/// Lowercase and whitespace-tokenize one line of user input.
fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::cache::ResponseCache;

    fn test_app() -> App {
        let cache = ResponseCache::new(Duration::from_secs(60));
        let client = PokeApiClient::new(cache).expect("client construction should not fail");
        App::new(client)
    }

    #[test]
    fn clean_input_lowercases_and_tokenizes() {
        assert_eq!(clean_input("  Explore  Eterna-City-Area "), vec!["explore", "eterna-city-area"]);
        assert_eq!(clean_input("MAP"), vec!["map"]);
        assert!(clean_input("   ").is_empty());
    }

    #[test]
    fn pager_starts_at_the_first_listing_page() {
        let pager = Pager::new();
        assert_eq!(pager.next.as_deref(), Some("https://pokeapi.co/api/v2/location-area"));
        assert_eq!(pager.previous, None);
    }

    #[test]
    fn pager_turn_to_replaces_both_links() {
        let mut pager = Pager::new();
        pager.turn_to(Some("next-url".into()), Some("prev-url".into()));
        assert_eq!(pager.next.as_deref(), Some("next-url"));
        assert_eq!(pager.previous.as_deref(), Some("prev-url"));

        pager.turn_to(None, Some("prev-url".into()));
        assert_eq!(pager.next, None);
    }

    #[tokio::test]
    async fn map_past_the_last_page_does_not_fetch() {
        let mut app = test_app();
        app.pager.next = None;
        app.pager.previous = Some("prev-url".into());

        // No server is reachable at "prev-url", so an attempted fetch would
        // surface as an error; the guard short-circuits instead.
        app.command_map().await.unwrap();
        assert_eq!(app.pager.previous.as_deref(), Some("prev-url"));
    }

    #[tokio::test]
    async fn map_back_on_the_first_page_does_not_fetch() {
        let mut app = test_app();
        app.command_map_back().await.unwrap();

        // Pagination state is untouched by the short-circuit.
        assert_eq!(app.pager.next.as_deref(), Some("https://pokeapi.co/api/v2/location-area"));
        assert_eq!(app.pager.previous, None);
    }

    #[tokio::test]
    async fn unknown_command_is_not_an_error() {
        let mut app = test_app();
        app.dispatch("teleport", &[]).await.unwrap();
        assert!(!app.should_quit);
    }

    #[tokio::test]
    async fn exit_sets_the_quit_flag() {
        let mut app = test_app();
        app.dispatch("exit", &[]).await.unwrap();
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn explore_without_argument_prints_usage() {
        let mut app = test_app();
        app.dispatch("explore", &[]).await.unwrap();
    }
}
