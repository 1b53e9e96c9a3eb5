// Pokedex - interactive explorer for the PokeAPI catalog.
// Wires together the response cache, API client, and REPL.

mod app;
mod cache;
mod config;
mod error;
mod pokeapi;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::App;
use cache::ResponseCache;
use config::Config;
use pokeapi::PokeApiClient;

#[tokio::main]
async fn main() {
    // Logs go to stderr so they never interleave with REPL output.
    // Defaults to "warn"; override with RUST_LOG (e.g. pokedex=debug).
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    let cache = ResponseCache::new(config.cache_ttl());
    let client = match PokeApiClient::new(cache) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("failed to initialize HTTP client: {err}");
            std::process::exit(1);
        }
    };

    let mut app = App::new(client);
    if let Err(err) = app.run().await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
