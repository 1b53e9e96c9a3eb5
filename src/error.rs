// Error types for the pokedex application.
// Covers transport, protocol, and decode failures plus REPL I/O.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PokedexError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PokedexError>;
