// Startup configuration.
// Loads runtime settings from environment variables with defaults.

use std::env;
use std::time::Duration;

/// Runtime configuration loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Response cache time-to-live in seconds.
    pub cache_ttl_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_TTL` - cache ttl in seconds (default: 300, must be nonzero)
    pub fn from_env() -> Self {
        Self {
            cache_ttl_secs: env::var("POKEDEX_CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&secs| secs > 0)
                .unwrap_or(300),
        }
    }

    /// The cache ttl as a duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { cache_ttl_secs: 300 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ttl_is_five_minutes() {
        let config = Config::default();
        assert_eq!(config.cache_ttl_secs, 300);
        assert_eq!(config.cache_ttl(), Duration::from_secs(300));
    }
}
