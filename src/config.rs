use std::env;

/// Price history endpoint used when `FETCH_URL` is not set
pub const DEFAULT_FETCH_URL: &str = "https://api.coinranking.com/v1/public/coin/1/history/30d";

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub fetch_url: String,
    pub rust_log: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// An unset or blank `FETCH_URL` falls back to [`DEFAULT_FETCH_URL`].
    pub fn from_env() -> Self {
        Self::from_vars(env::var("FETCH_URL").ok(), env::var("RUST_LOG").ok())
    }

    fn from_vars(fetch_url: Option<String>, rust_log: Option<String>) -> Self {
        let fetch_url = fetch_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_FETCH_URL.to_string());

        Self {
            fetch_url,
            rust_log,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(None, None)
    }
}
