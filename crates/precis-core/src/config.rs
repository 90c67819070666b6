use std::path::PathBuf;

/// Public inference endpoint used when `PRECIS_API_URL` is not set.
pub const DEFAULT_API_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_DB_PATH: &str = "summaries.db";

/// Runtime configuration, sourced from the environment.
///
/// Recognized variables: `PRECIS_API_URL`, `PRECIS_API_KEY`, `PRECIS_PORT`,
/// `PRECIS_DB_PATH`. All optional; unparseable values fall back to defaults.
#[derive(Clone)]
pub struct Config {
    pub api_url: String,
    pub api_key: Option<String>,
    pub port: u16,
    pub db_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup (testable without
    /// mutating process environment).
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_url: get("PRECIS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            api_key: get("PRECIS_API_KEY").filter(|k| !k.is_empty()),
            port: get("PRECIS_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            db_path: get("PRECIS_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("port", &self.port)
            .field("db_path", &self.db_path)
            .finish()
    }
}
