use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Returns the default data path based on build profile.
/// - Debug builds: `./data` (relative to project directory)
/// - Release builds: `/data` (absolute path for production)
pub fn default_data_path() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from("./data")
    }

    #[cfg(not(debug_assertions))]
    {
        PathBuf::from("/data")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbConfig {
    pub token: String,
    pub language: String,
    /// Upper bound on cast entries taken from the credit list
    pub cast_limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmdbConfig {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data_path: PathBuf,
    pub database_url: String,
    pub max_connections: u32,
    pub tmdb: TmdbConfig,
    pub omdb: OmdbConfig,
    /// Per-provider request deadline in seconds
    pub provider_timeout_secs: u64,
    /// Destination for crawl result events; notifier is a no-op when unset
    pub result_webhook_url: Option<String>,
}

impl Config {
    pub fn new(data_path: impl AsRef<Path>) -> Self {
        let data_path = data_path.as_ref().to_path_buf();
        let database_url = format!("sqlite:{}?mode=rwc", data_path.join("metadata.db").display());
        Self {
            data_path,
            database_url,
            max_connections: 5,
            tmdb: TmdbConfig {
                token: String::new(),
                language: "en-US".to_string(),
                cast_limit: 10,
            },
            omdb: OmdbConfig {
                token: String::new(),
            },
            provider_timeout_secs: 10,
            result_webhook_url: None,
        }
    }

    /// Build the configuration from environment variables, falling back
    /// to the defaults above for anything unset.
    pub fn from_env() -> Self {
        let data_path = env::var("DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_path());

        let mut config = Config::new(data_path);

        if let Ok(token) = env::var("TMDB_TOKEN") {
            config.tmdb.token = token;
        }
        if let Ok(language) = env::var("TMDB_LANGUAGE") {
            config.tmdb.language = language;
        }
        if let Ok(limit) = env::var("TMDB_CAST_LIMIT") {
            if let Ok(limit) = limit.parse() {
                config.tmdb.cast_limit = limit;
            }
        }
        if let Ok(token) = env::var("OMDB_TOKEN") {
            config.omdb.token = token;
        }
        if let Ok(secs) = env::var("PROVIDER_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse() {
                config.provider_timeout_secs = secs;
            }
        }
        if let Ok(url) = env::var("RESULT_WEBHOOK_URL") {
            if !url.is_empty() {
                config.result_webhook_url = Some(url);
            }
        }

        config
    }
}
