use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::services::api_client::MissingTokenPolicy;

pub const DEFAULT_API_URL: &str = "https://playlist-backend.tech/service";
pub const DEFAULT_SONGS_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL every endpoint path is appended to, without a trailing slash.
    pub api_url: String,
    /// JSON file holding the persisted `authToken`.
    pub token_file: PathBuf,
    pub missing_token: MissingTokenPolicy,
    pub songs_page_size: u32,
    /// Pause before every song page fetch, keeps the dashboard under the API rate limit.
    pub songs_fetch_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token_file: PathBuf::from(".catalog-admin/token.json"),
            missing_token: MissingTokenPolicy::SendNull,
            songs_page_size: DEFAULT_SONGS_PAGE_SIZE,
            songs_fetch_delay: Duration::from_millis(300),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_url = lookup("CATALOG_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_url);
        if api_url.is_empty() {
            return Err(anyhow::anyhow!("CATALOG_API_URL must not be empty"));
        }

        let missing_token = match lookup("CATALOG_OMIT_MISSING_TOKEN").as_deref() {
            Some("1") | Some("true") | Some("yes") => MissingTokenPolicy::Omit,
            _ => MissingTokenPolicy::SendNull,
        };

        let songs_page_size = match lookup("CATALOG_SONGS_PAGE_SIZE") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|e| {
                anyhow::anyhow!("CATALOG_SONGS_PAGE_SIZE must be a positive integer: {}", e)
            })?,
            None => defaults.songs_page_size,
        };
        if songs_page_size == 0 {
            return Err(anyhow::anyhow!("CATALOG_SONGS_PAGE_SIZE must be at least 1"));
        }

        let songs_fetch_delay = lookup("CATALOG_SONGS_FETCH_DELAY_MS")
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.songs_fetch_delay);

        Ok(Config {
            api_url,
            token_file: lookup("CATALOG_TOKEN_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.token_file),
            missing_token,
            songs_page_size,
            songs_fetch_delay,
        })
    }
}
