use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; the service boots with an empty
/// environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Base URL of the external recommendation backend.
    pub upstream_base_url: String,
    /// Unset disables the chat proxy (the endpoint answers 503).
    pub gemini_api_key: Option<String>,
    /// Overrides the snapshot candidate-path probe when set.
    pub college_data_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            upstream_base_url: std::env::var("UPSTREAM_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string()),
            gemini_api_key: non_empty_env("GEMINI_API_KEY"),
            college_data_path: non_empty_env("COLLEGE_DATA_PATH"),
        })
    }
}

/// An unset or blank variable reads as absent.
fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
