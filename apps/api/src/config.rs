use anyhow::{Context, Result};

/// Environment variables checked for the AI API key, highest priority first.
/// Older deployments exported the key under different names.
const API_KEY_VARS: &[&str] = &["ANTHROPIC_API_KEY", "CLAUDE_API_KEY", "AI_API_KEY"];

/// Model used when `AI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5";

/// Application configuration loaded once from environment variables at
/// startup and passed down — never re-read per request.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Comma-separated list of allowed CORS origins, or `*` for any.
    pub allowed_origins: String,
    pub ai_model: String,
    /// Absent when no key variable is set. The service still runs; job
    /// search degrades to the deterministic fallback catalogue.
    pub ai_api_key: Option<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            allowed_origins: std::env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
            ai_model: std::env::var("AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            ai_api_key: resolve_api_key(),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn resolve_api_key() -> Option<String> {
    API_KEY_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|key| !key.trim().is_empty()))
}
