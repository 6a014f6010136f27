//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

/// Web server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
    /// Idea-generation endpoint used by brainstorming sessions.
    pub idea_endpoint_url: String,
    /// Sent as bearer token and `apikey` header to the endpoint.
    pub idea_endpoint_key: Option<String>,
    /// Upper bound on live brainstorming sessions.
    pub max_sessions: usize,
}

pub const DEFAULT_ADDR: &str = "127.0.0.1:8790";
pub const DEFAULT_DATABASE_URL: &str = "sqlite:ideas.db?mode=rwc";
pub const DEFAULT_MAX_SESSIONS: usize = 1000;

/// Path the built-in idea-generation endpoint is served on.
pub const IDEA_ENDPOINT_PATH: &str = "/functions/v1/supply-chain-ai";

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `IDEA_WEB_ADDR` | Server bind address | `127.0.0.1:8790` |
    /// | `SQLITE_PATH` | SQLite database URL | `sqlite:ideas.db?mode=rwc` |
    /// | `IDEA_ENDPOINT_URL` | Idea-generation endpoint | this server's `/functions/v1/supply-chain-ai` |
    /// | `IDEA_ENDPOINT_KEY` | Endpoint key | (none) |
    /// | `BRAINSTORM_MAX_SESSIONS` | Session store capacity | `1000` |
    ///
    /// The supply-chain assistant reads its own `OPENAI_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr: SocketAddr = env::var("IDEA_WEB_ADDR")
            .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url =
            env::var("SQLITE_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let idea_endpoint_url = env::var("IDEA_ENDPOINT_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| format!("http://{}{}", addr, IDEA_ENDPOINT_PATH));

        let idea_endpoint_key = env::var("IDEA_ENDPOINT_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let max_sessions = match env::var("BRAINSTORM_MAX_SESSIONS") {
            Ok(value) => value
                .parse()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidMaxSessions)?,
            Err(_) => DEFAULT_MAX_SESSIONS,
        };

        Ok(Self {
            addr,
            database_url,
            idea_endpoint_url,
            idea_endpoint_key,
            max_sessions,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid IDEA_WEB_ADDR format")]
    InvalidAddr,

    #[error("BRAINSTORM_MAX_SESSIONS must be a positive integer")]
    InvalidMaxSessions,
}
