//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`BoardConfig::from_env`].
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8080`).
    pub listen_addr: SocketAddr,

    /// SQLite connection string (e.g. `sqlite:///tmp/post_db.bin`).
    pub database_url: String,

    /// Maximum number of database connections in the pool.
    pub database_max_connections: u32,

    /// Timeout in seconds for acquiring a database connection.
    pub database_connect_timeout_secs: u64,

    /// Directory served for paths no route matches.
    pub static_dir: PathBuf,

    /// Number of comments returned by the list endpoint.
    pub recent_comments_limit: u32,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Tracing output format.
    pub log_format: LogFormat,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            database_url: "sqlite:///tmp/post_db.bin".to_string(),
            database_max_connections: 5,
            database_connect_timeout_secs: 5,
            static_dir: PathBuf::from("static"),
            recent_comments_limit: 10,
            request_timeout_secs: 30,
            log_format: LogFormat::Text,
        }
    }
}

impl BoardConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to the [`Default`] values when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, std::net::AddrParseError> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr = match std::env::var("LISTEN_ADDR") {
            Ok(raw) => raw.parse()?,
            Err(_) => defaults.listen_addr,
        };

        let database_url = std::env::var("DATABASE_URL").unwrap_or(defaults.database_url);

        let database_max_connections =
            parse_env("DATABASE_MAX_CONNECTIONS", defaults.database_max_connections);
        let database_connect_timeout_secs = parse_env(
            "DATABASE_CONNECT_TIMEOUT_SECS",
            defaults.database_connect_timeout_secs,
        );

        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);
        let recent_comments_limit =
            parse_env("RECENT_COMMENTS_LIMIT", defaults.recent_comments_limit);
        let request_timeout_secs = parse_env("REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs);

        let log_format = match std::env::var("LOG_FORMAT").ok().as_deref() {
            Some("json") | Some("JSON") => LogFormat::Json,
            _ => defaults.log_format,
        };

        Ok(Self {
            listen_addr,
            database_url,
            database_max_connections,
            database_connect_timeout_secs,
            static_dir,
            recent_comments_limit,
            request_timeout_secs,
            log_format,
        })
    }

    /// Pool acquire timeout as a [`Duration`].
    #[must_use]
    pub const fn database_connect_timeout(&self) -> Duration {
        Duration::from_secs(self.database_connect_timeout_secs)
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
