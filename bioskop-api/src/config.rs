//! Server configuration

use std::path::PathBuf;

use sqlx::postgres::PgSslMode;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Settings file tried first, relative to the working directory
pub const SETTINGS_FILE: &str = "config/.env";

/// Database connection settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    /// TLS mode (env: DB_SSLMODE)
    pub ssl_mode: PgSslMode,
    /// Pool size
    pub max_connections: u32,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    /// HTTP listen port
    pub http_port: u16,
    /// Include raw database error text in 500 bodies
    pub expose_error_details: bool,
}

/// Load the local settings file into the process environment.
///
/// Tries `config/.env` first, then `.env`. Returns the file that was loaded,
/// or `None` when neither exists and only the process environment is used.
pub fn load_env_file() -> Option<PathBuf> {
    dotenvy::from_filename(SETTINGS_FILE)
        .or_else(|_| dotenvy::dotenv())
        .ok()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BoxError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let ssl_mode = lookup("DB_SSLMODE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "prefer".to_string());
        let database = DatabaseConfig {
            host: var("DB_HOST", "localhost"),
            port: parse_var(&lookup, "DB_PORT", 5432)?,
            user: var("DB_USER", "postgres"),
            password: var("DB_PASSWORD", ""),
            name: var("DB_NAME", "bioskop"),
            ssl_mode: ssl_mode
                .trim()
                .parse()
                .map_err(|e| format!("DB_SSLMODE: invalid value {ssl_mode:?}: {e}"))?,
            max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", 10)?,
        };

        Ok(Self {
            database,
            http_port: parse_var(&lookup, "HTTP_PORT", 8080)?,
            expose_error_details: parse_var(&lookup, "EXPOSE_ERROR_DETAILS", true)?,
        })
    }
}

/// Parse an optional variable, falling back to `default` when unset or empty.
fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T, BoxError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name).filter(|v| !v.is_empty()) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| -> BoxError { format!("{name}: invalid value {raw:?}: {e}").into() }),
        None => Ok(default),
    }
}
