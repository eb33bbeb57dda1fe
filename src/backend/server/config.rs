/**
 * Server Configuration
 *
 * This module loads and validates server configuration from environment
 * variables, and sets up the PostgreSQL connection pool.
 *
 * # Configuration Sources
 *
 * Configuration is read from the environment once at startup into an
 * `AppConfig` value that is passed explicitly to the components that need
 * it. `DATABASE_URL` and `JWT_SECRET` are required; the port and CORS
 * origin have development defaults.
 */

use sqlx::PgPool;
use thiserror::Error;

/// Default port when `API_PORT` is not set
const DEFAULT_PORT: u16 = 8080;

/// Default CORS origin when `CORS_ORIGIN` is not set (local frontend dev server)
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for environment variable {0}")]
    InvalidVar(&'static str),
}

/// Server configuration, constructed once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// HMAC secret for JWT signing and verification
    pub jwt_secret: String,
    /// Port the HTTP server binds to
    pub port: u16,
    /// Origin allowed by the CORS layer
    pub cors_origin: String,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// * `MissingVar` - `DATABASE_URL` or `JWT_SECRET` is not set
    /// * `InvalidVar` - `API_PORT` is set but not a valid port number
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require_var("DATABASE_URL")?;
        let jwt_secret = require_var("JWT_SECRET")?;

        let port = match std::env::var("API_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidVar("API_PORT"))?,
            Err(_) => DEFAULT_PORT,
        };

        let cors_origin = std::env::var("CORS_ORIGIN")
            .unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string());

        Ok(Self {
            database_url,
            jwt_secret,
            port,
            cors_origin,
        })
    }
}

fn require_var(key: &'static str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingVar(key))
}

/// Connect to PostgreSQL and run migrations
///
/// # Errors
///
/// Returns the underlying sqlx error if the connection or a migration
/// fails. Startup aborts in that case; the server never runs without a
/// reachable, migrated database.
pub async fn connect_pool(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&config.database_url).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in ["DATABASE_URL", "JWT_SECRET", "API_PORT", "CORS_ORIGIN"] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        std::env::set_var("DATABASE_URL", "postgres://localhost/letters");
        std::env::set_var("JWT_SECRET", "secret");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.cors_origin, DEFAULT_CORS_ORIGIN);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_database_url() {
        clear_env();
        std::env::set_var("JWT_SECRET", "secret");

        let err = AppConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("DATABASE_URL")));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port() {
        clear_env();
        std::env::set_var("DATABASE_URL", "postgres://localhost/letters");
        std::env::set_var("JWT_SECRET", "secret");
        std::env::set_var("API_PORT", "not-a-port");

        let err = AppConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar("API_PORT")));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_explicit_values() {
        clear_env();
        std::env::set_var("DATABASE_URL", "postgres://localhost/letters");
        std::env::set_var("JWT_SECRET", "secret");
        std::env::set_var("API_PORT", "9090");
        std::env::set_var("CORS_ORIGIN", "https://letters.example.com");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.cors_origin, "https://letters.example.com");
        clear_env();
    }
}
