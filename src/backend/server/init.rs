/**
 * Server Initialization
 *
 * This module assembles the Axum application: it connects the database
 * pool, runs migrations, builds the application state, and configures the
 * router.
 *
 * # Initialization Process
 *
 * 1. Connect to PostgreSQL and run migrations
 * 2. Build `AppState` (pool + JWT keys)
 * 3. Create the router with the CORS layer
 *
 * Unlike optional integrations, the database is mandatory: if the pool
 * cannot be established or migrations fail, initialization errors out and
 * the caller aborts startup.
 */

use axum::http::HeaderValue;
use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_pool, AppConfig, ConfigError};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Configuration loaded once at startup
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Returns an error if the database is unreachable, a migration fails, or
/// the configured CORS origin is not a valid header value.
pub async fn create_app(config: &AppConfig) -> Result<Router, Box<dyn std::error::Error>> {
    tracing::info!("Initializing OpenLetters backend server");

    let db_pool = connect_pool(config).await?;

    let cors_origin: HeaderValue = config
        .cors_origin
        .parse()
        .map_err(|_| ConfigError::InvalidVar("CORS_ORIGIN"))?;

    let app_state = AppState::new(db_pool, &config.jwt_secret);
    let app = create_router(app_state, cors_origin);

    tracing::info!("Router configured");
    Ok(app)
}
