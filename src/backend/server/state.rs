/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container, holding:
 * - The PostgreSQL connection pool
 * - The JWT signing/verification keys
 *
 * Both are cheap to clone (`PgPool` is an `Arc` internally; the keys are
 * wrapped in one). There is deliberately no in-memory cache of letters or
 * signature counts: every read consults current storage state so derived
 * counts are always accurate.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract just the pool or
 * just the keys without taking the whole `AppState`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::auth::sessions::JwtKeys;

/// Application state shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    /// JWT keys, built once from the configured secret
    pub jwt: Arc<JwtKeys>,
}

impl AppState {
    /// Build state from an established pool and a JWT secret
    pub fn new(db_pool: PgPool, jwt_secret: &str) -> Self {
        Self {
            db_pool,
            jwt: Arc::new(JwtKeys::from_secret(jwt_secret)),
        }
    }
}

/// Allow handlers to extract the pool directly via `State(PgPool)`
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Allow handlers to extract the JWT keys directly via `State(Arc<JwtKeys>)`
impl FromRef<AppState> for Arc<JwtKeys> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.jwt.clone()
    }
}
