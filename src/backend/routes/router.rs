/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router, layers CORS on
 * top, and attaches the application state.
 */

use axum::{
    http::{header::AUTHORIZATION, header::CONTENT_TYPE, HeaderValue, Method, StatusCode},
    response::Json,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;

use crate::backend::routes::letter_routes::configure_letter_routes;
use crate::backend::routes::user_routes::configure_user_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (database pool, JWT keys)
/// * `cors_origin` - The single origin the CORS layer allows
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState, cors_origin: HeaderValue) -> Router<()> {
    let cors = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    let router = Router::new().route("/ping", get(ping));
    let router = configure_letter_routes(router);
    let router = configure_user_routes(router);

    router
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(cors)
        .with_state(app_state)
}

/// Liveness check
async fn ping() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "pong" }))
}
