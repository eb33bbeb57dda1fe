//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs           - Module exports and documentation
//! ├── router.rs        - Main router creation (CORS, fallback, state)
//! ├── letter_routes.rs - Letter and signature endpoints
//! └── user_routes.rs   - Registration, login, current-user endpoints
//! ```
//!
//! # Routes
//!
//! Public:
//! - `GET /ping` - liveness check
//! - `GET /letters` - search letters
//! - `GET /letters/{id}` - letter detail (viewer-aware when authenticated)
//! - `POST /users/register` - registration
//! - `POST /users/login` - login
//!
//! Authenticated (401 without a valid bearer token):
//! - `POST /letters` - create a letter (rate-limited)
//! - `POST /letters/{id}/toggle-signature` - toggle a signature
//! - `GET /users/me` - current user

/// Main router creation
pub mod router;

/// Letter and signature endpoints
pub mod letter_routes;

/// User endpoints
pub mod user_routes;

// Re-export commonly used functions
pub use router::create_router;
