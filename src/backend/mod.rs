//! Backend Module
//!
//! This module contains all server-side code for the OpenLetters API.
//! It provides a complete Axum HTTP server with transactional letter and
//! signature handling backed by PostgreSQL.
//!
//! # Overview
//!
//! The backend module includes:
//! - Axum HTTP server setup and configuration
//! - Letter creation with per-user rate limiting (one letter per minute)
//! - Signature toggling with consistent live counts
//! - Dynamic, parameterized search query compilation
//! - Authentication and user management (bcrypt + JWT)
//! - Database persistence (PostgreSQL via sqlx)
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`letters`** - Letter store, search query compiler, rate limiter,
//!   creation service, and letter handlers
//! - **`signatures`** - Signature ledger, toggle service, and toggle handler
//! - **`auth`** - Authentication, JWT tokens, user management
//! - **`middleware`** - Bearer-token request extractors
//! - **`error`** - API error taxonomy and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary entry point
//! ├── server/         - Initialization, state, configuration
//! ├── routes/         - Route configuration
//! ├── letters/        - Letter store, search, rate limiting, creation
//! ├── signatures/     - Signature ledger and toggle service
//! ├── auth/           - Authentication
//! ├── middleware/     - Request extractors
//! └── error/          - Error types
//! ```
//!
//! # Consistency Model
//!
//! Every operation that mutates shared state runs inside a single sqlx
//! transaction: letter creation locks the sender's user row for the
//! duration of the rate check, and signature toggles read, mutate, and
//! recount inside one transaction so the returned count always reflects
//! the post-toggle state. Signature counts are never cached; every read
//! recomputes them from the ledger.

/// Server initialization, application state, configuration
pub mod server;

/// HTTP route configuration
pub mod routes;

/// Letter store, search compiler, rate limiter, creation service
pub mod letters;

/// Signature ledger and toggle service
pub mod signatures;

/// Authentication, JWT tokens, user management
pub mod auth;

/// Bearer-token request extractors
pub mod middleware;

/// API error taxonomy
pub mod error;
