//! OpenLetters - Main Library
//!
//! OpenLetters is the backend for an open-letter platform: registered users
//! compose letters addressed to a recipient email, other users co-sign them,
//! and anyone can search letters by text, date range, and signature
//! popularity.
//!
//! # Overview
//!
//! This library provides:
//! - An Axum HTTP server over a PostgreSQL connection pool
//! - Transactional letter creation with per-user rate limiting
//! - Signature toggling with live, always-consistent signature counts
//! - A parameterized search query compiler (full-text + date filters)
//! - JWT-based authentication at the HTTP boundary
//!
//! # Module Structure
//!
//! The library is organized under a single `backend` module:
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, route configuration, request extractors
//!   - Letter store, rate limiter, and creation service
//!   - Signature ledger and toggle service
//!   - Authentication, JWT tokens, user management
//!   - Error taxonomy and HTTP response conversion

/// Server-side code: HTTP server, services, and storage operations
pub mod backend;
