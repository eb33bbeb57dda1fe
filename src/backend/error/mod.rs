//! API Error Module
//!
//! This module defines the error taxonomy for the OpenLetters API and its
//! conversion to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Types
//!
//! - `Validation` - Caller-correctable input problems (400)
//! - `Unauthenticated` - Missing or invalid credentials (401)
//! - `NotFound` - Absent resources (404)
//! - `RateLimited` - Letter creation cooldown not yet elapsed (429)
//! - `Persistence` - Storage failures, returned opaquely (500)
//!
//! All variants implement `IntoResponse`, so handlers return
//! `Result<_, ApiError>` directly.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
