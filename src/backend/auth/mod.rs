//! Authentication Module
//!
//! This module handles user registration, login, and session management.
//! It produces the trusted user identity the transactional core consumes;
//! nothing inside the letter or signature services parses credentials.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - User authentication handler
//!     └── me.rs       - Current-user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: email + password → bcrypt hash stored → user id returned
//! 2. **Login**: credentials verified → JWT (24h expiry) returned
//! 3. **Authenticated requests**: bearer token verified by the `AuthUser`
//!    extractor, which yields a typed `AuthenticatedUser`
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never serialized
//! - Login failures return 401 without distinguishing email from password
//! - Signing keys come from configuration, never ambient env reads

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, RegisterRequest, RegisterResponse, TokenResponse, UserResponse};
pub use handlers::{login, me, register};
