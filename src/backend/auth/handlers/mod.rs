//! Authentication Handlers Module
//!
//! HTTP handlers for the user endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports
//! ├── types.rs    - Request and response types
//! ├── register.rs - POST /users/register
//! ├── login.rs    - POST /users/login
//! └── me.rs       - GET /users/me
//! ```

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Current-user handler
pub mod me;

// Re-export commonly used types
pub use types::{LoginRequest, RegisterRequest, RegisterResponse, TokenResponse, UserResponse};

// Re-export handlers
pub use login::login;
pub use me::me;
pub use register::register;
