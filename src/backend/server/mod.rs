//! Server Module
//!
//! This module contains the code for initializing and configuring the Axum
//! HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Environment configuration and pool setup
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `AppConfig::from_env()` reads the database URL,
//!    JWT secret, port, and CORS origin once at startup
//! 2. **Pool Setup**: connects to PostgreSQL and runs migrations
//! 3. **State Creation**: builds `AppState` with the pool and signing keys
//! 4. **Router Creation**: configures all routes and the CORS layer
//!
//! Configuration is never read from the environment inside core logic;
//! components receive the pool and keys explicitly through `AppState`.

/// Application state management
pub mod state;

/// Environment configuration and database pool setup
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::AppConfig;
pub use init::create_app;
pub use state::AppState;
