//! Letters Module
//!
//! Everything about letters: the search query compiler, the letter store,
//! the per-user rate limiter, the creation service that composes them
//! inside one transaction, and the HTTP handlers.
//!
//! # Module Structure
//!
//! ```text
//! letters/
//! ├── mod.rs        - Module exports and documentation
//! ├── query.rs      - Search query compiler (predicates + bind params)
//! ├── store.rs      - Letter persistence and aggregate reads
//! ├── rate_limit.rs - Per-user creation cooldown under a row lock
//! ├── service.rs    - Creation orchestration (one transaction)
//! └── handlers.rs   - HTTP handlers for the letter routes
//! ```
//!
//! # Creation Flow
//!
//! `Start → lock user row → rate check → {denied → abort} |
//! {allowed → insert letter → record send time → commit}`
//!
//! The user row lock is held from the rate check through commit, so two
//! concurrent creations by the same user serialize and the second one
//! observes the first one's timestamp.

/// Search query compiler
pub mod query;

/// Letter persistence and aggregate reads
pub mod store;

/// Per-user creation cooldown
pub mod rate_limit;

/// Creation orchestration
pub mod service;

/// HTTP handlers for letter routes
pub mod handlers;

// Re-export commonly used types
pub use query::{CompiledSearch, SearchParams, SortOrder};
pub use service::CreateLetterRequest;
pub use store::{Letter, LetterWithSignatures};
