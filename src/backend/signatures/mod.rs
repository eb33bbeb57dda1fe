//! Signatures Module
//!
//! The signature ledger (which user signed which letter) and the toggle
//! service that flips a signature inside one transaction.
//!
//! # Module Structure
//!
//! ```text
//! signatures/
//! ├── mod.rs      - Module exports and documentation
//! ├── ledger.rs   - Signature row operations
//! ├── service.rs  - Toggle orchestration (one transaction)
//! └── handlers.rs - HTTP handler for the toggle route
//! ```
//!
//! # Toggle Flow
//!
//! `Start → BeginTx → ReadIsSigned → {Signed → Delete | Unsigned → Insert}
//! → RecountSignatures → Commit`
//!
//! The recount happens inside the same transaction as the mutation, so
//! the count in the response is exactly the post-toggle state and no
//! outside reader ever observes the sequence mid-update.

/// Signature row operations
pub mod ledger;

/// Toggle orchestration
pub mod service;

/// HTTP handler for the toggle route
pub mod handlers;

// Re-export commonly used types
pub use service::ToggleOutcome;
