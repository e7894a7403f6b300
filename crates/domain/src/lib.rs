//! # Authflow Domain
//!
//! Domain types shared by every Authflow crate.
//!
//! This crate contains:
//! - The domain error type and `Result` alias
//! - Configuration structures
//! - The authenticated user profile returned by the provider
//! - Route paths and configuration defaults
//!
//! ## Architecture
//! - No dependencies on other Authflow crates
//! - Only external dependencies allowed
//! - Pure data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
