//! # Authflow Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - Configuration loading (defaults, file, environment)
//! - The outbound HTTP client factory
//! - GitHub adapters for the token exchange and the user API
//! - Browser launching
//!
//! ## Architecture
//! - Implements traits defined in `authflow-core`
//! - Contains all "impure" code (I/O, network, processes)

pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;
pub mod platform;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::build_http_client;
pub use integrations::github::{GitHubClient, GitHubOAuth};
pub use platform::browser::{schedule_open, SystemOpener, UrlOpener};
