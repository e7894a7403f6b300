//! # Authflow App
//!
//! HTTP application layer - routes, server and entry point.
//!
//! This crate contains:
//! - Route handlers for `/login`, `/oauth2/callback` and `/welcome`
//! - Application context (dependency injection)
//! - Server startup, browser launch and graceful shutdown
//!
//! ## Architecture
//! - Depends on `common`, `domain`, `core`, and `infra`
//! - Wires GitHub adapters into the core flow service
//! - Serves static files for every path without a route

pub mod context;
pub mod routes;
pub mod server;
pub mod utils;

// Re-export for convenience
pub use context::AppContext;
pub use routes::router;
pub use server::{run, serve, serve_with_shutdown};
