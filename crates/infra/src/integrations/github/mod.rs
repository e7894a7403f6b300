//! GitHub integration
//!
//! Adapters implementing the core provider ports against GitHub's OAuth App
//! endpoints and REST API. Any provider speaking the same dialect (for
//! instance a GitHub Enterprise host) works by overriding the endpoints in
//! configuration.

pub mod client;
pub mod oauth;

pub use client::GitHubClient;
pub use oauth::GitHubOAuth;
