//! # Authflow Core
//!
//! Flow logic of the authorization code demo, free of HTTP details.
//!
//! This crate contains:
//! - Port interfaces for the identity provider (token exchange, profile API)
//! - [`AuthFlowService`], which drives login → callback → welcome
//!
//! ## Architecture Principles
//! - Depends only on `authflow-common` and `authflow-domain`
//! - No server or HTTP client code
//! - Provider access only through traits

pub mod auth;

// Re-export specific items to avoid ambiguity
pub use auth::ports::{CodeExchanger, ProfileFetcher};
pub use auth::service::{welcome_location, AuthFlowService};
