//! Common building blocks shared across Authflow crates.
//!
//! - [`auth`]: OAuth 2.0 authorization code primitives (authorization URL,
//!   code exchange, token types)
//! - [`http`]: outbound HTTP client with a composable interceptor chain

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod auth;
pub mod http;

// Re-export commonly used types
pub use auth::{OAuthClient, OAuthClientError, OAuthConfig, OAuthError, TokenSet};
pub use http::{
    HttpClient, HttpClientBuilder, HttpClientError, RequestDumpInterceptor, RequestInterceptor,
};
