//! OAuth 2.0 authorization code primitives
//!
//! Confidential-client flavour of the authorization code grant: the
//! client secret is sent with the code exchange, no PKCE and no refresh.
//!
//! # Module Organization
//!
//! - **[`types`]**: configuration, token and error types
//! - **[`client`]**: authorization URL construction and code exchange
//!
//! # Usage Example
//!
//! ```no_run
//! use authflow_common::auth::{OAuthClient, OAuthConfig};
//! use authflow_common::http::HttpClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = OAuthConfig::new(
//!     "client-id",
//!     "client-secret",
//!     "https://github.com/login/oauth/authorize",
//!     "https://github.com/login/oauth/access_token",
//!     "http://localhost:8080/oauth2/callback",
//!     &["user".to_string()],
//! )?;
//! let client = OAuthClient::new(config, HttpClient::new()?);
//!
//! println!("Open this URL in your browser: {}", client.authorization_url());
//!
//! // ... the provider redirects back with ?code=...
//! let tokens = client.exchange_code("code-from-callback").await?;
//! println!("Token type: {}", tokens.token_type);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

// Re-export commonly used types
pub use client::{OAuthClient, OAuthClientError};
pub use types::{redact_token, OAuthConfig, OAuthError, TokenResponse, TokenSet};
