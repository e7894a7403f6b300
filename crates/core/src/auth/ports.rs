//! Port interfaces for the identity provider
//!
//! These traits define the boundaries between the flow logic and the
//! adapters that talk to a concrete provider.

use async_trait::async_trait;
use authflow_common::auth::TokenSet;
use authflow_domain::{Result, UserProfile};

/// Authorization side of the provider
#[async_trait]
pub trait CodeExchanger: Send + Sync {
    /// URL the user agent is sent to for consent
    fn authorization_url(&self) -> String;

    /// Trade an authorization code for an access token
    async fn exchange_code(&self, code: &str) -> Result<TokenSet>;
}

/// Resource side of the provider
#[async_trait]
pub trait ProfileFetcher: Send + Sync {
    /// Fetch the profile of the user the bearer token belongs to
    async fn fetch_profile(&self, access_token: &str) -> Result<UserProfile>;
}
