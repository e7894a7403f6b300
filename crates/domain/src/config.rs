//! Configuration management

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    CALLBACK_PATH, DEFAULT_BIND_ADDRESS, DEFAULT_BROWSER_DELAY_MS, DEFAULT_PUBLIC_URL,
    DEFAULT_SCOPE, DEFAULT_STATIC_DIR, DEFAULT_USER_AGENT, GITHUB_API_BASE_URL,
    GITHUB_AUTHORIZE_URL, GITHUB_PROVIDER, GITHUB_TOKEN_URL,
};

/// Application configuration
///
/// Loaded once at startup and shared read-only for the lifetime of the
/// process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
    pub client: ClientCredentials,
    pub http: HttpConfig,
}

impl Config {
    /// Redirect URL registered with the provider, derived from the public URL.
    #[must_use]
    pub fn redirect_url(&self) -> String {
        format!("{}{}", self.server.public_url.trim_end_matches('/'), CALLBACK_PATH)
    }
}

/// Local web server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the listener binds to.
    pub bind_address: String,
    /// Base URL the browser uses to reach this server.
    pub public_url: String,
    /// Directory served for `/` and any path without a dedicated route.
    pub static_dir: String,
    /// Open `public_url` in the default browser once listening.
    pub open_browser: bool,
    /// Delay before the browser is opened.
    pub browser_delay_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            public_url: DEFAULT_PUBLIC_URL.to_string(),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
            open_browser: true,
            browser_delay_ms: DEFAULT_BROWSER_DELAY_MS,
        }
    }
}

/// Identity provider endpoints and requested scopes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub name: String,
    pub authorization_endpoint: String,
    pub token_endpoint: String,
    /// Base URL of the REST API serving the authenticated-user document.
    pub api_base_url: String,
    pub scopes: Vec<String>,
    /// Sent on every outbound request; GitHub rejects requests without one.
    pub user_agent: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: GITHUB_PROVIDER.to_string(),
            authorization_endpoint: GITHUB_AUTHORIZE_URL.to_string(),
            token_endpoint: GITHUB_TOKEN_URL.to_string(),
            api_base_url: GITHUB_API_BASE_URL.to_string(),
            scopes: vec![DEFAULT_SCOPE.to_string()],
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// OAuth client credentials issued by the provider
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientCredentials {
    pub client_id: String,
    #[serde(skip_serializing)]
    pub client_secret: String,
}

impl ClientCredentials {
    /// Both values present; the provider rejects the flow otherwise.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[redacted]")
            .finish()
    }
}

/// Outbound HTTP configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Log every outbound request through the request-dump interceptor.
    pub dump_requests: bool,
    /// `None` keeps the HTTP library default (no timeout).
    pub timeout_secs: Option<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { dump_requests: true, timeout_secs: None }
    }
}
