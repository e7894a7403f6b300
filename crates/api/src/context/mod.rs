//! Application context - dependency injection container

use std::sync::Arc;

use authflow_core::AuthFlowService;
use authflow_domain::{Config, Result};
use authflow_infra::{build_http_client, GitHubClient, GitHubOAuth};
use tracing::info;

/// Application context - holds configuration and the flow service
///
/// Built once at startup and shared read-only by every request.
pub struct AppContext {
    /// Configuration loaded at startup.
    pub config: Arc<Config>,
    /// Flow service wired to the GitHub adapters.
    pub auth_flow: Arc<AuthFlowService>,
}

impl AppContext {
    /// Wire the GitHub adapters into the flow service
    ///
    /// Both adapters share one HTTP client, so the request-dump interceptor
    /// sees the token exchange and the user API call.
    ///
    /// # Errors
    /// Returns `AuthFlowError::Config` if an endpoint is not a valid URL or
    /// the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let http = build_http_client(&config.http, &config.provider.user_agent)?;

        let exchanger = GitHubOAuth::new(&config, http.clone())?;
        let profiles = GitHubClient::new(&config.provider.api_base_url, http)?;
        let auth_flow = AuthFlowService::new(Arc::new(exchanger), Arc::new(profiles));

        info!(
            provider = %config.provider.name,
            scopes = %config.provider.scopes.join(","),
            dump_requests = config.http.dump_requests,
            "application context initialised"
        );

        Ok(Self { config: Arc::new(config), auth_flow: Arc::new(auth_flow) })
    }
}
