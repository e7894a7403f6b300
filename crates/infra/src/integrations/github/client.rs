//! GitHub REST API client
//!
//! Only the authenticated-user endpoint is needed: `GET {api_base}/user`
//! with the bearer token obtained from the code exchange.

use async_trait::async_trait;
use authflow_common::http::HttpClient;
use authflow_core::ProfileFetcher;
use authflow_domain::{AuthFlowError, Result, UserProfile};
use reqwest::header::ACCEPT;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::errors::InfraError;

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";

/// GitHub API client implementing `ProfileFetcher`
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: HttpClient,
    user_url: Url,
}

/// Error body GitHub sends with non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

impl GitHubClient {
    /// Create a client for the API rooted at `api_base_url`.
    ///
    /// # Errors
    /// Returns `AuthFlowError::Config` if `api_base_url` is not a valid URL.
    pub fn new(api_base_url: &str, http: HttpClient) -> Result<Self> {
        let user_url = format!("{}/user", api_base_url.trim_end_matches('/'));
        let user_url = Url::parse(&user_url).map_err(|e| {
            AuthFlowError::Config(format!("Invalid API base URL '{api_base_url}': {e}"))
        })?;

        Ok(Self { http, user_url })
    }

    /// Endpoint serving the authenticated user.
    #[must_use]
    pub fn user_url(&self) -> &Url {
        &self.user_url
    }
}

#[async_trait]
impl ProfileFetcher for GitHubClient {
    async fn fetch_profile(&self, access_token: &str) -> Result<UserProfile> {
        let request = self
            .http
            .request(Method::GET, self.user_url.clone())
            .bearer_auth(access_token)
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .header(API_VERSION_HEADER, API_VERSION);

        let response = self.http.send(request).await.map_err(InfraError::from)?;
        let status = response.status();
        let body = response.bytes().await.map_err(InfraError::from)?;

        if !status.is_success() {
            return Err(status_error(&self.user_url, status, &body));
        }

        let profile: UserProfile = serde_json::from_slice(&body).map_err(|e| {
            AuthFlowError::Provider(format!("GET {}: invalid user document: {e}", self.user_url))
        })?;

        debug!(login = %profile.login, "decoded user profile");
        Ok(profile)
    }
}

/// `GET <url>: <status> <provider message>`
fn status_error(url: &Url, status: StatusCode, body: &[u8]) -> AuthFlowError {
    let message = serde_json::from_slice::<ApiError>(body)
        .map(|err| err.message)
        .unwrap_or_else(|_| String::from_utf8_lossy(body).trim().to_string());
    let text = format!("GET {url}: {status} {message}").trim_end().to_string();

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AuthFlowError::Auth(text),
        _ => AuthFlowError::Provider(text),
    }
}
