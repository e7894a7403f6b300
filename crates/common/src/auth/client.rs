//! OAuth 2.0 client for the authorization code grant
//!
//! Handles the two provider-facing steps of the flow:
//! - Browser authorization URL building
//! - Authorization code exchange (server-to-server)

use oauth2::AuthorizationCode;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};

use super::types::{OAuthConfig, OAuthError, TokenResponse, TokenSet};
use crate::http::{HttpClient, HttpClientError};

/// Error type for OAuth client operations
#[derive(Debug)]
pub enum OAuthClientError {
    /// HTTP request failed before a response arrived
    RequestFailed(HttpClientError),

    /// OAuth server returned an error document
    OAuthError(OAuthError),

    /// Non-success status without a recognisable error document
    UnexpectedStatus { status: StatusCode, body: String },

    /// Success response without an access token
    MissingAccessToken,

    /// Callback carried no authorization code
    MissingCode,

    /// Failed to parse response
    ParseError(String),

    /// Invalid configuration
    ConfigError(String),
}

impl std::fmt::Display for OAuthClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RequestFailed(e) => write!(f, "HTTP request failed: {e}"),
            Self::OAuthError(e) => write!(f, "OAuth error: {e}"),
            Self::UnexpectedStatus { status, body } if body.is_empty() => {
                write!(f, "token endpoint returned {status}")
            }
            Self::UnexpectedStatus { status, body } => {
                write!(f, "token endpoint returned {status}: {body}")
            }
            Self::MissingAccessToken => write!(f, "server response missing access_token"),
            Self::MissingCode => write!(f, "authorization code missing from callback"),
            Self::ParseError(msg) => write!(f, "Parse error: {msg}"),
            Self::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for OAuthClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RequestFailed(e) => Some(e),
            Self::OAuthError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<HttpClientError> for OAuthClientError {
    fn from(err: HttpClientError) -> Self {
        Self::RequestFailed(err)
    }
}

/// OAuth 2.0 client for confidential (secret-holding) applications
///
/// Works with GitHub and other RFC 6749 providers.
#[derive(Debug, Clone)]
pub struct OAuthClient {
    config: OAuthConfig,
    http: HttpClient,
}

impl OAuthClient {
    /// Create a new OAuth client
    ///
    /// Outbound requests go through `http`, so any interceptors installed on
    /// it also see the token exchange.
    #[must_use]
    pub fn new(config: OAuthConfig, http: HttpClient) -> Self {
        Self { config, http }
    }

    /// Build the authorization URL the browser is redirected to
    ///
    /// Carries `client_id`, `redirect_uri` and the comma-joined `scope`,
    /// each URL-encoded.
    ///
    /// # Examples
    /// ```
    /// use authflow_common::auth::{OAuthClient, OAuthConfig};
    /// use authflow_common::http::HttpClient;
    ///
    /// let config = OAuthConfig::new(
    ///     "abc",
    ///     "secret",
    ///     "https://github.com/login/oauth/authorize",
    ///     "https://github.com/login/oauth/access_token",
    ///     "http://localhost:8080/oauth2/callback",
    ///     &["user".to_string()],
    /// )
    /// .unwrap();
    /// let client = OAuthClient::new(config, HttpClient::new().unwrap());
    /// assert_eq!(
    ///     client.authorization_url(),
    ///     "https://github.com/login/oauth/authorize?client_id=abc\
    ///      &redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Foauth2%2Fcallback&scope=user"
    /// );
    /// ```
    #[must_use]
    pub fn authorization_url(&self) -> String {
        let scope_string = self.config.scope_string();
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.redirect_url.url().as_str()),
            ("scope", scope_string.as_str()),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let base = self.config.auth_url.url().as_str();
        let separator = if base.contains('?') { '&' } else { '?' };

        format!("{base}{separator}{query_string}")
    }

    /// Exchange an authorization code for an access token
    ///
    /// Sent once; the caller decides what a failure means for the user.
    ///
    /// # Errors
    /// Returns error if:
    /// - The code is empty
    /// - The token endpoint is unreachable
    /// - The provider answers with an error document or error status
    /// - The response carries no access token
    pub async fn exchange_code(&self, code: &str) -> Result<TokenSet, OAuthClientError> {
        if code.is_empty() {
            return Err(OAuthClientError::MissingCode);
        }
        let code = AuthorizationCode::new(code.to_string());

        let request_body = [
            ("grant_type", "authorization_code"),
            ("code", code.secret().as_str()),
            ("redirect_uri", self.config.redirect_url.url().as_str()),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.secret().as_str()),
        ];

        let request = self
            .http
            .request(Method::POST, self.config.token_url.url().clone())
            .header(ACCEPT, "application/json")
            .form(&request_body);
        let response = self.http.send(request).await?;

        let status = response.status();
        let is_form = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| {
                value.starts_with("application/x-www-form-urlencoded")
                    || value.starts_with("text/plain")
            });
        let body = response.bytes().await.map_err(|e| OAuthClientError::ParseError(e.to_string()))?;

        let parsed = if is_form {
            Ok(TokenResponse::from_form(&body))
        } else {
            serde_json::from_slice::<TokenResponse>(&body)
        };

        let mut token_response = match parsed {
            Ok(response) => response,
            Err(_) if !status.is_success() => {
                return Err(OAuthClientError::UnexpectedStatus {
                    status,
                    body: String::from_utf8_lossy(&body).trim().to_string(),
                });
            }
            Err(e) => return Err(OAuthClientError::ParseError(e.to_string())),
        };

        // Error documents win over the status code
        if let Some(error) = token_response.take_error() {
            return Err(OAuthClientError::OAuthError(error));
        }

        if !status.is_success() {
            return Err(OAuthClientError::UnexpectedStatus {
                status,
                body: String::from_utf8_lossy(&body).trim().to_string(),
            });
        }

        match token_response.access_token.take().filter(|token| !token.is_empty()) {
            Some(access_token) => {
                Ok(TokenSet::new(access_token, token_response.token_type, token_response.scope))
            }
            None => Err(OAuthClientError::MissingAccessToken),
        }
    }

    /// Get the configured redirect URI
    #[must_use]
    pub fn redirect_uri(&self) -> &str {
        self.config.redirect_url.url().as_str()
    }

    /// Get a reference to the OAuth configuration
    #[must_use]
    pub fn config(&self) -> &OAuthConfig {
        &self.config
    }
}
