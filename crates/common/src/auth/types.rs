//! OAuth 2.0 types and structures
//!
//! Token, configuration and error-document types for the authorization code
//! grant.

use std::fmt;

use oauth2::{AccessToken, AuthUrl, ClientId, ClientSecret, RedirectUrl, Scope, TokenUrl};
use serde::Deserialize;

use super::client::OAuthClientError;

/// Access token issued by the token endpoint
///
/// The token is never persisted. `Debug` only shows a redacted form.
#[derive(Clone)]
pub struct TokenSet {
    /// Bearer token for API authentication
    pub access_token: AccessToken,

    /// Token type as reported by the provider (usually "bearer")
    pub token_type: String,

    /// Granted scopes, in the provider's own separator convention
    pub scope: Option<String>,
}

impl TokenSet {
    /// Create a new `TokenSet`; a missing token type defaults to "bearer".
    #[must_use]
    pub fn new(access_token: String, token_type: Option<String>, scope: Option<String>) -> Self {
        Self {
            access_token: AccessToken::new(access_token),
            token_type: token_type.unwrap_or_else(|| "bearer".to_string()),
            scope,
        }
    }

    /// Raw bearer string.
    #[must_use]
    pub fn secret(&self) -> &str {
        self.access_token.secret()
    }

    /// Log-safe rendering of the access token.
    #[must_use]
    pub fn redacted(&self) -> String {
        redact_token(self.secret())
    }
}

impl fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSet")
            .field("access_token", &self.redacted())
            .field("token_type", &self.token_type)
            .field("scope", &self.scope)
            .finish()
    }
}

/// Show at most a 4-character prefix of a credential plus its length.
#[must_use]
pub fn redact_token(token: &str) -> String {
    let len = token.chars().count();
    if len <= 8 {
        return format!("[redacted] ({len} chars)");
    }
    let prefix: String = token.chars().take(4).collect();
    format!("{prefix}... ({len} chars)")
}

/// Token endpoint response
///
/// Fields are optional because some providers (GitHub among them) answer a
/// failed exchange with `200 OK` and an error document in the same shape.
#[derive(Debug, Default, Deserialize)]
pub struct TokenResponse {
    /// Bearer token; absent on failure.
    #[serde(default)]
    pub access_token: Option<String>,
    /// Usually `bearer`.
    #[serde(default)]
    pub token_type: Option<String>,
    /// Scopes actually granted, comma-separated on GitHub.
    #[serde(default)]
    pub scope: Option<String>,
    /// OAuth error code such as `bad_verification_code`.
    #[serde(default)]
    pub error: Option<String>,
    /// Human-readable companion of `error`.
    #[serde(default)]
    pub error_description: Option<String>,
    /// Link to the provider's documentation of `error`.
    #[serde(default)]
    pub error_uri: Option<String>,
}

impl TokenResponse {
    /// Parse an `application/x-www-form-urlencoded` token response.
    #[must_use]
    pub fn from_form(body: &[u8]) -> Self {
        let mut response = Self::default();
        for (key, value) in url::form_urlencoded::parse(body) {
            let value = Some(value.into_owned());
            match key.as_ref() {
                "access_token" => response.access_token = value,
                "token_type" => response.token_type = value,
                "scope" => response.scope = value,
                "error" => response.error = value,
                "error_description" => response.error_description = value,
                "error_uri" => response.error_uri = value,
                _ => {}
            }
        }
        response
    }

    /// Error document carried by this response, if any.
    pub fn take_error(&mut self) -> Option<OAuthError> {
        self.error.take().filter(|error| !error.is_empty()).map(|error| OAuthError {
            error,
            error_description: self.error_description.take(),
            error_uri: self.error_uri.take(),
        })
    }
}

/// OAuth client configuration
///
/// Endpoint URLs are validated on construction through the `oauth2` crate's
/// typed wrappers.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    /// Public client identifier.
    pub client_id: ClientId,
    /// Client secret sent on the token exchange.
    pub client_secret: ClientSecret,
    /// Authorization endpoint the user agent is sent to.
    pub auth_url: AuthUrl,
    /// Token endpoint for the code exchange.
    pub token_url: TokenUrl,
    /// Callback URL registered with the provider.
    pub redirect_url: RedirectUrl,
    /// Requested scopes.
    pub scopes: Vec<Scope>,
}

impl OAuthConfig {
    /// Create a new OAuth configuration
    ///
    /// # Errors
    /// Returns `OAuthClientError::ConfigError` if any URL fails to parse.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        auth_url: &str,
        token_url: &str,
        redirect_url: &str,
        scopes: &[String],
    ) -> Result<Self, OAuthClientError> {
        let invalid = |what: &str, err: url::ParseError| {
            OAuthClientError::ConfigError(format!("invalid {what} URL: {err}"))
        };

        Ok(Self {
            client_id: ClientId::new(client_id.into()),
            client_secret: ClientSecret::new(client_secret.into()),
            auth_url: AuthUrl::new(auth_url.to_string())
                .map_err(|err| invalid("authorization", err))?,
            token_url: TokenUrl::new(token_url.to_string()).map_err(|err| invalid("token", err))?,
            redirect_url: RedirectUrl::new(redirect_url.to_string())
                .map_err(|err| invalid("redirect", err))?,
            scopes: scopes.iter().cloned().map(Scope::new).collect(),
        })
    }

    /// Get scopes as a comma-separated string
    #[must_use]
    pub fn scope_string(&self) -> String {
        self.scopes.iter().map(|scope| scope.as_str()).collect::<Vec<_>>().join(",")
    }
}

/// OAuth error response from authorization server
///
/// Standard OAuth 2.0 error response format (RFC 6749 §5.2).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OAuthError {
    /// Error code.
    pub error: String,
    /// Optional explanation from the provider.
    pub error_description: Option<String>,
    /// Optional documentation link.
    pub error_uri: Option<String>,
}

impl fmt::Display for OAuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error_description {
            Some(desc) => write!(f, "{}: {}", self.error, desc),
            None => write!(f, "{}", self.error),
        }
    }
}

impl std::error::Error for OAuthError {}
