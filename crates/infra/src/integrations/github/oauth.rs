//! Authorization code exchange against GitHub's OAuth endpoints.

use async_trait::async_trait;
use authflow_common::auth::{OAuthClient, OAuthConfig, TokenSet};
use authflow_common::http::HttpClient;
use authflow_core::CodeExchanger;
use authflow_domain::{Config, Result};

use crate::errors::InfraError;

/// `CodeExchanger` backed by the shared OAuth client.
#[derive(Debug, Clone)]
pub struct GitHubOAuth {
    client: OAuthClient,
}

impl GitHubOAuth {
    /// Create the adapter from application configuration.
    ///
    /// # Errors
    /// Returns `AuthFlowError::Config` if an endpoint or the redirect URL is
    /// not a valid URL.
    pub fn new(config: &Config, http: HttpClient) -> Result<Self> {
        let oauth = OAuthConfig::new(
            config.client.client_id.clone(),
            config.client.client_secret.clone(),
            &config.provider.authorization_endpoint,
            &config.provider.token_endpoint,
            &config.redirect_url(),
            &config.provider.scopes,
        )
        .map_err(InfraError::from)?;

        Ok(Self { client: OAuthClient::new(oauth, http) })
    }
}

#[async_trait]
impl CodeExchanger for GitHubOAuth {
    fn authorization_url(&self) -> String {
        self.client.authorization_url()
    }

    async fn exchange_code(&self, code: &str) -> Result<TokenSet> {
        Ok(self.client.exchange_code(code).await.map_err(InfraError::from)?)
    }
}

#[cfg(test)]
mod tests {
    use authflow_domain::AuthFlowError;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn config_for(server: &MockServer) -> Config {
        let mut config = Config::default();
        config.client.client_id = "Iv1.test".into();
        config.client.client_secret = "secret".into();
        config.provider.token_endpoint = format!("{}/login/oauth/access_token", server.uri());
        config
    }

    #[test]
    fn authorization_url_uses_configured_client() {
        let mut config = Config::default();
        config.client.client_id = "Iv1.test".into();
        config.provider.scopes = vec!["read:user".into(), "user:email".into()];

        let oauth = GitHubOAuth::new(&config, HttpClient::new().unwrap()).unwrap();

        assert_eq!(
            oauth.authorization_url(),
            "https://github.com/login/oauth/authorize?client_id=Iv1.test\
             &redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Foauth2%2Fcallback\
             &scope=read%3Auser%2Cuser%3Aemail"
        );
    }

    #[test]
    fn invalid_endpoint_is_a_config_error() {
        let mut config = Config::default();
        config.provider.token_endpoint = "not a url".into();

        let err = GitHubOAuth::new(&config, HttpClient::new().unwrap()).unwrap_err();
        assert!(matches!(err, AuthFlowError::Config(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn exchanges_code_for_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login/oauth/access_token"))
            .and(body_string_contains("code=good-code"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "gho_exchange",
                "token_type": "bearer",
                "scope": "user"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let oauth = GitHubOAuth::new(&config_for(&server), HttpClient::new().unwrap()).unwrap();
        let tokens = oauth.exchange_code("good-code").await.unwrap();

        assert_eq!(tokens.secret(), "gho_exchange");
    }

    #[tokio::test]
    async fn rejected_code_is_a_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "error": "bad_verification_code",
                "error_description": "The code passed is incorrect or expired."
            })))
            .mount(&server)
            .await;

        let oauth = GitHubOAuth::new(&config_for(&server), HttpClient::new().unwrap()).unwrap();
        let err = oauth.exchange_code("stale").await.unwrap_err();

        assert!(matches!(err, AuthFlowError::Provider(_)), "got {err:?}");
        assert!(err.to_string().contains("bad_verification_code"));
    }
}
