//! Authorization code flow service - core business logic

use std::sync::Arc;

use authflow_domain::constants::{ACCESS_TOKEN_PARAM, WELCOME_PATH};
use authflow_domain::{AuthFlowError, Result, UserProfile};
use tracing::info;

use super::ports::{CodeExchanger, ProfileFetcher};

/// Drives the three browser-initiated steps of the flow
///
/// Holds no per-user state: everything that links the steps travels in the
/// redirect URLs.
pub struct AuthFlowService {
    exchanger: Arc<dyn CodeExchanger>,
    profiles: Arc<dyn ProfileFetcher>,
}

impl AuthFlowService {
    /// Create a new flow service
    #[must_use]
    pub fn new(exchanger: Arc<dyn CodeExchanger>, profiles: Arc<dyn ProfileFetcher>) -> Self {
        Self { exchanger, profiles }
    }

    /// Target of the login redirect
    #[must_use]
    pub fn login_redirect(&self) -> String {
        self.exchanger.authorization_url()
    }

    /// Exchange the callback's code and return the welcome redirect target
    ///
    /// An absent or empty code fails without contacting the provider.
    pub async fn complete_callback(&self, code: Option<&str>) -> Result<String> {
        let code = code.filter(|code| !code.is_empty()).ok_or_else(|| {
            AuthFlowError::InvalidInput("authorization code missing from callback".to_string())
        })?;

        let tokens = self.exchanger.exchange_code(code).await?;

        info!(
            access_token = %tokens.redacted(),
            token_type = %tokens.token_type,
            scope = tokens.scope.as_deref().unwrap_or(""),
            "exchanged authorization code for access token"
        );

        Ok(welcome_location(tokens.secret()))
    }

    /// Fetch the profile for the token carried by the welcome request
    pub async fn welcome(&self, access_token: Option<&str>) -> Result<UserProfile> {
        let access_token = access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AuthFlowError::Auth("access token missing from request".to_string()))?;

        let profile = self.profiles.fetch_profile(access_token).await?;
        info!(login = %profile.login, id = profile.id, "fetched authenticated user profile");

        Ok(profile)
    }
}

/// `/welcome?access_token=<token>` with the token form-encoded.
#[must_use]
pub fn welcome_location(access_token: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(ACCESS_TOKEN_PARAM, access_token)
        .finish();
    format!("{WELCOME_PATH}?{query}")
}
