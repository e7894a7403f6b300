//! In-memory fakes for the provider ports

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use authflow_common::auth::TokenSet;
use authflow_core::{CodeExchanger, ProfileFetcher};
use authflow_domain::{AuthFlowError, Result as DomainResult, UserProfile};

/// Fake `CodeExchanger` that records every code it is asked to exchange.
///
/// Accepts exactly one code; anything else fails like GitHub's
/// `bad_verification_code` response.
#[derive(Clone)]
pub struct FakeExchanger {
    valid_code: String,
    access_token: String,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeExchanger {
    /// Create a fake that trades `valid_code` for `access_token`.
    pub fn new(valid_code: &str, access_token: &str) -> Self {
        Self {
            valid_code: valid_code.to_string(),
            access_token: access_token.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Codes received so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CodeExchanger for FakeExchanger {
    fn authorization_url(&self) -> String {
        "https://provider.test/authorize?client_id=demo".to_string()
    }

    async fn exchange_code(&self, code: &str) -> DomainResult<TokenSet> {
        self.calls.lock().unwrap().push(code.to_string());
        if code == self.valid_code {
            Ok(TokenSet::new(
                self.access_token.clone(),
                Some("bearer".to_string()),
                Some("user".to_string()),
            ))
        } else {
            Err(AuthFlowError::Provider(
                "OAuth error: bad_verification_code".to_string(),
            ))
        }
    }
}

/// Fake `ProfileFetcher` serving one profile for one token.
#[derive(Clone)]
pub struct FakeProfiles {
    token: String,
    profile: UserProfile,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeProfiles {
    /// Serve `profile` to requests bearing `token`.
    pub fn new(token: &str, profile: UserProfile) -> Self {
        Self {
            token: token.to_string(),
            profile,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Tokens received so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProfileFetcher for FakeProfiles {
    async fn fetch_profile(&self, access_token: &str) -> DomainResult<UserProfile> {
        self.calls.lock().unwrap().push(access_token.to_string());
        if access_token == self.token {
            Ok(self.profile.clone())
        } else {
            Err(AuthFlowError::Auth(
                "GET https://api.github.test/user: 401 Unauthorized Bad credentials".to_string(),
            ))
        }
    }
}

/// Minimal profile document.
pub fn octocat() -> UserProfile {
    serde_json::from_value(serde_json::json!({
        "login": "octocat",
        "id": 583231,
        "name": "The Octocat",
        "plan": { "name": "free" }
    }))
    .unwrap()
}
