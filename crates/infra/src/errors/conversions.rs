//! Conversions from external infrastructure errors into domain errors.

use authflow_common::auth::OAuthClientError;
use authflow_common::http::HttpClientError;
use authflow_domain::AuthFlowError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub AuthFlowError);

impl From<InfraError> for AuthFlowError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<AuthFlowError> for InfraError {
    fn from(value: AuthFlowError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoAuthFlowError {
    fn into_authflow(self) -> AuthFlowError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → AuthFlowError */
/* -------------------------------------------------------------------------- */

impl IntoAuthFlowError for HttpError {
    fn into_authflow(self) -> AuthFlowError {
        if self.is_timeout() {
            return AuthFlowError::Network(format!("HTTP request timed out: {self}"));
        }

        if self.is_connect() {
            return AuthFlowError::Network(format!("HTTP connection failure: {self}"));
        }

        if self.is_decode() {
            return AuthFlowError::Provider(format!("undecodable response: {self}"));
        }

        if let Some(status) = self.status() {
            let message = format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status")
            );

            return match status.as_u16() {
                401 | 403 => AuthFlowError::Auth(message),
                400..=499 => AuthFlowError::InvalidInput(message),
                _ => AuthFlowError::Provider(message),
            };
        }

        AuthFlowError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_authflow())
    }
}

/* -------------------------------------------------------------------------- */
/* HttpClientError → AuthFlowError */
/* -------------------------------------------------------------------------- */

impl IntoAuthFlowError for HttpClientError {
    fn into_authflow(self) -> AuthFlowError {
        match self {
            HttpClientError::Build(err) => {
                AuthFlowError::Config(format!("failed to build HTTP client: {err}"))
            }
            HttpClientError::InvalidUserAgent(agent) => {
                AuthFlowError::Config(format!("invalid user agent: {agent}"))
            }
            HttpClientError::InvalidRequest(err) => {
                AuthFlowError::Internal(format!("invalid request: {err}"))
            }
            // Keep "METHOD url: cause" so the operator sees which call failed
            transport @ HttpClientError::Transport { .. } => {
                AuthFlowError::Network(transport.to_string())
            }
        }
    }
}

impl From<HttpClientError> for InfraError {
    fn from(value: HttpClientError) -> Self {
        InfraError(value.into_authflow())
    }
}

/* -------------------------------------------------------------------------- */
/* OAuthClientError → AuthFlowError */
/* -------------------------------------------------------------------------- */

impl IntoAuthFlowError for OAuthClientError {
    fn into_authflow(self) -> AuthFlowError {
        match self {
            OAuthClientError::RequestFailed(err) => err.into_authflow(),
            OAuthClientError::MissingCode => AuthFlowError::InvalidInput(self.to_string()),
            OAuthClientError::ConfigError(_) => AuthFlowError::Config(self.to_string()),
            OAuthClientError::OAuthError(_)
            | OAuthClientError::UnexpectedStatus { .. }
            | OAuthClientError::MissingAccessToken
            | OAuthClientError::ParseError(_) => AuthFlowError::Provider(self.to_string()),
        }
    }
}

impl From<OAuthClientError> for InfraError {
    fn from(value: OAuthClientError) -> Self {
        InfraError(value.into_authflow())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use authflow_common::auth::OAuthError;
    use reqwest::{Client, StatusCode};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn oauth_error_document_maps_to_provider_error() {
        let err = OAuthClientError::OAuthError(OAuthError {
            error: "bad_verification_code".into(),
            error_description: Some("The code passed is incorrect or expired.".into()),
            error_uri: None,
        });

        let mapped: AuthFlowError = InfraError::from(err).into();
        match mapped {
            AuthFlowError::Provider(msg) => {
                assert!(msg.contains("bad_verification_code"));
                assert!(msg.contains("incorrect or expired"));
            }
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[test]
    fn missing_code_maps_to_invalid_input() {
        let mapped: AuthFlowError = InfraError::from(OAuthClientError::MissingCode).into();
        assert!(matches!(mapped, AuthFlowError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn transport_failure_names_the_request() {
        // Nothing listens on port 9 of the loopback interface
        let http = authflow_common::http::HttpClient::new().unwrap();
        let err = http
            .send(http.request(reqwest::Method::GET, "http://127.0.0.1:9/user"))
            .await
            .unwrap_err();

        let mapped: AuthFlowError = InfraError::from(err).into();
        match mapped {
            AuthFlowError::Network(msg) => assert!(msg.starts_with("GET http://127.0.0.1:9/user")),
            other => panic!("expected network error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn http_status_401_maps_to_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(StatusCode::UNAUTHORIZED))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err();

        let mapped: AuthFlowError = InfraError::from(error).into();
        match mapped {
            AuthFlowError::Auth(msg) => assert!(msg.contains("401")),
            other => panic!("expected auth error, got {other:?}"),
        }
    }
}
