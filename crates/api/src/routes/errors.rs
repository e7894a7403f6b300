//! Error responses for the flow routes
//!
//! The body is always the error's display text as `text/plain`.

use authflow_domain::AuthFlowError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::warn;

/// Failed code exchange, answered with `400 Bad Request`.
#[derive(Debug)]
pub struct ExchangeFailure(pub AuthFlowError);

/// Failed profile fetch, answered with `500 Internal Server Error`.
#[derive(Debug)]
pub struct ProfileFailure(pub AuthFlowError);

impl From<AuthFlowError> for ExchangeFailure {
    fn from(err: AuthFlowError) -> Self {
        Self(err)
    }
}

impl From<AuthFlowError> for ProfileFailure {
    fn from(err: AuthFlowError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ExchangeFailure {
    fn into_response(self) -> Response {
        warn!(kind = self.0.label(), error = %self.0, "token exchange failed");
        (StatusCode::BAD_REQUEST, self.0.to_string()).into_response()
    }
}

impl IntoResponse for ProfileFailure {
    fn into_response(self) -> Response {
        warn!(kind = self.0.label(), error = %self.0, "profile fetch failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use axum::http::header::CONTENT_TYPE;

    use super::*;

    #[tokio::test]
    async fn exchange_failure_is_plain_text_400() {
        let failure = ExchangeFailure(AuthFlowError::Provider("bad_verification_code".into()));
        let response = failure.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers()[CONTENT_TYPE].to_str().unwrap().starts_with("text/plain"));
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(body, "Provider error: bad_verification_code");
    }

    #[tokio::test]
    async fn profile_failure_is_500() {
        let response = ProfileFailure(AuthFlowError::Auth("401".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
