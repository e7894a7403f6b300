//! OAuth redirect target

use std::sync::Arc;

use authflow_domain::AuthFlowError;
use axum::extract::{RawQuery, State};
use axum::response::Response;

use super::errors::ExchangeFailure;
use super::{first_query_value, found};
use crate::context::AppContext;

/// Query parameters the provider appends to the redirect URL
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CallbackParams {
    /// Authorization code to exchange.
    pub code: Option<String>,
    /// Set instead of `code` when the user denies consent.
    pub error: Option<String>,
    /// Human-readable companion of `error`.
    pub error_description: Option<String>,
}

impl CallbackParams {
    /// Read the parameters from a raw query string, first value wins.
    #[must_use]
    pub fn from_query(query: Option<&str>) -> Self {
        Self {
            code: first_query_value(query, "code"),
            error: first_query_value(query, "error"),
            error_description: first_query_value(query, "error_description"),
        }
    }
}

/// Exchange the authorization code and forward the token to `/welcome`
///
/// Any failure ends the request with `400 Bad Request` and the error text.
pub async fn callback(
    State(ctx): State<Arc<AppContext>>,
    RawQuery(query): RawQuery,
) -> Result<Response, ExchangeFailure> {
    let params = CallbackParams::from_query(query.as_deref());

    if let Some(error) = params.error {
        let message = match params.error_description {
            Some(description) => format!("{error}: {description}"),
            None => error,
        };
        return Err(ExchangeFailure(AuthFlowError::Provider(message)));
    }

    let location = ctx.auth_flow.complete_callback(params.code.as_deref()).await?;
    Ok(found(location))
}
