//! Profile fetcher

use std::sync::Arc;

use authflow_domain::constants::ACCESS_TOKEN_PARAM;
use authflow_domain::UserProfile;
use axum::extract::{RawQuery, State};
use axum::Json;

use super::errors::ProfileFailure;
use super::first_query_value;
use crate::context::AppContext;

/// Return the authenticated user's profile as JSON
///
/// Reads the first `access_token` query value.
pub async fn welcome(
    State(ctx): State<Arc<AppContext>>,
    RawQuery(query): RawQuery,
) -> Result<Json<UserProfile>, ProfileFailure> {
    let access_token = first_query_value(query.as_deref(), ACCESS_TOKEN_PARAM);
    let profile = ctx.auth_flow.welcome(access_token.as_deref()).await?;
    Ok(Json(profile))
}
