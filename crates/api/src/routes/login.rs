//! Login initiator

use std::sync::Arc;

use axum::extract::State;
use axum::response::Response;
use tracing::debug;

use super::found;
use crate::context::AppContext;

/// Redirect the browser to the provider's authorization endpoint
pub async fn login(State(ctx): State<Arc<AppContext>>) -> Response {
    let location = ctx.auth_flow.login_redirect();
    debug!(%location, "redirecting to authorization endpoint");
    found(location)
}
