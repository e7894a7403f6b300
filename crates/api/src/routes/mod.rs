//! HTTP routes
//!
//! | Path | Handler |
//! |---|---|
//! | `/login` | [`login::login`] |
//! | `/oauth2/callback` | [`callback::callback`] |
//! | `/welcome` | [`welcome::welcome`] |
//! | anything else | static files from `server.static_dir` |

pub mod callback;
pub mod errors;
pub mod login;
pub mod welcome;

use std::sync::Arc;

use authflow_domain::constants::{CALLBACK_PATH, LOGIN_PATH, WELCOME_PATH};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::context::AppContext;

pub use errors::{ExchangeFailure, ProfileFailure};

/// Build the application router
#[must_use]
pub fn router(ctx: Arc<AppContext>) -> Router {
    let static_files = ServeDir::new(&ctx.config.server.static_dir);

    Router::new()
        .route(LOGIN_PATH, get(login::login))
        .route(CALLBACK_PATH, get(callback::callback))
        .route(WELCOME_PATH, get(welcome::welcome))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

/// First value of `key` in a raw query string.
///
/// Repeated keys are not an error; later values are ignored.
pub(crate) fn first_query_value(query: Option<&str>, key: &str) -> Option<String> {
    let query = query?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
}

/// `302 Found` to `location`.
///
/// `axum::response::Redirect` only offers 303/307/308.
pub(crate) fn found(location: String) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
