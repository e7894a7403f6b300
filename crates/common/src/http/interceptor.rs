//! Request interceptors
//!
//! An interceptor observes (and may adjust) every request an
//! [`HttpClient`](super::HttpClient) sends. All hooks have no-op defaults so
//! an implementation only overrides what it needs.

use std::borrow::Cow;
use std::fmt::Write as _;
use std::time::Duration;

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE, COOKIE, PROXY_AUTHORIZATION};
use reqwest::{Method, Request, Response};
use tracing::{info, warn};
use url::Url;

const REDACTED: &str = "[redacted]";

/// Form fields and query parameters whose values never reach the logs.
const SENSITIVE_FIELDS: &[&str] =
    &["client_secret", "code", "access_token", "refresh_token", "code_verifier", "password"];

/// Metadata about a completed exchange, passed to the post-send hooks.
#[derive(Debug, Clone, Copy)]
pub struct Exchange<'a> {
    /// Request method.
    pub method: &'a Method,
    /// Request URL, unredacted.
    pub url: &'a Url,
    /// Time from send until the response head or the error arrived.
    pub elapsed: Duration,
}

/// Hook points around an outbound request.
pub trait RequestInterceptor: Send + Sync {
    /// Called with the fully built request right before it is executed.
    fn before_send(&self, _request: &mut Request) {}

    /// Called when the server produced a response (any status).
    fn after_response(&self, _exchange: &Exchange<'_>, _response: &Response) {}

    /// Called when no response was obtained.
    fn on_error(&self, _exchange: &Exchange<'_>, _error: &reqwest::Error) {}
}

/// Logs a wire-style dump of each outbound request.
///
/// Credentials are redacted: authorization and cookie headers, and the
/// values of [`SENSITIVE_FIELDS`] in the query string or a form body.
///
/// The dump includes the client's default headers such as `User-Agent`.
/// Transport-level headers that hyper adds on the connection
/// (`content-length`, `accept-encoding`) are not shown.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestDumpInterceptor;

impl RequestInterceptor for RequestDumpInterceptor {
    fn before_send(&self, request: &mut Request) {
        info!(target: "authflow::http", dump = %dump_request(request), "outbound request");
    }

    fn after_response(&self, exchange: &Exchange<'_>, response: &Response) {
        info!(
            target: "authflow::http",
            method = %exchange.method,
            url = %redact_url(exchange.url),
            status = %response.status(),
            elapsed_ms = u64::try_from(exchange.elapsed.as_millis()).unwrap_or(u64::MAX),
            "outbound response"
        );
    }

    fn on_error(&self, exchange: &Exchange<'_>, error: &reqwest::Error) {
        warn!(
            target: "authflow::http",
            method = %exchange.method,
            url = %redact_url(exchange.url),
            elapsed_ms = u64::try_from(exchange.elapsed.as_millis()).unwrap_or(u64::MAX),
            error = %error,
            "outbound request failed"
        );
    }
}

/// Render a request the way it goes over the wire, with secrets masked.
#[must_use]
pub fn dump_request(request: &Request) -> String {
    let url = redact_url(request.url());
    let mut target = url.path().to_string();
    if let Some(query) = url.query() {
        target.push('?');
        target.push_str(query);
    }

    let mut out = format!("{} {} HTTP/1.1\r\n", request.method(), target);
    if let Some(host) = url.host_str() {
        match url.port() {
            Some(port) => {
                let _ = write!(out, "Host: {host}:{port}\r\n");
            }
            None => {
                let _ = write!(out, "Host: {host}\r\n");
            }
        }
    }

    for (name, value) in request.headers() {
        let shown = if name == AUTHORIZATION || name == PROXY_AUTHORIZATION || name == COOKIE {
            REDACTED.to_string()
        } else {
            value.to_str().unwrap_or("<binary>").to_string()
        };
        let _ = write!(out, "{name}: {shown}\r\n");
    }
    out.push_str("\r\n");

    if let Some(bytes) = request.body().and_then(reqwest::Body::as_bytes) {
        if is_form(request.headers().get(CONTENT_TYPE)) {
            out.push_str(&redact_form(bytes));
        } else {
            out.push_str(&String::from_utf8_lossy(bytes));
        }
    }

    out
}

fn is_form(content_type: Option<&HeaderValue>) -> bool {
    content_type
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

fn is_sensitive(field: &str) -> bool {
    SENSITIVE_FIELDS.iter().any(|candidate| candidate.eq_ignore_ascii_case(field))
}

fn redact_pairs<'a>(pairs: impl Iterator<Item = (Cow<'a, str>, Cow<'a, str>)>) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        if is_sensitive(&key) {
            serializer.append_pair(&key, REDACTED);
        } else {
            serializer.append_pair(&key, &value);
        }
    }
    serializer.finish()
}

fn redact_form(body: &[u8]) -> String {
    redact_pairs(url::form_urlencoded::parse(body))
}

fn redact_url(url: &Url) -> Url {
    let mut redacted = url.clone();
    if url.query().is_some() {
        let query = redact_pairs(url.query_pairs());
        redacted.set_query(Some(&query));
    }
    redacted
}
