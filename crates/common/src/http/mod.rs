//! Outbound HTTP client
//!
//! [`HttpClient`] wraps `reqwest` and runs every request through an ordered
//! chain of [`RequestInterceptor`]s. Call sites never know which
//! interceptors are installed; logging is added or removed at construction
//! time only.

pub mod client;
pub mod interceptor;

pub use client::{HttpClient, HttpClientBuilder, HttpClientError};
pub use interceptor::{dump_request, Exchange, RequestDumpInterceptor, RequestInterceptor};
