//! Outbound HTTP client factory
//!
//! Every adapter in this crate sends through one [`HttpClient`] built here,
//! so interceptors configured once apply to the token exchange and the user
//! API alike.

use std::sync::Arc;
use std::time::Duration;

use authflow_common::http::{HttpClient, RequestDumpInterceptor};
use authflow_domain::{HttpConfig, Result};

use crate::errors::InfraError;

/// Build the shared HTTP client from configuration
///
/// Installs the request-dump interceptor when `dump_requests` is set and
/// applies `timeout_secs` when present.
///
/// # Errors
/// Returns `AuthFlowError::Config` if the TLS backend cannot be initialised.
pub fn build_http_client(config: &HttpConfig, user_agent: &str) -> Result<HttpClient> {
    let mut builder = HttpClient::builder().user_agent(user_agent);

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    if config.dump_requests {
        builder = builder.interceptor(Arc::new(RequestDumpInterceptor));
    }

    builder.build().map_err(|err| InfraError::from(err).into())
}
