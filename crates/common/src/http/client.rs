use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use thiserror::Error;
use tracing::debug;

use super::interceptor::{Exchange, RequestInterceptor};

/// Errors raised while building or sending an outbound request.
#[derive(Debug, Error)]
pub enum HttpClientError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("invalid user agent: {0}")]
    InvalidUserAgent(String),

    #[error("invalid request: {0}")]
    InvalidRequest(#[source] reqwest::Error),

    #[error("{method} {url}: {source}")]
    Transport {
        method: Method,
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// HTTP client that passes each request through an interceptor chain.
///
/// Requests are sent once. There is no retry, and no timeout unless one
/// was configured on the builder.
///
/// Default headers (including the user agent) are written into each request
/// before the interceptors run, so they see the headers that go on the wire.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    default_headers: HeaderMap,
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl HttpClient {
    /// Start building a new HTTP client.
    #[must_use]
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration and no interceptors.
    pub fn new() -> Result<Self, HttpClientError> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Number of installed interceptors.
    #[must_use]
    pub fn interceptor_count(&self) -> usize {
        self.interceptors.len()
    }

    /// Build the request, run the interceptor chain, and execute it.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, HttpClientError> {
        let mut request = builder.build().map_err(HttpClientError::InvalidRequest)?;

        for (name, value) in &self.default_headers {
            if !request.headers().contains_key(name) {
                request.headers_mut().insert(name.clone(), value.clone());
            }
        }

        for interceptor in &self.interceptors {
            interceptor.before_send(&mut request);
        }

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        let started = Instant::now();
        let result = self.client.execute(request).await;
        let exchange = Exchange { method: &method, url: &url, elapsed: started.elapsed() };

        match result {
            Ok(response) => {
                debug!(%method, %url, status = %response.status(), "received HTTP response");
                for interceptor in self.interceptors.iter().rev() {
                    interceptor.after_response(&exchange, &response);
                }
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                for interceptor in self.interceptors.iter().rev() {
                    interceptor.on_error(&exchange, &err);
                }
                Err(HttpClientError::Transport { method, url: url.to_string(), source: err })
            }
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient").field("interceptors", &self.interceptors.len()).finish()
    }
}

/// Builder for [`HttpClient`].
#[derive(Default)]
pub struct HttpClientBuilder {
    timeout: Option<Duration>,
    user_agent: Option<String>,
    default_headers: Option<HeaderMap>,
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl HttpClientBuilder {
    /// Overall timeout per request; unset means no timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// `User-Agent` sent with every request.
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Headers added to every request that does not set them itself.
    #[must_use]
    pub fn default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers = Some(headers);
        self
    }

    /// Append an interceptor. `before_send` hooks run in registration order,
    /// response and error hooks in reverse order.
    #[must_use]
    pub fn interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Fails if the user agent is not a valid header value or the TLS
    /// backend cannot be initialised.
    pub fn build(self) -> Result<HttpClient, HttpClientError> {
        let mut default_headers = self.default_headers.unwrap_or_default();

        if let Some(agent) = self.user_agent {
            let value = HeaderValue::try_from(agent.as_str())
                .map_err(|_| HttpClientError::InvalidUserAgent(agent.clone()))?;
            default_headers.insert(USER_AGENT, value);
        }

        let mut builder = ReqwestClient::builder().default_headers(default_headers.clone());

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(HttpClientError::Build)?;

        Ok(HttpClient { client, default_headers, interceptors: self.interceptors })
    }
}
