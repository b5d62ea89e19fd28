//! Retrying HTTP client shared by outbound integrations

use std::time::Duration;

use mindset_domain::MindsetError;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, StatusCode};
use tracing::{debug, warn};

use crate::errors::InfraError;

/// Thin wrapper around `reqwest` with a request timeout and optional retries.
///
/// Retries apply to connection failures, timeouts, `5xx` and `429`
/// responses, with exponential backoff starting at `base_backoff`. A client
/// built with `max_attempts(1)` sends every request exactly once.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    max_attempts: usize,
    base_backoff: Duration,
}

impl HttpClient {
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    pub fn new() -> Result<Self, MindsetError> {
        Self::builder().build()
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Send `builder`, retrying transient failures. Non-retryable statuses
    /// are returned as responses for the caller to interpret.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, MindsetError> {
        let attempts = self.max_attempts;

        for attempt in 1..=attempts {
            let request = builder
                .try_clone()
                .ok_or_else(|| MindsetError::Internal("request body cannot be cloned".into()))?
                .build()
                .map_err(to_domain)?;

            let method = request.method().clone();
            let url = request.url().clone();
            debug!(attempt, %method, url = %url.path(), "sending HTTP request");

            let retries_left = attempt < attempts;
            match self.client.execute(request).await {
                Ok(response) => {
                    let status = response.status();
                    debug!(attempt, %status, "received HTTP response");

                    if retries_left && is_retryable_status(status) {
                        warn!(attempt, %status, "transient HTTP status, retrying");
                        self.sleep_before_retry(attempt).await;
                        continue;
                    }
                    return Ok(response);
                }
                Err(err) if retries_left && is_retryable_error(&err) => {
                    warn!(attempt, error = %err, "HTTP request failed, retrying");
                    self.sleep_before_retry(attempt).await;
                }
                Err(err) => return Err(to_domain(err)),
            }
        }

        Err(MindsetError::Internal("http client exhausted retries without a response".into()))
    }

    fn backoff_delay(&self, attempt: usize) -> Duration {
        let shift = u32::try_from(attempt.saturating_sub(1).min(8)).unwrap_or(8);
        self.base_backoff.saturating_mul(1u32 << shift)
    }

    async fn sleep_before_retry(&self, attempt: usize) {
        let delay = self.backoff_delay(attempt);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    max_attempts: usize,
    base_backoff: Duration,
    user_agent: Option<String>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_attempts: 1,
            base_backoff: Duration::from_millis(250),
            user_agent: Some(concat!("mindset/", env!("CARGO_PKG_VERSION")).to_string()),
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Total attempts per request (initial try + retries), at least one.
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    pub fn base_backoff(mut self, backoff: Duration) -> Self {
        self.base_backoff = backoff;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<HttpClient, MindsetError> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout).no_proxy();
        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder.build().map_err(to_domain)?;

        Ok(HttpClient { client, max_attempts: self.max_attempts, base_backoff: self.base_backoff })
    }
}

fn to_domain(err: reqwest::Error) -> MindsetError {
    InfraError::from(err).into()
}

fn is_retryable_status(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

fn is_retryable_error(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect() || err.is_request()
}
