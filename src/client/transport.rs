//! HTTP transport used by the leaderboard client
//!
//! The client performs exactly one exchange per call through a [`Transport`].
//! [`ReqwestTransport`] is the production implementation; tests plug in
//! in-memory transports.

use crate::config::DEFAULT_CONNECT_TIMEOUT_SECS;
use crate::error::{LeaderboardError, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use std::fmt;
use std::future::Future;
use std::time::Duration;

/// Content type of the POST body
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP method of a leaderboard request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Retrieve entries
    Get,
    /// Submit an entry
    Post,
}

impl Method {
    /// Upper-case method name as sent on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Request method
    pub method: Method,
    /// Fully resolved target URL
    pub url: String,
    /// Form-encoded body; only set for POST
    pub form: Option<String>,
}

/// Status and raw body text of a completed exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body text
    pub body: String,
}

/// Performs a single HTTP exchange
///
/// Implementations return `Err(LeaderboardError::Transport)` for network
/// failures and `Ok` for every exchange that produced a status code,
/// including 4xx/5xx. Status interpretation is left to the client.
pub trait Transport: Send + Sync {
    /// Perform the exchange described by `request`
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse>> + Send;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport with the given total request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be built (e.g., TLS backend failure).
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS).min(timeout))
            .user_agent(concat!("leaderboard-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LeaderboardError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Wrap an already configured reqwest client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self
                .client
                .post(&request.url)
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(request.form.unwrap_or_default()),
        };

        let response = builder
            .header(ACCEPT, "application/json, text/plain, */*")
            .send()
            .await?;

        let status = response.status().as_u16();
        let failed = response.status().is_client_error() || response.status().is_server_error();

        // Consumes the response, releasing the connection on every path
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            // The status already decides the outcome; keep it
            Err(err) if failed => {
                log::debug!("Dropping unreadable body of HTTP {status}: {err}");
                return Ok(HttpResponse {
                    status,
                    body: String::new(),
                });
            }
            Err(err) => return Err(err.into()),
        };

        let body = match String::from_utf8(bytes.to_vec()) {
            Ok(body) => body,
            Err(_) if failed => String::from_utf8_lossy(&bytes).into_owned(),
            Err(err) => {
                return Err(LeaderboardError::Deserialization(format!(
                    "response body is not valid UTF-8: {err}"
                )))
            }
        };

        Ok(HttpResponse { status, body })
    }
}
