//! Leaderboard HTTP client
//!
//! Resolves target URLs from the configured base URL and default path and
//! performs exactly one request per call. Response bodies are handed back
//! verbatim; parsing them is up to the caller (see [`Entry::parse_list`]).
//!
//! [`Entry::parse_list`]: crate::entry::Entry::parse_list

pub mod form;
pub mod transport;

use crate::config::Config;
use crate::entry::Entry;
use crate::error::{LeaderboardError, Result};
use std::collections::BTreeMap;
use std::time::Duration;

pub use form::encode_form;
pub use transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport};

/// Join `base_url` and a path with exactly one separating `/`
///
/// `path` falls back to `default_path` when absent or empty. A `/` is
/// inserted unless `base_url` ends with one or the effective path starts
/// with one; if both do, the double slash is kept.
///
/// # Errors
///
/// Returns [`LeaderboardError::Configuration`] if `base_url` is empty.
pub fn resolve_url(base_url: &str, default_path: &str, path: Option<&str>) -> Result<String> {
    if base_url.is_empty() {
        return Err(LeaderboardError::Configuration(
            "base URL is not set".to_string(),
        ));
    }

    let path = match path {
        Some(path) if !path.is_empty() => path,
        _ => default_path,
    };

    let separator = if base_url.ends_with('/') || path.starts_with('/') {
        ""
    } else {
        "/"
    };

    Ok(format!("{base_url}{separator}{path}"))
}

/// Client for the leaderboard backend
///
/// Holds read-only configuration, so one client can serve any number of
/// concurrent calls.
#[derive(Debug, Clone)]
pub struct LeaderboardClient<T = ReqwestTransport> {
    base_url: String,
    default_path: String,
    transport: T,
}

impl LeaderboardClient<ReqwestTransport> {
    /// Create a client backed by reqwest from the loaded configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = ReqwestTransport::new(Duration::from_secs(config.timeout_secs))?;
        Ok(Self::with_transport(
            config.base_url.clone(),
            config.default_path.clone(),
            transport,
        ))
    }
}

impl<T: Transport> LeaderboardClient<T> {
    /// Create a client over an arbitrary transport
    pub fn with_transport(
        base_url: impl Into<String>,
        default_path: impl Into<String>,
        transport: T,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            default_path: default_path.into(),
            transport,
        }
    }

    /// Configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Configured default path
    pub fn default_path(&self) -> &str {
        &self.default_path
    }

    /// Underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolve the URL a call with `path` would target
    pub fn resolve_url(&self, path: Option<&str>) -> Result<String> {
        resolve_url(&self.base_url, &self.default_path, path).inspect_err(|err| {
            log::error!("{err}");
        })
    }

    /// GET the resource and return its body
    ///
    /// Transport and backend failures are logged and yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`LeaderboardError::Configuration`] if no base URL is set;
    /// no request is made in that case.
    pub async fn get(&self, path: Option<&str>) -> Result<Option<String>> {
        settle(self.try_get(path).await)
    }

    /// POST `fields` form-encoded and return the response body
    ///
    /// Same contract as [`get`](Self::get).
    pub async fn post(
        &self,
        fields: &BTreeMap<String, String>,
        path: Option<&str>,
    ) -> Result<Option<String>> {
        settle(self.try_post(fields, path).await)
    }

    /// POST a single entry
    pub async fn submit(&self, entry: &Entry, path: Option<&str>) -> Result<Option<String>> {
        self.post(&entry.to_field_map(), path).await
    }

    /// GET the resource, reporting every failure as an error
    pub async fn try_get(&self, path: Option<&str>) -> Result<String> {
        let url = self.resolve_url(path)?;
        self.execute(HttpRequest {
            method: Method::Get,
            url,
            form: None,
        })
        .await
    }

    /// POST `fields`, reporting every failure as an error
    pub async fn try_post(
        &self,
        fields: &BTreeMap<String, String>,
        path: Option<&str>,
    ) -> Result<String> {
        let url = self.resolve_url(path)?;
        self.execute(HttpRequest {
            method: Method::Post,
            url,
            form: Some(encode_form(fields)),
        })
        .await
    }

    async fn execute(&self, request: HttpRequest) -> Result<String> {
        log::debug!("{} {}", request.method, request.url);
        let url = request.url.clone();

        let response = self.transport.send(request).await.inspect_err(|err| {
            log::warn!("Request to {url} failed: {err}");
        })?;

        if response.status >= 400 {
            let err = LeaderboardError::Backend {
                status: response.status,
                body: response.body,
            };
            log::warn!("Request to {url} rejected: {err}");
            return Err(err);
        }

        log::debug!("{url} answered {} ({} bytes)", response.status, response.body.len());
        Ok(response.body)
    }
}

/// Map transport and backend failures to "no data"; configuration errors pass through
fn settle(outcome: Result<String>) -> Result<Option<String>> {
    match outcome {
        Ok(body) => Ok(Some(body)),
        Err(err @ LeaderboardError::Configuration(_)) => Err(err),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    /// Replays one scripted outcome and records every request it sees
    struct ScriptedTransport {
        outcome: fn() -> Result<HttpResponse>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl ScriptedTransport {
        fn new(outcome: fn() -> Result<HttpResponse>) -> Self {
            Self {
                outcome,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Transport for ScriptedTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
            self.requests.lock().unwrap().push(request);
            (self.outcome)()
        }
    }

    /// Fails the test if any request reaches the network layer
    #[derive(Default)]
    struct UnreachableTransport {
        invoked: AtomicBool,
    }

    impl Transport for UnreachableTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
            self.invoked.store(true, Ordering::SeqCst);
            panic!("network layer invoked for {}", request.url);
        }
    }

    fn ok_empty_list() -> Result<HttpResponse> {
        Ok(HttpResponse {
            status: 200,
            body: "[]".to_string(),
        })
    }

    fn not_found() -> Result<HttpResponse> {
        Ok(HttpResponse {
            status: 404,
            body: "not found".to_string(),
        })
    }

    fn server_error() -> Result<HttpResponse> {
        Ok(HttpResponse {
            status: 500,
            body: "boom".to_string(),
        })
    }

    fn created() -> Result<HttpResponse> {
        Ok(HttpResponse {
            status: 201,
            body: "65f0c0ffee".to_string(),
        })
    }

    fn connection_refused() -> Result<HttpResponse> {
        Err(LeaderboardError::Transport(
            "connection failed: Connection refused".to_string(),
        ))
    }

    #[test]
    fn test_resolve_inserts_single_separator() {
        for (base, path) in [
            ("https://x.io", "scores"),
            ("https://x.io/api", "v1/scores"),
            ("http://localhost:3000", "leaderboard"),
        ] {
            let url = resolve_url(base, "", Some(path)).unwrap();
            assert_eq!(url, format!("{base}/{path}"));
        }
    }

    #[test]
    fn test_resolve_uses_existing_separator() {
        assert_eq!(
            resolve_url("https://x.io", "", Some("/scores")).unwrap(),
            "https://x.io/scores"
        );
        assert_eq!(
            resolve_url("https://x.io/", "", Some("scores")).unwrap(),
            "https://x.io/scores"
        );
        // Both sides supply one: no deduplication
        assert_eq!(
            resolve_url("https://x.io/", "", Some("/scores")).unwrap(),
            "https://x.io//scores"
        );
    }

    #[test]
    fn test_resolve_falls_back_to_default_path() {
        assert_eq!(
            resolve_url("https://x.io/", "scores", None).unwrap(),
            "https://x.io/scores"
        );
        assert_eq!(
            resolve_url("https://x.io", "scores", Some("")).unwrap(),
            "https://x.io/scores"
        );
        assert_eq!(
            resolve_url("https://x.io", "scores", Some("weekly")).unwrap(),
            "https://x.io/weekly"
        );
        assert_eq!(resolve_url("https://x.io", "", None).unwrap(), "https://x.io/");
    }

    #[test]
    fn test_resolve_requires_base_url() {
        for path in [None, Some(""), Some("scores"), Some("/scores")] {
            let err = resolve_url("", "scores", path).unwrap_err();
            assert!(matches!(err, LeaderboardError::Configuration(_)));
        }
    }

    #[tokio::test]
    async fn test_get_without_base_url_never_touches_network() {
        let client = LeaderboardClient::with_transport("", "scores", UnreachableTransport::default());

        let err = client.get(None).await.unwrap_err();
        assert!(matches!(err, LeaderboardError::Configuration(_)));

        let err = client
            .post(&Entry::new("alice", 1.0).to_field_map(), Some("scores"))
            .await
            .unwrap_err();
        assert!(matches!(err, LeaderboardError::Configuration(_)));

        assert!(!client.transport.invoked.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_get_success_returns_body_verbatim() {
        let client =
            LeaderboardClient::with_transport("https://x.io", "scores", ScriptedTransport::new(ok_empty_list));

        let body = client.get(None).await.unwrap();

        assert_eq!(body.as_deref(), Some("[]"));
        assert_eq!(
            client.transport.requests(),
            vec![HttpRequest {
                method: Method::Get,
                url: "https://x.io/scores".to_string(),
                form: None,
            }]
        );
    }

    #[tokio::test]
    async fn test_backend_error_yields_no_data() {
        let client =
            LeaderboardClient::with_transport("https://x.io", "scores", ScriptedTransport::new(not_found));

        assert_eq!(client.get(Some("/missing")).await.unwrap(), None);

        match client.try_get(Some("/missing")).await.unwrap_err() {
            LeaderboardError::Backend { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "not found");
            }
            other => panic!("unexpected error: {other}"),
        }

        // One request per call, no retries
        assert_eq!(client.transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_server_error_treated_like_client_error() {
        let client =
            LeaderboardClient::with_transport("https://x.io", "scores", ScriptedTransport::new(server_error));

        assert_eq!(client.get(None).await.unwrap(), None);
        assert_eq!(client.try_get(None).await.unwrap_err().status(), Some(500));
    }

    #[tokio::test]
    async fn test_transport_error_yields_no_data() {
        let client = LeaderboardClient::with_transport(
            "https://x.io",
            "scores",
            ScriptedTransport::new(connection_refused),
        );

        assert_eq!(client.get(None).await.unwrap(), None);
        assert!(matches!(
            client.try_get(None).await.unwrap_err(),
            LeaderboardError::Transport(_)
        ));
        assert_eq!(client.transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_post_sends_form_encoded_fields() {
        let client =
            LeaderboardClient::with_transport("https://x.io/api/", "scores", ScriptedTransport::new(created));
        let entry = Entry::new("Zoë & co", 1234.5);

        let body = client.submit(&entry, None).await.unwrap();

        assert_eq!(body.as_deref(), Some("65f0c0ffee"));
        let requests = client.transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].url, "https://x.io/api/scores");
        assert_eq!(
            requests[0].form.as_deref(),
            Some("_id=&name=Zo%C3%AB%20%26%20co&score=1234.5&timestamp=")
        );
    }

    #[tokio::test]
    async fn test_post_backend_error_yields_no_data() {
        let client =
            LeaderboardClient::with_transport("https://x.io", "scores", ScriptedTransport::new(not_found));

        let body = client.post(&BTreeMap::new(), Some("scores")).await.unwrap();

        assert_eq!(body, None);
        assert_eq!(client.transport.requests()[0].form.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_post_transport_error_yields_no_data() {
        let client = LeaderboardClient::with_transport(
            "https://x.io",
            "scores",
            ScriptedTransport::new(connection_refused),
        );
        let fields = Entry::new("alice", 10.0).to_field_map();

        assert_eq!(client.post(&fields, None).await.unwrap(), None);
        assert!(matches!(
            client.try_post(&fields, None).await.unwrap_err(),
            LeaderboardError::Transport(_)
        ));

        // One attempt per call, no retries
        let requests = client.transport.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests.iter().all(|r| r.method == Method::Post));
    }

    #[tokio::test]
    async fn test_concurrent_calls_are_independent() {
        let client =
            LeaderboardClient::with_transport("https://x.io", "scores", ScriptedTransport::new(ok_empty_list));

        let (a, b) = tokio::join!(client.get(Some("daily")), client.get(Some("weekly")));

        assert_eq!(a.unwrap().as_deref(), Some("[]"));
        assert_eq!(b.unwrap().as_deref(), Some("[]"));
        let mut urls: Vec<_> = client.transport.requests().into_iter().map(|r| r.url).collect();
        urls.sort();
        assert_eq!(urls, ["https://x.io/daily", "https://x.io/weekly"]);
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            base_url: "https://scores.example".to_string(),
            default_path: "top".to_string(),
            ..Config::default()
        };

        let client = LeaderboardClient::from_config(&config).unwrap();

        assert_eq!(client.base_url(), "https://scores.example");
        assert_eq!(client.default_path(), "top");
        assert_eq!(client.resolve_url(None).unwrap(), "https://scores.example/top");
    }
}
