//! Jamf Pro API client
//!
//! Acquires a bearer token over HTTP Basic auth, caches it for the lifetime
//! of the client, and issues GET/POST/PUT requests under the `/JSSResource`
//! namespace. Failures surface once to the caller; there is no retry,
//! pooling, or pagination layer.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::config::JamfConfig;
use crate::errors::{JamfError, JamfResult};

/// Statuses treated as success by every call; anything else is an error.
const SUCCESS_CODES: [StatusCode; 2] = [StatusCode::OK, StatusCode::CREATED];

const TOKEN_PATH: &str = "/api/v1/auth/token";
const RESOURCE_PATH: &str = "/JSSResource";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

/// Parsed body of a successful resource call.
///
/// The split is driven by the response `Content-Type`, not the configured
/// [`Format`](crate::Format): JSON bodies are decoded into
/// [`serde_json::Value`], anything else (XML included) is returned as raw
/// text.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceBody {
    Json(serde_json::Value),
    Text(String),
}

impl ResourceBody {
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    pub fn into_json(self) -> Option<serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Json(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

/// Authenticated client for the Jamf Pro REST API.
///
/// All requests share one underlying [`reqwest::Client`]. The bearer token
/// is fetched lazily by [`get_token`](Self::get_token) and cached for the
/// lifetime of the instance; concurrent first callers share a single
/// in-flight fetch. Resource responses are never cached.
pub struct JamfClient {
    config: JamfConfig,
    http: reqwest::Client,
    token: OnceCell<String>,
}

impl JamfClient {
    /// Create a new client from a validated configuration.
    ///
    /// # Errors
    /// Returns `JamfError::Config` if the HTTP transport cannot be built.
    pub fn new(config: JamfConfig) -> JamfResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| JamfError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, http, token: OnceCell::new() })
    }

    /// Whether a bearer token has been fetched and cached.
    pub fn has_token(&self) -> bool {
        self.token.get().is_some()
    }

    /// Fetch and cache the bearer token.
    ///
    /// Returns the cached token without a network call when one is already
    /// present. Otherwise issues one `POST {base_url}/api/v1/auth/token`
    /// with HTTP Basic auth; concurrent first callers share that single
    /// fetch. On failure the token stays unset, so a later call can retry.
    ///
    /// # Errors
    /// * `JamfError::Status` if the endpoint answers outside {200, 201}
    /// * `JamfError::Transport` on network failure or an unreadable body
    pub async fn get_token(&self) -> JamfResult<&str> {
        let token = self.token.get_or_try_init(|| self.fetch_token()).await?;
        Ok(token.as_str())
    }

    async fn fetch_token(&self) -> JamfResult<String> {
        let url = format!("{}{}", self.config.base_url, TOKEN_PATH);
        debug!(url = %url, "requesting bearer token");

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.config.user, Some(&self.config.password))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(JamfError::transport)?;

        let response = check_status(response)?;
        let body: TokenResponse = response.json().await.map_err(JamfError::transport)?;

        debug!("bearer token acquired");
        Ok(body.token)
    }

    /// Execute a GET request against `{base_url}/JSSResource{path}`.
    ///
    /// `path` is appended verbatim and must carry its own leading slash and
    /// query parameters. The `Accept` header follows the configured
    /// [`Format`](crate::Format).
    ///
    /// # Errors
    /// * `JamfError::Status` on a status outside {200, 201}
    /// * `JamfError::Transport` on network failure or an unreadable body
    pub async fn get(&self, path: &str) -> JamfResult<ResourceBody> {
        let url = self.resource_url(path);
        debug!(url = %url, "GET request");

        let request = self
            .authorized(self.http.get(&url))
            .header(ACCEPT, self.config.format.accept_header());

        execute(request).await
    }

    /// Execute a POST request against `{base_url}/JSSResource{path}`.
    ///
    /// `body` is a pre-serialized payload; when it is empty no payload is
    /// attached at all. No `Accept` or `Content-Type` header is set beyond
    /// the transport defaults.
    ///
    /// # Errors
    /// Same as [`get`](Self::get).
    pub async fn post(&self, path: &str, body: &str) -> JamfResult<ResourceBody> {
        let url = self.resource_url(path);
        debug!(url = %url, payload = !body.is_empty(), "POST request");

        let mut request = self.authorized(self.http.post(&url));
        if !body.is_empty() {
            request = request.body(body.to_owned());
        }

        execute(request).await
    }

    /// Execute a PUT request against `{base_url}/JSSResource{path}`.
    ///
    /// `body` is always sent as the payload, even when empty, with
    /// `Content-Type: application/xml` and `Accept: */*`.
    ///
    /// # Errors
    /// Same as [`get`](Self::get).
    pub async fn put(&self, path: &str, body: &str) -> JamfResult<ResourceBody> {
        let url = self.resource_url(path);
        debug!(url = %url, "PUT request");

        let request = self
            .authorized(self.http.put(&url))
            .header(ACCEPT, "*/*")
            .header(CONTENT_TYPE, "application/xml")
            .body(body.to_owned());

        execute(request).await
    }

    fn resource_url(&self, path: &str) -> String {
        // Verbatim concatenation: slash handling is the caller's contract.
        format!("{}{}{}", self.config.base_url, RESOURCE_PATH, path)
    }

    /// Attach `Authorization: Bearer <token>` when a token has been cached.
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token.get() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

async fn execute(request: RequestBuilder) -> JamfResult<ResourceBody> {
    let response = request.send().await.map_err(JamfError::transport)?;
    let response = check_status(response)?;
    read_body(response).await
}

/// Fail on any status outside the success set. Early return: a bad status
/// never also produces a success outcome.
fn check_status(response: Response) -> JamfResult<Response> {
    let status = response.status();
    if SUCCESS_CODES.contains(&status) {
        Ok(response)
    } else {
        debug!(status = %status, "non-success response");
        Err(JamfError::from_status(status))
    }
}

async fn read_body(response: Response) -> JamfResult<ResourceBody> {
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.contains("json"))
        .unwrap_or(false);

    if is_json {
        let value = response.json().await.map_err(JamfError::transport)?;
        Ok(ResourceBody::Json(value))
    } else {
        let text = response.text().await.map_err(JamfError::transport)?;
        Ok(ResourceBody::Text(text))
    }
}
