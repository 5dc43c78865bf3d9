//! Single-shot HTTP gateway to the backend REST API.
//!
//! One call, one request: no retries, no timeout and no idle connection
//! reuse. Every call is triggered by a discrete user action.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use shelfmark_core::StatusClass;

use crate::config::{resolve_base_url, Config};
use crate::error::{ClientError, ClientResult};

pub use reqwest::Method;

const USER_AGENT: &str = "shelfmark/0.1.0";

/// Status and parsed body of a backend response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// `None` when the body is empty or not valid JSON.
    pub body: Option<Value>,
}

impl ApiResponse {
    pub fn class(&self) -> StatusClass {
        StatusClass::from_status(self.status)
    }

    /// The `message` field of a JSON error body, if any.
    pub fn message(&self) -> Option<&str> {
        self.body
            .as_ref()
            .and_then(|body| body.get("message"))
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
    }
}

/// Anything that can carry one request to the backend.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Issue one request to `path` (relative to the base URL).
    ///
    /// `body`, when present, is sent as JSON. `auth_token`, when present,
    /// is attached as `Authorization: Bearer <token>`.
    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        auth_token: Option<&str>,
    ) -> ClientResult<ApiResponse>
    where
        B: Serialize + Sync + ?Sized;
}

/// Backend API client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            http,
            base_url: resolve_base_url(Some(base_url)),
        })
    }

    /// Create a client for the backend selected by `config`.
    pub fn from_config(config: &Config) -> ClientResult<Self> {
        Self::new(&config.base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Gateway for ApiClient {
    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        auth_token: Option<&str>,
    ) -> ClientResult<ApiResponse>
    where
        B: Serialize + Sync + ?Sized,
    {
        let url = self.url(path);
        log::debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = auth_token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|source| ClientError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status().as_u16();
        let body = match response.bytes().await {
            Ok(bytes) => serde_json::from_slice(&bytes).ok(),
            Err(e) => {
                log::warn!("Failed to read response body from {}: {}", url, e);
                None
            }
        };

        log::debug!("{} answered {}", url, status);
        Ok(ApiResponse { status, body })
    }
}
