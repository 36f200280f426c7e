//! Geekbot HTTP API client
//!
//! [`GeekbotApi`] holds the credential and endpoint settings and can be shared
//! freely. Each operation opens its own [`GeekbotSession`], which owns one HTTP
//! client for the duration of a request and releases it when dropped, so the
//! connection is closed on every path out of a tool call, errors included.

use crate::config::{Config, DEFAULT_BASE_URL, DEFAULT_REPORTS_LIMIT, DEFAULT_TIMEOUT_SECS};
use crate::{GeekbotError, Result};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;

/// Filters for `GET /reports/`.
///
/// Presence is explicit: a `None` field is left out of the query string while
/// `Some(0)` is sent as-is. `question_ids` is only sent when non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportQuery {
    /// Only reports of this standup
    pub standup_id: Option<i64>,
    /// Only reports of this member
    pub user_id: Option<String>,
    /// Only reports submitted after this Unix timestamp
    pub after: Option<i64>,
    /// Only reports submitted before this Unix timestamp
    pub before: Option<i64>,
    /// Only answers to these questions
    pub question_ids: Vec<i64>,
    /// Maximum number of reports returned
    pub limit: u32,
}

impl Default for ReportQuery {
    fn default() -> Self {
        Self {
            standup_id: None,
            user_id: None,
            after: None,
            before: None,
            question_ids: Vec::new(),
            limit: DEFAULT_REPORTS_LIMIT,
        }
    }
}

impl ReportQuery {
    /// Query with the given page size and no filters
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Query string pairs in a stable order, `limit` first
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("limit", self.limit.to_string())];

        if let Some(standup_id) = self.standup_id {
            params.push(("standup_id", standup_id.to_string()));
        }
        if let Some(user_id) = &self.user_id {
            params.push(("user_id", user_id.clone()));
        }
        if let Some(after) = self.after {
            params.push(("after", after.to_string()));
        }
        if let Some(before) = self.before {
            params.push(("before", before.to_string()));
        }
        for question_id in &self.question_ids {
            params.push(("question_ids", question_id.to_string()));
        }

        params
    }
}

/// Read-only client for the Geekbot v1 API
#[derive(Clone)]
pub struct GeekbotApi {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl std::fmt::Debug for GeekbotApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeekbotApi")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl GeekbotApi {
    /// Client for the public API root with the default timeout
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Client configured from a loaded [`Config`]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_key.clone())
            .with_base_url(config.base_url.clone())
            .with_timeout(config.timeout)
    }

    /// Point the client at another API root (a local fake in tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// API root without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Open a session for one or more requests.
    ///
    /// # Errors
    ///
    /// Returns [`GeekbotError::Http`] if the HTTP client cannot be built
    /// (for instance when no TLS backend is available).
    pub fn open(&self) -> Result<GeekbotSession<'_>> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("geekbot-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;
        tracing::trace!("Opened Geekbot API session for {}", self.base_url);
        Ok(GeekbotSession { api: self, client })
    }
}

/// One scoped connection to the API; closed when dropped
pub struct GeekbotSession<'a> {
    api: &'a GeekbotApi,
    client: reqwest::Client,
}

impl GeekbotSession<'_> {
    /// `GET /standups/`: every standup visible to the API key
    pub async fn get_standups(&self) -> Result<Vec<Value>> {
        self.get_list("standups", &[]).await
    }

    /// `GET /reports/` with the given filters
    pub async fn get_reports(&self, query: &ReportQuery) -> Result<Vec<Value>> {
        self.get_list("reports", &query.to_params()).await
    }

    /// Release the session explicitly
    pub fn close(self) {}

    async fn get_list(&self, resource: &str, params: &[(&str, String)]) -> Result<Vec<Value>> {
        let url = format!("{}/{}/", self.api.base_url, resource);
        tracing::debug!("GET {} with {} query parameter(s)", url, params.len());

        let mut request = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.api.api_key.as_str())
            .header(CONTENT_TYPE, "application/json");
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!("GET {} failed with HTTP {}", url, status.as_u16());
            return Err(GeekbotError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        match serde_json::from_str::<Value>(&body) {
            Ok(Value::Array(items)) => {
                tracing::debug!("GET {} returned {} item(s)", url, items.len());
                Ok(items)
            }
            Ok(other) => Err(GeekbotError::malformed(
                "response",
                format!("expected a JSON array from /{resource}/, got {}", json_kind(&other)),
            )),
            Err(e) => Err(GeekbotError::malformed(
                "response",
                format!("invalid JSON from /{resource}/: {e}"),
            )),
        }
    }
}

impl Drop for GeekbotSession<'_> {
    fn drop(&mut self) {
        tracing::trace!("Closed Geekbot API session for {}", self.api.base_url);
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
