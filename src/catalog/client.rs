//! HTTP access to the catalog service.
//!
//! Read operations never surface transport, status or shape failures: they
//! substitute the fallback table and tag the result as [`Fetched::Fallback`].
//! The only error a caller sees from `get_tool` is a tool that exists
//! nowhere ([`Error::ToolNotFound`]).
//!
//! No caching, no retries, no in-flight de-duplication: every call is one
//! round trip. The client is cheap to clone and shares reqwest's pool.

use super::borrow::simulated_ack;
use super::fallback::{fallback_tools, find_fallback_tool};
use super::health::HealthReport;
use super::outcome::{FallbackReason, Fetched};
use super::shape::{decode_tool, decode_tool_list};
use super::tool::Tool;
use crate::types::{ApiError, CatalogConfig, Error, Result, ToolId};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

pub const TOOLS_PATH: &str = "/api/tools";
pub const REQUESTS_PATH: &str = "/api/requests";
pub const HEALTH_PATH: &str = "/health";

/// Catalog service client.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    /// Base URL without trailing slash.
    base_url: String,
    http: Client,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let base_url = config.normalized_base_url();
        Url::parse(&base_url)
            .map_err(|e| Error::config(format!("invalid catalog base URL '{}': {}", base_url, e)))?;

        let http = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(format!("toolshare/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { base_url, http })
    }

    /// Client for `base_url` with default timeouts.
    pub fn from_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::new(&CatalogConfig::new(base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =========================================================================
    // Catalog operations
    // =========================================================================

    /// List all tools in service order, or the fallback table.
    pub async fn list_tools(&self) -> Fetched<Vec<Tool>> {
        let reason = match self.get_json(TOOLS_PATH).await {
            Ok(body) => match decode_tool_list(&body) {
                Some(tools) => {
                    debug!(count = tools.len(), "list_tools: live");
                    return Fetched::Live(tools);
                }
                None => FallbackReason::Shape {
                    path: TOOLS_PATH.to_string(),
                },
            },
            Err(err) => FallbackReason::Request(err),
        };

        warn!(%reason, "list_tools: using fallback table");
        Fetched::fallback(fallback_tools().to_vec(), reason)
    }

    /// Fetch one tool. Falls back to the fallback table; fails only when the
    /// id is in neither.
    pub async fn get_tool(&self, id: impl Into<ToolId>) -> Result<Fetched<Tool>> {
        let id = id.into();

        let reason = match self.fetch_tool(&id).await {
            Ok(tool) => return Ok(Fetched::Live(tool)),
            Err(reason) => reason,
        };

        warn!(tool_id = %id, %reason, "get_tool: using fallback table");
        match find_fallback_tool(&id) {
            Some(tool) => Ok(Fetched::fallback(tool.clone(), reason)),
            None => Err(Error::ToolNotFound { id }),
        }
    }

    async fn fetch_tool(&self, id: &ToolId) -> std::result::Result<Tool, FallbackReason> {
        let path = format!("{}/{}", TOOLS_PATH, id);
        let mut url = self.endpoint(TOOLS_PATH).map_err(FallbackReason::Request)?;
        url.path_segments_mut()
            .map_err(|_| ApiError::new(path.as_str(), "base URL cannot carry a path"))?
            .push(id.as_str());

        let body = self.send(&path, self.request(Method::GET, url)).await?;
        let tool = decode_tool(&body).ok_or_else(|| FallbackReason::Shape { path: path.clone() })?;

        if &tool.id != id {
            return Err(FallbackReason::Mismatch {
                requested: id.clone(),
                received: tool.id,
            });
        }
        Ok(tool)
    }

    /// Submit a borrow request. Any failure yields a simulated acknowledgment
    /// (`{"ok": true, "mocked": true}`) instead of an error.
    pub async fn submit_borrow_request<P>(&self, payload: &P) -> Fetched<Value>
    where
        P: Serialize + ?Sized,
    {
        let result = match self.endpoint(REQUESTS_PATH) {
            Ok(url) => {
                let builder = self.request(Method::POST, url).json(payload);
                self.send(REQUESTS_PATH, builder).await
            }
            Err(err) => Err(err),
        };

        match result {
            Ok(ack) => Fetched::Live(ack),
            Err(err) => {
                warn!(error = %err, "submit_borrow_request: returning simulated acknowledgment");
                Fetched::fallback(simulated_ack(), err)
            }
        }
    }

    /// Probe `GET /health`. An unhealthy service answers non-2xx with a
    /// report body; that report is returned rather than an error.
    pub async fn health(&self) -> Result<HealthReport> {
        match self.get_json(HEALTH_PATH).await {
            Ok(body) => HealthReport::deserialize(&body).map_err(|e| {
                Error::Api(ApiError::new(
                    HEALTH_PATH,
                    format!("unexpected response shape from {}: {}", HEALTH_PATH, e),
                ))
            }),
            Err(err) => {
                let report = err
                    .body
                    .as_ref()
                    .and_then(|body| HealthReport::deserialize(body).ok());
                match report {
                    Some(report) if !err.is_transport() => Ok(report),
                    _ => Err(Error::Api(err)),
                }
            }
        }
    }

    // =========================================================================
    // Transport
    // =========================================================================

    fn endpoint(&self, path: &str) -> std::result::Result<Url, ApiError> {
        Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| ApiError::new(path, format!("invalid endpoint URL: {}", e)))
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
    }

    async fn get_json(&self, path: &str) -> std::result::Result<Value, ApiError> {
        let url = self.endpoint(path)?;
        self.send(path, self.request(Method::GET, url)).await
    }

    /// Send a request and decode its body as JSON.
    ///
    /// A body that is not JSON (an HTML error page, an empty 204) decodes to
    /// `Value::Null` on success and to "no body" on failure.
    async fn send(&self, path: &str, builder: RequestBuilder) -> std::result::Result<Value, ApiError> {
        debug!(path, "catalog request");

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::transport(path, e))?;

        let status = response.status();
        let body = match response.bytes().await {
            Ok(bytes) => serde_json::from_slice::<Value>(&bytes).ok(),
            Err(e) => {
                debug!(path, error = %e, "failed to read response body");
                None
            }
        };

        if !status.is_success() {
            return Err(ApiError::from_status(path, status.as_u16(), body));
        }

        Ok(body.unwrap_or(Value::Null))
    }
}
