//! Catalog operations as a trait, so front ends can run against the HTTP
//! client or the offline table interchangeably.

use super::client::CatalogClient;
use super::health::HealthReport;
use super::outcome::Fetched;
use super::tool::Tool;
use crate::types::{Result, ToolId};
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_tools(&self) -> Fetched<Vec<Tool>>;

    async fn get_tool(&self, id: ToolId) -> Result<Fetched<Tool>>;

    async fn submit_borrow_request(&self, payload: &Value) -> Fetched<Value>;

    async fn health(&self) -> Result<HealthReport>;
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn list_tools(&self) -> Fetched<Vec<Tool>> {
        CatalogClient::list_tools(self).await
    }

    async fn get_tool(&self, id: ToolId) -> Result<Fetched<Tool>> {
        CatalogClient::get_tool(self, id).await
    }

    async fn submit_borrow_request(&self, payload: &Value) -> Fetched<Value> {
        CatalogClient::submit_borrow_request(self, payload).await
    }

    async fn health(&self) -> Result<HealthReport> {
        CatalogClient::health(self).await
    }
}
