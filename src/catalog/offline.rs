//! Catalog backed only by the fallback table.

use super::api::CatalogApi;
use super::borrow::simulated_ack;
use super::client::HEALTH_PATH;
use super::fallback::{fallback_tools, find_fallback_tool};
use super::health::HealthReport;
use super::outcome::{FallbackReason, Fetched};
use super::tool::Tool;
use crate::types::{ApiError, Error, Result, ToolId};
use async_trait::async_trait;
use serde_json::Value;

/// Serves the fallback table without touching the network. Every value is
/// tagged [`FallbackReason::Offline`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineCatalog;

#[async_trait]
impl CatalogApi for OfflineCatalog {
    async fn list_tools(&self) -> Fetched<Vec<Tool>> {
        Fetched::fallback(fallback_tools().to_vec(), FallbackReason::Offline)
    }

    async fn get_tool(&self, id: ToolId) -> Result<Fetched<Tool>> {
        find_fallback_tool(&id)
            .map(|tool| Fetched::fallback(tool.clone(), FallbackReason::Offline))
            .ok_or(Error::ToolNotFound { id })
    }

    async fn submit_borrow_request(&self, _payload: &Value) -> Fetched<Value> {
        Fetched::fallback(simulated_ack(), FallbackReason::Offline)
    }

    async fn health(&self) -> Result<HealthReport> {
        Err(Error::Api(ApiError::new(
            HEALTH_PATH,
            "catalog service disabled (offline mode)",
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::borrow::is_simulated;

    #[tokio::test]
    async fn test_offline_catalog() {
        let catalog = OfflineCatalog;

        let tools = catalog.list_tools().await;
        assert_eq!(tools.fallback_reason(), Some(&FallbackReason::Offline));
        assert_eq!(tools.value().len(), 5);

        let hammer = catalog.get_tool(ToolId::from(2u32)).await.unwrap();
        assert_eq!(hammer.value().name, "Hammer");

        let missing = catalog.get_tool(ToolId::from("999")).await;
        assert!(matches!(missing, Err(Error::ToolNotFound { .. })));

        let ack = catalog.submit_borrow_request(&Value::Null).await;
        assert!(is_simulated(ack.value()));

        assert!(catalog.health().await.is_err());
    }

    #[tokio::test]
    async fn test_usable_as_trait_object() {
        let catalog: Box<dyn CatalogApi> = Box::new(OfflineCatalog);
        assert!(catalog.list_tools().await.is_fallback());
    }
}
