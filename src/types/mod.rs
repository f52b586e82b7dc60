//! Core types for the catalog client.
//!
//! This module provides foundational types used throughout the crate:
//! - **IDs**: `ToolId`, normalized to string form
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Catalog service and observability configuration

mod config;
mod errors;
mod ids;

pub use config::{
    CatalogConfig, Config, ObservabilityConfig, API_BASE_URL_ENV, API_TIMEOUT_ENV,
    DEFAULT_API_BASE_URL, LOG_FORMAT_ENV,
};
pub use errors::{ApiError, Error, Result};
pub use ids::ToolId;
