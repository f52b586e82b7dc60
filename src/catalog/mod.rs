//! Catalog access layer — tool records, envelope tolerance, offline fallback.
//!
//! The catalog service is treated as untrusted: responses may arrive bare or
//! enveloped, and any failure to fetch or decode is answered from a fixed
//! local table. Results say which path produced them (see [`Fetched`]).

pub mod api;
pub mod borrow;
pub mod client;
pub mod fallback;
pub mod health;
pub mod offline;
pub mod outcome;
pub mod shape;
pub mod tool;

pub use api::CatalogApi;
pub use borrow::{is_simulated, simulated_ack, BorrowRequest};
pub use client::{CatalogClient, HEALTH_PATH, REQUESTS_PATH, TOOLS_PATH};
pub use fallback::{fallback_tools, find_fallback_tool};
pub use health::{HealthReport, HealthStatus};
pub use offline::OfflineCatalog;
pub use outcome::{FallbackReason, Fetched};
pub use shape::{ResponseShape, TOOL_LIST_SHAPES, TOOL_SHAPES};
pub use tool::{featured_tools, Tool, ToolFilter, FEATURED_COUNT};
