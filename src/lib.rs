//! # Toolshare - Community Tool-Lending Catalog Client
//!
//! Client-side access to a community tool-lending catalog:
//! - List tools and fetch a single tool by id
//! - Submit borrow requests
//! - Probe catalog service health
//!
//! ## Degradation
//!
//! The catalog service is allowed to be down or to drift in response shape.
//! Reads fall back to a fixed offline table and borrow submissions to a
//! simulated acknowledgment; each result records which path produced it:
//! ```text
//!   list_tools / get_tool / submit_borrow_request
//!        │
//!        ├── service answered, shape recognized ──► Fetched::Live
//!        │
//!        └── transport / status / shape failure ──► Fetched::Fallback { reason }
//!                                                     (get_tool: Error::ToolNotFound
//!                                                      if the table lacks the id)
//! ```

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod catalog;
pub mod types;

// Internal utilities
pub mod observability;

pub use catalog::{CatalogApi, CatalogClient, Fetched, Tool};
pub use types::{Config, Error, Result};
