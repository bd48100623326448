//! Shared application service layer for aerograph.
//!
//! This crate provides a unified interface for frontends, centralizing
//! dataset loading, provider construction, graph building, and path
//! queries.

pub mod dataset_service;
pub mod error;
pub mod network;

// Re-export key types for convenience
pub use dataset_service::{DatasetSummary, dataset_summary, load_dataset};
pub use error::{AppError, AppResult};
pub use network::{BuildSummary, RouteNetwork};
