//! Word records, weighted sampling, and review orchestration
//!
//! This module provides:
//! - Word record model with passthrough display fields
//! - JSON file store with counter normalization on load
//! - Weighted practice pool construction
//! - Review service tying load/sample/record together

pub mod models;
pub mod sampler;
pub mod service;
pub mod storage;

pub use models::WordRecord;
pub use service::ReviewService;
pub use storage::{JsonFileStore, MemoryStore, StorageError, WordStore};
