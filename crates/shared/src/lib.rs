//! Shared library for the manga-crawler workspace.
//!
//! This crate provides common functionality used by the binary crate:
//! - Configuration management
//! - Output record models
//! - File path utilities
//! - Logging infrastructure

pub mod config;
pub mod logging;
pub mod models;
pub mod paths;

// Re-export commonly used types
pub use config::Config;
pub use logging::LogConfig;
pub use models::{Chapter, MangaRecord};
pub use paths::DataPaths;

/// Common result type using anyhow::Error
pub type Result<T> = anyhow::Result<T>;
