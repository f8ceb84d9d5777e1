//! File path utilities for organizing output files.
//!
//! Centralizes where crawled records land and how generated file names are
//! built from the extracted title and a timestamp.

use std::path::{Path, PathBuf};

/// File path manager for data files
#[derive(Debug, Clone)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    /// Create a new DataPaths with the given root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the root data directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the directory where crawled records are written
    pub fn records_dir(&self) -> PathBuf {
        self.root.join("records")
    }

    /// Get the generated output path for a record: `{title}_{timestamp}.json`
    ///
    /// An empty title falls back to `unknown`. The timestamp is expected in
    /// `%Y%m%d_%H%M%S` form.
    pub fn record_file(&self, title: &str, timestamp: &str) -> PathBuf {
        let title = if title.is_empty() { "unknown" } else { title };
        self.records_dir()
            .join(format!("{}_{}.json", sanitize_file_name(title), timestamp))
    }

    /// Create all output directories
    pub fn create_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.records_dir())
    }
}

/// Replace filesystem-hostile characters so a title is usable as a file name
fn sanitize_file_name(name: &str) -> String {
    name.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_")
        .replace("__", "_")
}
