//! Record persistence.
//!
//! One pretty-printed JSON file per invocation. A write failure is
//! reported, not retried.

use anyhow::{Context, Result};
use shared::MangaRecord;
use std::path::Path;
use tracing::info;

/// Write the record as pretty-printed JSON
pub fn save_record(record: &MangaRecord, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(record).context("Failed to serialize record")?;

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write record file: {}", path.display()))?;

    info!(path = %path.display(), "Record saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Chapter;
    use tempfile::TempDir;

    fn sample_record() -> MangaRecord {
        MangaRecord {
            title: "海贼王".to_string(),
            author: "尾田荣一郎".to_string(),
            description: String::new(),
            chapters: vec![Chapter {
                number: 1,
                title: "冒险的黎明".to_string(),
            }],
            cover_url: "https://img.example.com/op.jpg".to_string(),
            tags: vec!["冒险".to_string()],
        }
    }

    #[test]
    fn test_save_and_read_back() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("record.json");

        let record = sample_record();
        save_record(&record, &path)?;

        let content = std::fs::read_to_string(&path)?;
        let parsed: MangaRecord = serde_json::from_str(&content)?;
        assert_eq!(parsed, record);

        Ok(())
    }

    #[test]
    fn test_save_creates_parent_directories() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("records").join("record.json");

        save_record(&sample_record(), &path)?;
        assert!(path.exists());

        Ok(())
    }

    #[test]
    fn test_empty_record_is_still_written() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("empty.json");

        save_record(&MangaRecord::default(), &path)?;

        let content = std::fs::read_to_string(&path)?;
        let parsed: MangaRecord = serde_json::from_str(&content)?;
        assert!(parsed.is_empty());

        Ok(())
    }
}
