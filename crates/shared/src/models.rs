//! Output record models.
//!
//! One `MangaRecord` is produced per invocation. Every field defaults to
//! empty when its pattern does not match in the crawled text.

use serde::{Deserialize, Serialize};

/// Manga metadata extracted from a crawled listing page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MangaRecord {
    pub title: String,
    pub author: String,
    pub description: String,
    pub chapters: Vec<Chapter>,
    pub cover_url: String,
    pub tags: Vec<String>,
}

/// A single chapter entry, in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub number: u32,
    pub title: String,
}

impl MangaRecord {
    /// True when no pattern matched anything at all
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.author.is_empty()
            && self.description.is_empty()
            && self.chapters.is_empty()
            && self.cover_url.is_empty()
            && self.tags.is_empty()
    }
}
