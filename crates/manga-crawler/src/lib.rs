//! Manga crawler library.
//!
//! Fetches a manga listing page through a hosted crawling service and
//! extracts structured metadata from the returned markdown.

pub mod api;
pub mod extract;
pub mod output;

pub use api::{CrawlError, CrawlOptions, FirecrawlClient};
pub use extract::extract_record;
