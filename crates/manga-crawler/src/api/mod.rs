//! Client for the hosted crawling service.
//!
//! One authenticated POST per invocation; the service renders the target
//! page and returns its content as markdown.

pub mod client;
pub mod types;

pub use client::{resolve_api_key, CrawlError, FirecrawlClient};
pub use types::{CrawlOptions, CrawlRequest, CrawlResponse};
