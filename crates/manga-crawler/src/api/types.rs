//! Request and response types for the crawl endpoint.

use serde::{Deserialize, Serialize};

/// Rendering options forwarded to the crawling service
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    /// Page-load wait time in milliseconds
    pub wait_ms: u64,
    /// Execute JavaScript while rendering
    pub javascript: bool,
    /// Requested response format
    pub format: String,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            wait_ms: 2000,
            javascript: true,
            format: "markdown".to_string(),
        }
    }
}

/// JSON body of the crawl request
#[derive(Debug, Clone, Serialize)]
pub struct CrawlRequest<'a> {
    pub url: &'a str,
    pub wait: u64,
    pub javascript: bool,
    pub format: &'a str,
}

impl<'a> CrawlRequest<'a> {
    pub fn new(url: &'a str, options: &'a CrawlOptions) -> Self {
        Self {
            url,
            wait: options.wait_ms,
            javascript: options.javascript,
            format: &options.format,
        }
    }
}

/// JSON body of the crawl response
///
/// Only the markdown payload is consumed; a response without it counts as
/// "no data".
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlResponse {
    #[serde(default)]
    pub markdown: Option<String>,
}
