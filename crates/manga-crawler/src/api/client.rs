//! Firecrawl client: one authenticated POST to the crawl endpoint.

use super::types::{CrawlOptions, CrawlRequest, CrawlResponse};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Failure kinds for the crawl call
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("no API key provided; use --api-key or set FIRECRAWL_API_KEY")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("service returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("failed to parse crawl response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error("crawl response contained no markdown payload")]
    NoMarkdown,
}

/// Client for the hosted crawling service
pub struct FirecrawlClient {
    /// HTTP client
    client: Client,
    /// Base URL of the service
    base_url: String,
    /// Bearer token
    api_key: String,
}

impl FirecrawlClient {
    /// Create a new client
    ///
    /// Fails up front when the API key is empty; no request is attempted
    /// without credentials.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CrawlError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(CrawlError::MissingApiKey);
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent("manga-crawler/0.1.0")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key,
        })
    }

    /// Crawl the target page and return its markdown rendition
    ///
    /// Any failure (transport, non-2xx status, unparseable body, missing
    /// markdown) surfaces as an error; there are no retries.
    pub fn crawl(&self, url: &str, options: &CrawlOptions) -> Result<String, CrawlError> {
        let endpoint = format!("{}/crawl", self.base_url);
        let request = CrawlRequest::new(url, options);

        debug!(url = %url, endpoint = %endpoint, wait_ms = options.wait_ms, "Sending crawl request");

        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(status = %status, message = %message, "Crawl request failed");
            return Err(CrawlError::Api { status, message });
        }

        let body = response.text()?;
        debug!(bytes = body.len(), body = %body, "Crawl response received");

        let parsed: CrawlResponse = serde_json::from_str(&body)?;
        parsed.markdown.ok_or(CrawlError::NoMarkdown)
    }
}

/// Resolve the API key: CLI flag, then environment, then config file
pub fn resolve_api_key(
    flag: Option<String>,
    env: Option<String>,
    config: &str,
) -> Option<String> {
    flag.filter(|k| !k.is_empty())
        .or_else(|| env.filter(|k| !k.is_empty()))
        .or_else(|| (!config.is_empty()).then(|| config.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = FirecrawlClient::new(
            "https://api.firecrawl.dev",
            "fc-test",
            Duration::from_secs(30),
        );
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_rejects_empty_api_key() {
        let result =
            FirecrawlClient::new("https://api.firecrawl.dev", "", Duration::from_secs(30));
        assert!(matches!(result, Err(CrawlError::MissingApiKey)));
    }

    #[test]
    fn test_resolve_api_key_prefers_flag() {
        let key = resolve_api_key(
            Some("from-flag".to_string()),
            Some("from-env".to_string()),
            "from-config",
        );
        assert_eq!(key.as_deref(), Some("from-flag"));
    }

    #[test]
    fn test_resolve_api_key_falls_back_to_env() {
        let key = resolve_api_key(None, Some("from-env".to_string()), "from-config");
        assert_eq!(key.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_resolve_api_key_falls_back_to_config() {
        let key = resolve_api_key(None, None, "from-config");
        assert_eq!(key.as_deref(), Some("from-config"));
    }

    #[test]
    fn test_resolve_api_key_none_when_all_empty() {
        assert_eq!(resolve_api_key(None, Some(String::new()), ""), None);
    }
}
