//! Page fetching.
//!
//! The extraction core never performs I/O; a [`PageFetcher`] collaborator
//! turns a URL into a [`PageText`] document. The built-in [`HttpFetcher`]
//! fetches over HTTP with a short timeout and harvests either link texts
//! (the default) or all visible body text.
//!
//! Fetch failures carry distinct [`FetchError`] variants for malformed
//! URLs, timeouts, and unsuccessful HTTP statuses. The core treats all of
//! them as fatal for the invocation; no retry logic lives here.

pub mod html;

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use thiserror::Error;
use url::Url;

use crate::document::PageText;

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Errors surfaced by page fetching.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The URL could not be parsed.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The server answered with a non-success status code.
    #[error("unsuccessful status code: {0}")]
    Status(u16),

    /// Any other transport-level failure.
    #[error("network error: {0}")]
    Network(String),
}

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Trait for collaborators that turn a URL into a page document.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the page at `url` and return its title and content units.
    async fn fetch(&self, url: &str) -> FetchResult<PageText>;
}

/// An HTTP fetcher backed by reqwest.
///
/// In `links_only` mode (the default) the content units are the texts of
/// the page's anchor elements; otherwise every visible text node of the
/// body outside `<script>`/`<style>` becomes a unit. The page title is
/// delivered as a single-element list; a missing `<title>` yields the
/// `"None"` placeholder, which the extractor discards.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: reqwest::Client,
    timeout: Duration,
    links_only: bool,
}

impl HttpFetcher {
    /// Create a fetcher with the default 3-second timeout, collecting link
    /// texts.
    pub fn new() -> FetchResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(HttpFetcher {
            client,
            timeout: DEFAULT_TIMEOUT,
            links_only: true,
        })
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Collect all visible body text instead of link texts only.
    pub fn with_links_only(mut self, links_only: bool) -> Self {
        self.links_only = links_only;
        self
    }

    fn map_transport_error(e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout(e.to_string())
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<PageText> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;

        debug!("fetching {parsed}");
        let response = self
            .client
            .get(parsed)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(Self::map_transport_error)?;

        let title = html::page_title(&body);
        let content = if self.links_only {
            html::link_texts(&body)
        } else {
            html::visible_text(&body)
        };

        debug!("fetched {} content units", content.len());
        Ok(PageText::new(vec![title], content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_url() {
        let fetcher = HttpFetcher::new().unwrap();
        let err = fetcher.fetch("not a url at all").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            FetchError::Status(404).to_string(),
            "unsuccessful status code: 404"
        );
        assert!(FetchError::InvalidUrl("x".to_string())
            .to_string()
            .starts_with("invalid url"));
    }

    #[test]
    fn test_builder_defaults() {
        let fetcher = HttpFetcher::new().unwrap();
        assert_eq!(fetcher.timeout, DEFAULT_TIMEOUT);
        assert!(fetcher.links_only);

        let fetcher = fetcher
            .with_timeout(Duration::from_secs(10))
            .with_links_only(false);
        assert_eq!(fetcher.timeout, Duration::from_secs(10));
        assert!(!fetcher.links_only);
    }
}
