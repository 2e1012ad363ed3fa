//! The fetch collaborator: blocking HTTP with retry and politeness delay.
//!
//! The extraction core consumes pages through the [`Fetch`] trait and is
//! retry-agnostic: it receives a parsed document or a definitive failure.
//! Tests substitute an in-memory implementation.

use std::collections::HashMap;
use std::time::Duration;

use dom_query::Document;
use tracing::{info, warn};

use crate::config::FetchConfig;
use crate::error::{Error, Result};
use crate::{dom, encoding};

/// Capability to fetch an absolute URL as a parsed document.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Document>;
}

/// Blocking HTTP fetcher with bounded retries and a politeness delay
/// between requests.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
    config: FetchConfig,
}

impl HttpFetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let attempts = self.config.retries + 1;
        for attempt in 1..=attempts {
            info!(url, attempt, "requesting");
            match self.try_once(url) {
                Ok(bytes) => {
                    // Avoid hammering the server between successive pages.
                    std::thread::sleep(Duration::from_secs(self.config.request_delay_secs));
                    return Ok(bytes);
                }
                Err(err) => {
                    warn!(url, attempt, error = %err, "request failed");
                    if attempt < attempts {
                        std::thread::sleep(Duration::from_secs(self.config.retry_delay_secs));
                    }
                }
            }
        }
        Err(Error::Fetch {
            url: url.to_string(),
            attempts,
        })
    }

    fn try_once(&self, url: &str) -> reqwest::Result<Vec<u8>> {
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Document> {
        let bytes = self.fetch_bytes(url)?;
        let html = encoding::decode_html(&bytes);
        Ok(dom::parse(&html))
    }
}

/// In-memory fetcher over a URL-to-HTML map, for tests and dry runs.
#[derive(Debug, Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
}

impl StaticFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a page body for a URL.
    pub fn insert(&mut self, url: impl Into<String>, html: impl Into<String>) {
        self.pages.insert(url.into(), html.into());
    }
}

impl Fetch for StaticFetcher {
    fn fetch(&self, url: &str) -> Result<Document> {
        self.pages
            .get(url)
            .map(|html| dom::parse(html))
            .ok_or_else(|| Error::Fetch {
                url: url.to_string(),
                attempts: 1,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_fetcher_returns_registered_pages() {
        let mut fetcher = StaticFetcher::new();
        fetcher.insert("https://example.org/a.html", "<p>hello</p>");

        let doc = fetcher.fetch("https://example.org/a.html").unwrap();
        assert_eq!(doc.select("p").text().to_string(), "hello");
    }

    #[test]
    fn static_fetcher_fails_for_unknown_urls() {
        let fetcher = StaticFetcher::new();
        let Err(err) = fetcher.fetch("https://example.org/missing.html") else {
            panic!("expected fetch to fail for unknown URL");
        };
        assert!(matches!(err, Error::Fetch { .. }));
    }
}
