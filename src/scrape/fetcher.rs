//! HTTP access behind a trait, so batch logic can be tested offline

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::errors::{IndexError, IndexResult};

/// Source of remote documents
pub trait Fetcher {
    /// Fetch a URL as text
    fn get_text(&self, url: &str) -> IndexResult<String>;

    /// Fetch a URL as raw bytes
    fn get_bytes(&self, url: &str) -> IndexResult<Vec<u8>>;
}

/// Blocking HTTP fetcher
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher sending the given User-Agent on every request
    pub fn new(user_agent: &str) -> IndexResult<Self> {
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(user_agent)
            .map_err(|e| IndexError::ConfigError(format!("Invalid user agent '{}': {}", user_agent, e)))?;
        headers.insert(USER_AGENT, value);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(60))
            .build()?;

        Ok(HttpFetcher { client })
    }

    fn get(&self, url: &str) -> IndexResult<reqwest::blocking::Response> {
        debug!("GET {}", url);
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response)
    }
}

impl Fetcher for HttpFetcher {
    fn get_text(&self, url: &str) -> IndexResult<String> {
        Ok(self.get(url)?.text()?)
    }

    fn get_bytes(&self, url: &str) -> IndexResult<Vec<u8>> {
        Ok(self.get(url)?.bytes()?.to_vec())
    }
}
