//! Blocking HTTP client for the update server

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use super::Fetch;
use crate::error::{Result, http};

/// User agent for update server requests
const USER_AGENT_VALUE: &str = concat!("binowner/", env!("CARGO_PKG_VERSION"));

/// Fetches documents over HTTP(S), one request at a time, without retries
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = Client::builder()
            .default_headers(default_headers)
            .build()
            .map_err(|e| http::client_failed(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| http::request_failed(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(http::status(url, status.as_u16()));
        }

        // Manifests are large; decode the raw bytes directly instead of
        // sniffing the charset, and never fail on a stray invalid sequence.
        let body = response
            .bytes()
            .map_err(|e| http::request_failed(url, e.to_string()))?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}
