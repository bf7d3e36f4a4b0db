// src/api_handler.rs

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Url;
use std::thread;
use std::time::Duration;
use tracing::warn;

use crate::errors::{DesignError, Result};

pub struct APIHandler {
    client: Client,
    base_url: String,
}

impl APIHandler {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("guide_designer/0.1"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| DesignError::Retrieval(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Plain-text GET against `base_url + endpoint`, with the query pairs
    /// percent-encoded (contact emails can carry `+` and `@`).
    pub fn get_plain_text(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<String> {
        let url = self.build_url(endpoint, query)?;
        self.make_plain_text_request_with_retry(url.as_str(), 3)
    }

    fn build_url(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, endpoint))
            .map_err(|e| DesignError::Retrieval(format!("Invalid request URL: {}", e)))?;
        url.query_pairs_mut().extend_pairs(query);
        Ok(url)
    }

    fn make_plain_text_request_with_retry(&self, url: &str, max_attempts: u32) -> Result<String> {
        let mut attempts = 0;

        loop {
            let response = self
                .client
                .get(url)
                .header("Accept", "text/plain")
                .send()
                .map_err(|e| DesignError::Retrieval(format!("Request to {} failed: {}", url, e)))?;

            if response.status().is_success() {
                return response
                    .text()
                    .map_err(|e| DesignError::Retrieval(format!("Failed to read response body: {}", e)));
            } else if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
                attempts += 1;
                if attempts >= max_attempts {
                    return Err(DesignError::Retrieval(format!(
                        "Exceeded maximum retries for URL: {}",
                        url
                    )));
                }

                let wait_time = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(1);
                warn!("Rate limited. Waiting {} seconds before retrying...", wait_time);
                thread::sleep(Duration::from_secs(wait_time));
            } else {
                let status = response.status();
                let error_text = response.text().unwrap_or_default();
                return Err(DesignError::Retrieval(format!(
                    "Failed to fetch data from URL: {}. Status: {}. Error: {}",
                    url, status, error_text
                )));
            }
        }
    }
}
