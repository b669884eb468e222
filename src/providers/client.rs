/// Shared HTTP client for provider adapters
use crate::errors::{EcoError, ProviderError};
use crate::logger::{self, LogTag};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client wrapper with a per-request timeout and fixed User-Agent
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, EcoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()
            .map_err(|e| EcoError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// GET `url` and decode a JSON body
    ///
    /// Non-2xx statuses, empty bodies and undecodable payloads are all errors.
    pub async fn get_json<T>(&self, url: &str, query: &[(&str, &str)]) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        logger::verbose(LogTag::Provider, &format!("GET {} {:?}", url, query));

        let response = self
            .client
            .get(url)
            .query(query)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        logger::verbose(
            LogTag::Provider,
            &format!("{} answered {} ({} bytes)", url, status, body.len()),
        );
        if body.trim().is_empty() || body.trim() == "null" {
            return Err(ProviderError::EmptyBody);
        }

        serde_json::from_str::<T>(&body).map_err(|e| ProviderError::InvalidResponse(e.to_string()))
    }

    /// Reachability check with its own (usually shorter) timeout
    ///
    /// Any 2xx answer counts as reachable.
    pub async fn probe(&self, url: &str, timeout: Duration) -> Result<StatusCode, ProviderError> {
        let response = self.client.get(url).timeout(timeout).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(status)
        } else {
            Err(ProviderError::HttpStatus(status.as_u16()))
        }
    }
}
