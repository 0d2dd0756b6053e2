//! Pelias-compatible autocomplete client (geocode.earth by default)

use std::time::Duration;

use super::{FeatureCollection, ProviderError, SearchOptions};
use crate::config::ProviderConfig;

/// Async client for a Pelias `/v1/autocomplete` endpoint
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GeocodeClient {
    /// Create a client for `endpoint`
    ///
    /// # Arguments
    /// * `endpoint` - Full autocomplete URL
    /// * `api_key` - Sent as the `api_key` query parameter when present
    /// * `timeout` - Per-request timeout
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    pub fn from_config(config: &ProviderConfig) -> Result<Self, ProviderError> {
        Self::new(
            config.endpoint.clone(),
            config.api_key.clone(),
            Duration::from_millis(config.timeout_ms),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Query the endpoint for `text`
    ///
    /// Parameters are the caller's search options merged with `text`, plus the
    /// configured API key unless the options already carry one.
    pub async fn autocomplete(
        &self,
        text: &str,
        options: &SearchOptions,
    ) -> Result<FeatureCollection, ProviderError> {
        let mut query = options.query_for(text);
        if let Some(api_key) = &self.api_key
            && options.get("api_key").is_none()
        {
            query.push(("api_key".to_string(), api_key.clone()));
        }

        let response = self
            .http
            .get(&self.endpoint)
            .query(&query)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        parse_feature_collection(&body)
    }
}

/// Decode an autocomplete response body
///
/// An empty body is treated as a collection with no features.
pub fn parse_feature_collection(body: &str) -> Result<FeatureCollection, ProviderError> {
    if body.trim().is_empty() {
        return Ok(FeatureCollection::default());
    }
    serde_json::from_str(body).map_err(|e| ProviderError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "geocode_earth_tests.rs"]
mod geocode_earth_tests;
