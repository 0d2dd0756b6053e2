//! Geocoding provider abstraction
//!
//! Defines the provider error type, the caller-owned search options, and the
//! feature-collection shape returned by the autocomplete endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

mod geocode_earth;

pub use geocode_earth::{GeocodeClient, parse_feature_collection};

/// Status reported to the error handler when the failure carries no HTTP status
pub const FALLBACK_ERROR_STATUS: u16 = 500;

/// Errors that can occur while querying the provider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Transport failure (connection refused, timeout, TLS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Provider answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body was not a feature collection
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ProviderError {
    /// Numeric status handed to the error handler
    pub fn status(&self) -> u16 {
        match self {
            ProviderError::Api { status, .. } => *status,
            ProviderError::Network(_) | ProviderError::Parse(_) => FALLBACK_ERROR_STATUS,
        }
    }
}

/// Query parameters passed through unchanged on every fetch
///
/// Keys are kept sorted so that requests are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchOptions {
    params: BTreeMap<String, Value>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.params.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Flatten into string pairs, skipping nulls
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .filter_map(|(key, value)| {
                let rendered = match value {
                    Value::Null => return None,
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                Some((key.clone(), rendered))
            })
            .collect()
    }

    /// The caller's options merged with `text`; `text` always wins
    pub fn query_for(&self, text: &str) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .to_query_pairs()
            .into_iter()
            .filter(|(key, _)| key != "text")
            .collect();
        pairs.push(("text".to_string(), text.to_string()));
        pairs
    }
}

/// Autocomplete response body
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeatureCollection {
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<Feature>,
}

/// One candidate place; only `properties` is consumed
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Feature {
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: Map<String, Value>,
}

impl Feature {
    pub fn label(&self) -> Option<&str> {
        self.properties.get("label").and_then(Value::as_str)
    }
}

/// A missing or `null` field both read as the default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
