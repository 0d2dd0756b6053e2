// Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::provider::SearchOptions;

pub const DEFAULT_DEBOUNCE_MS: u64 = 200;
pub const DEFAULT_ENDPOINT: &str = "https://api.geocode.earth/v1/autocomplete";
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// How overlapping fetch responses are reconciled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseOrdering {
    /// Only the newest dispatched request may update suggestions
    #[default]
    LatestRequest,
    /// Whichever response settles last wins
    LastArrival,
}

/// Autocomplete behaviour section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AutocompleteConfig {
    pub debounce_ms: u64,
    pub highlight_first_suggestion: bool,
    pub should_fetch_suggestions: bool,
    pub response_ordering: ResponseOrdering,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        AutocompleteConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            highlight_first_suggestion: false,
            should_fetch_suggestions: true,
            response_ordering: ResponseOrdering::LatestRequest,
        }
    }
}

/// Geocoding provider section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub endpoint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub timeout_ms: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub autocomplete: AutocompleteConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Passed through unchanged as query parameters on every fetch
    #[serde(default)]
    pub search: SearchOptions,
}

impl Config {
    /// Render the configuration back to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}
