//! Command-line arguments
//!
//! Flags override values read from the configuration file.

use std::path::PathBuf;

use clap::Parser;

use geocomplete::config::Config;

#[derive(Debug, Parser)]
#[command(version, about = "Interactive address autocomplete in the terminal")]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/geocomplete/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Quiet period after the last keystroke before suggestions are fetched
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Highlight the first suggestion of every new list
    #[arg(long)]
    pub highlight_first: bool,

    /// Only edit the value, never fetch suggestions
    #[arg(long)]
    pub no_fetch: bool,

    /// Autocomplete endpoint of the geocoding provider
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Provider API key
    #[arg(long, env = "GEOCOMPLETE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Write debug logs to this file
    #[arg(long, value_name = "PATH", env = "GEOCOMPLETE_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Layer the flags that were given over `config`
    pub fn apply(&self, config: &mut Config) {
        if let Some(debounce_ms) = self.debounce_ms {
            config.autocomplete.debounce_ms = debounce_ms;
        }
        if self.highlight_first {
            config.autocomplete.highlight_first_suggestion = true;
        }
        if self.no_fetch {
            config.autocomplete.should_fetch_suggestions = false;
        }
        if let Some(endpoint) = &self.endpoint {
            config.provider.endpoint = endpoint.clone();
        }
        if let Some(api_key) = &self.api_key {
            config.provider.api_key = Some(api_key.clone());
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
