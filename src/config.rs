//! Configuration loading
//!
//! Reads `~/.config/geocomplete/config.toml`. A missing file is not an error and
//! yields the defaults; a malformed file is reported to the caller.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::GeocompleteError;

pub mod types;

pub use types::{AutocompleteConfig, Config, ProviderConfig, ResponseOrdering};

const CONFIG_DIR: &str = "geocomplete";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the configuration from the default location
pub fn load_config() -> Result<Config, GeocompleteError> {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => Ok(Config::default()),
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, GeocompleteError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(e) => return Err(e.into()),
    };

    parse_config_toml(&contents).map_err(|message| GeocompleteError::Config {
        path: path.to_path_buf(),
        message,
    })
}

pub fn parse_config_toml(content: &str) -> Result<Config, String> {
    toml::from_str::<Config>(content).map_err(|e| e.message().to_string())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
