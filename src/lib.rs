//! geocomplete: a headless address autocomplete controller
//!
//! Debounces keystrokes, queries a Pelias-style geocoding endpoint on a
//! background worker, and exposes a suggestion list navigable by keyboard,
//! mouse and touch together with accessible attribute bundles for whatever
//! renders it.

pub mod autocomplete;
pub mod config;
pub mod debounce;
pub mod error;
pub mod provider;
pub mod worker;

#[cfg(test)]
mod test_utils;
