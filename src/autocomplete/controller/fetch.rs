//! Suggestion fetching
//!
//! Dispatches one request per settled burst and applies what the worker sends
//! back. Every request carries an increasing id; with
//! [`ResponseOrdering::LatestRequest`] responses to superseded requests are
//! dropped, with [`ResponseOrdering::LastArrival`] whatever settles last wins.
//! Either way, requests issued before the input was emptied never apply.

use std::sync::mpsc::TryRecvError;

use super::AutocompleteController;
use crate::autocomplete::handlers::ClearSuggestions;
use crate::autocomplete::suggestion::suggestions_from_collection;
use crate::config::ResponseOrdering;
use crate::worker::{FetchRequest, FetchResponse};

impl AutocompleteController {
    /// Issue a fetch for `text` right away
    ///
    /// Empty text is skipped entirely: no request and no change to `loading`.
    /// Returns the request id when a request was sent.
    pub fn fetch(&mut self, text: &str) -> Option<u64> {
        if text.is_empty() {
            return None;
        }

        let Some(request_tx) = &self.request_tx else {
            log::debug!("No fetch worker attached, dropping fetch for {:?}", text);
            return None;
        };

        let request_id = self.request_id.wrapping_add(1);
        let request = FetchRequest {
            request_id,
            text: text.to_string(),
            options: self.options.search_options.clone(),
        };

        if request_tx.send(request).is_err() {
            log::warn!("Fetch worker is gone, detaching");
            self.request_tx = None;
            return None;
        }

        log::debug!("Dispatched request {} for {:?}", request_id, text);
        self.request_id = request_id;
        self.loading = true;
        Some(request_id)
    }

    /// Id of the most recently dispatched request
    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    /// Drain the worker channel and apply every response
    ///
    /// Returns how many responses were applied (stale ones are not counted).
    pub fn poll_responses(&mut self) -> usize {
        let mut responses = Vec::new();
        let mut disconnected = false;

        if let Some(response_rx) = &self.response_rx {
            loop {
                match response_rx.try_recv() {
                    Ok(response) => responses.push(response),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        disconnected = true;
                        break;
                    }
                }
            }
        }

        if disconnected {
            log::debug!("Fetch worker disconnected");
            self.response_rx = None;
        }

        let mut applied = 0;
        for response in responses {
            if self.apply_response(response) {
                applied += 1;
            }
        }
        applied
    }

    /// Apply one settled request; returns false if it was discarded
    pub fn apply_response(&mut self, response: FetchResponse) -> bool {
        if self.shut_down {
            log::debug!("Discarding response {} after shutdown", response.request_id());
            return false;
        }

        if self.is_stale(response.request_id()) {
            log::debug!(
                "Discarding stale response {} (latest is {})",
                response.request_id(),
                self.request_id
            );
            return false;
        }

        self.loading = false;

        match response {
            FetchResponse::Success { collection, .. } => {
                let suggestions = suggestions_from_collection(collection);
                self.suggestions
                    .replace_all(suggestions, self.options.highlight_first_suggestion);
            }
            FetchResponse::Failure { error, .. } => {
                log::debug!("Fetch failed: {}", error);
                let clear = ClearSuggestions::new(&mut self.suggestions);
                (self.handlers.on_error)(error.status(), clear);
            }
        }
        true
    }

    fn is_stale(&self, request_id: u64) -> bool {
        if request_id <= self.cleared_through && self.cleared_through != 0 {
            return true;
        }
        match self.options.response_ordering {
            ResponseOrdering::LatestRequest => request_id != self.request_id,
            ResponseOrdering::LastArrival => false,
        }
    }
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod fetch_tests;
