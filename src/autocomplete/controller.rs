//! Autocomplete controller
//!
//! Owns the suggestion state and turns input, keyboard and pointer events into
//! state transitions and caller notifications. Everything runs on the thread
//! that owns the controller; the only asynchronous boundary is the fetch
//! worker, reached through channels.
//!
//! The behaviour is split across several files:
//! - `fetch`: debounced dispatch and response application
//! - `keyboard`: arrow / enter / escape navigation
//! - `pointer`: hover, press, touch, click and the blur guard
//! - `props`: attribute and handler bundles for the renderer

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedSender;

use super::events::{EventOutcome, Handler, HandlerChain, InternalAction, UiEvent};
use super::handlers::Handlers;
use super::suggestion::Suggestion;
use super::suggestion_list::SuggestionList;
use crate::config::{Config, ResponseOrdering};
use crate::debounce::Debouncer;
use crate::provider::SearchOptions;
use crate::worker::{FetchRequest, FetchResponse, WorkerChannels};

mod fetch;
mod keyboard;
mod pointer;
mod props;

pub use props::{
    InputProps, InputPropsOptions, SuggestionItemOptions, SuggestionItemProps, render_attributes,
};

/// Behaviour switches, with the documented defaults
#[derive(Debug, Clone, PartialEq)]
pub struct AutocompleteOptions {
    /// Quiescence window before a fetch is issued (200ms)
    pub debounce: Duration,
    /// Activate the first entry of every new list (false)
    pub highlight_first_suggestion: bool,
    /// When false, typing only updates the value (true)
    pub should_fetch_suggestions: bool,
    /// Reconciliation of overlapping responses (latest request wins)
    pub response_ordering: ResponseOrdering,
    /// Passed through to the provider on every fetch
    pub search_options: SearchOptions,
}

impl Default for AutocompleteOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for AutocompleteOptions {
    fn from(config: &Config) -> Self {
        Self {
            debounce: Duration::from_millis(config.autocomplete.debounce_ms),
            highlight_first_suggestion: config.autocomplete.highlight_first_suggestion,
            should_fetch_suggestions: config.autocomplete.should_fetch_suggestions,
            response_ordering: config.autocomplete.response_ordering,
            search_options: config.search.clone(),
        }
    }
}

/// What the rendering layer needs besides the prop builders
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub loading: bool,
    pub suggestions: Arc<Vec<Suggestion>>,
}

pub struct AutocompleteController {
    options: AutocompleteOptions,
    handlers: Handlers,
    /// Last value supplied by the caller or reported through `on_change`
    value: String,
    /// What the user actually typed, restored when navigation leaves the list
    user_input_value: String,
    suggestions: SuggestionList,
    loading: bool,
    pointer_down_on_suggestion: bool,
    /// Guard reset deferred to the next tick after a click
    guard_reset_pending: bool,
    ready: bool,
    debouncer: Debouncer<String>,
    request_tx: Option<UnboundedSender<FetchRequest>>,
    response_rx: Option<Receiver<FetchResponse>>,
    /// Id of the most recently dispatched request
    request_id: u64,
    /// Responses to requests up to this id are dropped
    cleared_through: u64,
    shut_down: bool,
}

impl AutocompleteController {
    pub fn new(options: AutocompleteOptions, handlers: Handlers) -> Self {
        let debouncer = Debouncer::new(options.debounce);
        Self {
            options,
            handlers,
            value: String::new(),
            user_input_value: String::new(),
            suggestions: SuggestionList::new(),
            loading: false,
            pointer_down_on_suggestion: false,
            guard_reset_pending: false,
            ready: true,
            debouncer,
            request_tx: None,
            response_rx: None,
            request_id: 0,
            cleared_through: 0,
            shut_down: false,
        }
    }

    /// Connect the controller to a fetch worker
    pub fn set_channels(&mut self, channels: WorkerChannels) {
        self.request_tx = Some(channels.request_tx);
        self.response_rx = Some(channels.response_rx);
    }

    pub fn options(&self) -> &AutocompleteOptions {
        &self.options
    }

    pub fn suggestions(&self) -> &SuggestionList {
        &self.suggestions
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn ready(&self) -> bool {
        self.ready
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn user_input_value(&self) -> &str {
        &self.user_input_value
    }

    pub fn pointer_down_on_suggestion(&self) -> bool {
        self.pointer_down_on_suggestion
    }

    /// Expanded exactly when there is something to show
    pub fn is_expanded(&self) -> bool {
        !self.suggestions.is_empty()
    }

    pub fn render_state(&self) -> RenderState {
        RenderState {
            loading: self.loading,
            suggestions: self.suggestions.snapshot(),
        }
    }

    /// Receive the caller's authoritative value
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Enable or disable the input
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    /// Change the quiescence window; a pending fetch is cancelled
    pub fn set_debounce(&mut self, window: Duration) {
        self.options.debounce = window;
        self.debouncer.set_window(window);
    }

    pub fn set_search_options(&mut self, search_options: SearchOptions) {
        self.options.search_options = search_options;
    }

    /// Handle a change of the input text
    ///
    /// Reports the value, remembers it as the user's own text, and schedules a
    /// debounced fetch. An empty value clears the list, cancels any pending
    /// fetch and invalidates requests already in flight instead.
    pub fn handle_input_change(&mut self, value: &str) {
        self.emit_change(value);
        self.user_input_value = value.to_string();

        if value.is_empty() {
            self.debouncer.cancel();
            self.cleared_through = self.request_id;
            self.loading = false;
            self.suggestions.clear_all();
            return;
        }

        if self.options.should_fetch_suggestions && !self.shut_down {
            self.debouncer.trigger(value.to_string());
        }
    }

    /// Drop every suggestion
    pub fn clear_suggestions(&mut self) {
        self.suggestions.clear_all();
    }

    /// Commit a suggestion
    ///
    /// Clears the list, then notifies `on_select`, or `on_change` with the
    /// description when no select handler is configured.
    pub fn commit_suggestion(&mut self, suggestion: Suggestion) {
        self.suggestions.clear_all();
        self.value = suggestion.description.clone();

        if let Some(on_select) = self.handlers.on_select.as_mut() {
            on_select(&suggestion.description, &suggestion.place_id, &suggestion);
            return;
        }
        self.emit_change(&suggestion.description);
    }

    /// Commit the current input value as typed; always goes to `on_change`
    pub fn commit_raw_value(&mut self) {
        self.suggestions.clear_all();
        let value = self.value.clone();
        self.emit_change(&value);
    }

    /// Advance timers: flush a due fetch and run the deferred guard reset
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        if self.guard_reset_pending {
            self.guard_reset_pending = false;
            self.pointer_down_on_suggestion = false;
        }

        if let Some(text) = self.debouncer.poll_at(now) {
            log::debug!("Debounce window elapsed, fetching {:?}", text);
            self.fetch(&text);
        }
    }

    /// When the next debounced fetch becomes due, if one is pending
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Run every handler of `chain` for `event`, controller first
    pub fn dispatch(&mut self, chain: &HandlerChain, event: &UiEvent) -> EventOutcome {
        let mut outcome = EventOutcome::default();
        for handler in chain.handlers() {
            match handler {
                Handler::Internal(action) => {
                    if self.run_internal(action, event) {
                        outcome.default_prevented = true;
                    }
                }
                Handler::Caller(handler) => handler(event),
            }
        }
        outcome
    }

    /// Tear the controller down
    ///
    /// Cancels the pending fetch and detaches the worker; responses that
    /// arrive later are discarded with the dropped receiver.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        self.debouncer.cancel();
        self.request_tx = None;
        self.response_rx = None;
        self.loading = false;
        log::debug!("Autocomplete controller shut down");
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Returns true when the host's default action must be suppressed
    fn run_internal(&mut self, action: &InternalAction, event: &UiEvent) -> bool {
        match action {
            InternalAction::InputKeyDown => match event {
                UiEvent::KeyDown(key) => self.handle_key_down(key),
                _ => false,
            },
            InternalAction::InputBlur => {
                self.handle_input_blur();
                false
            }
            InternalAction::InputChange => {
                if let UiEvent::Change(value) = event {
                    self.handle_input_change(value);
                }
                false
            }
            InternalAction::SuggestionHoverEnter(index) => {
                self.handle_suggestion_hover_enter(*index);
                false
            }
            InternalAction::SuggestionHoverLeave => {
                self.handle_suggestion_hover_leave();
                false
            }
            InternalAction::SuggestionPointerDown => {
                self.handle_suggestion_pointer_down();
                true
            }
            InternalAction::SuggestionPointerUp => {
                self.handle_suggestion_pointer_up();
                false
            }
            InternalAction::SuggestionTouchStart => {
                self.handle_suggestion_touch_start();
                false
            }
            InternalAction::SuggestionTouchEnd => {
                self.handle_suggestion_touch_end();
                false
            }
            InternalAction::SuggestionClick(suggestion) => {
                self.handle_suggestion_click(suggestion);
                true
            }
        }
    }

    fn emit_change(&mut self, value: &str) {
        self.value = value.to_string();
        (self.handlers.on_change)(value);
    }
}

impl Drop for AutocompleteController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
