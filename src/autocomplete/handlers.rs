//! Caller-supplied handlers
//!
//! `on_change` is the single source of truth for the committed text value.
//! `on_select` receives committed suggestions; without it the controller falls
//! back to `on_change`. `on_error` receives a status and a handle that clears
//! the visible suggestions when invoked, leaving that decision to the caller.

use super::suggestion::Suggestion;
use super::suggestion_list::SuggestionList;

pub type ChangeHandler = Box<dyn FnMut(&str)>;
pub type SelectHandler = Box<dyn FnMut(&str, &str, &Suggestion)>;
pub type ErrorHandler = Box<dyn FnMut(u16, ClearSuggestions<'_>)>;

/// Handle given to the error handler; clears the current suggestions on demand
pub struct ClearSuggestions<'a> {
    list: &'a mut SuggestionList,
}

impl<'a> ClearSuggestions<'a> {
    pub(crate) fn new(list: &'a mut SuggestionList) -> Self {
        Self { list }
    }

    pub fn clear(self) {
        self.list.clear_all();
    }
}

pub struct Handlers {
    pub(crate) on_change: ChangeHandler,
    pub(crate) on_select: Option<SelectHandler>,
    pub(crate) on_error: ErrorHandler,
}

impl Handlers {
    /// Handlers with the given change handler and the default error handler
    pub fn new(on_change: impl FnMut(&str) + 'static) -> Self {
        Self {
            on_change: Box::new(on_change),
            on_select: None,
            on_error: Box::new(log_fetch_error),
        }
    }

    pub fn on_select(mut self, on_select: impl FnMut(&str, &str, &Suggestion) + 'static) -> Self {
        self.on_select = Some(Box::new(on_select));
        self
    }

    pub fn on_error(mut self, on_error: impl FnMut(u16, ClearSuggestions<'_>) + 'static) -> Self {
        self.on_error = Box::new(on_error);
        self
    }
}

/// Default error handler: log and keep the current suggestions
fn log_fetch_error(status: u16, _clear: ClearSuggestions<'_>) {
    log::error!(
        "Error fetching suggestions from the geocoding provider (status {})",
        status
    );
}
