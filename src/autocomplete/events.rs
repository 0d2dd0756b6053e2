//! UI events and handler chains
//!
//! Attribute bundles carry, for each event slot, an ordered chain of handlers:
//! the controller's own handler first, then the caller's. The renderer hands
//! the chain and the event back to [`AutocompleteController::dispatch`], which
//! runs every handler in order so neither side clobbers the other.
//!
//! [`AutocompleteController::dispatch`]: super::AutocompleteController::dispatch

use std::fmt;
use std::rc::Rc;

use crossterm::event::KeyEvent;

use super::suggestion::Suggestion;

/// Events the rendering layer forwards to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    KeyDown(KeyEvent),
    Change(String),
    Blur,
    PointerEnter,
    PointerLeave,
    PointerDown,
    PointerUp,
    TouchStart,
    TouchEnd,
    Click,
}

/// Handler supplied by the caller through the prop builders
pub type CallerHandler = Rc<dyn Fn(&UiEvent)>;

/// Controller-side behaviour bound into a chain
#[derive(Debug, Clone, PartialEq)]
pub enum InternalAction {
    InputKeyDown,
    InputBlur,
    InputChange,
    SuggestionHoverEnter(usize),
    SuggestionHoverLeave,
    SuggestionPointerDown,
    SuggestionPointerUp,
    SuggestionTouchStart,
    SuggestionTouchEnd,
    /// Carries the record the row was built from
    SuggestionClick(Suggestion),
}

#[derive(Clone)]
pub enum Handler {
    Internal(InternalAction),
    Caller(CallerHandler),
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Internal(action) => f.debug_tuple("Internal").field(action).finish(),
            Handler::Caller(_) => f.write_str("Caller"),
        }
    }
}

/// Ordered list of handlers for one event slot
#[derive(Debug, Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Handler>,
}

impl HandlerChain {
    /// Chain starting with the controller's own handler
    pub fn internal(action: InternalAction) -> Self {
        Self {
            handlers: vec![Handler::Internal(action)],
        }
    }

    /// Append the caller's handler, if any
    pub fn then(mut self, caller: Option<CallerHandler>) -> Self {
        if let Some(handler) = caller {
            self.handlers.push(Handler::Caller(handler));
        }
        self
    }

    pub fn handlers(&self) -> &[Handler] {
        &self.handlers
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Result of dispatching an event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// The host's default action (cursor movement, focus change, submit) must be suppressed
    pub default_prevented: bool,
}
