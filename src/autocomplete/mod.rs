//! Address autocomplete controller
//!
//! Headless: the controller owns behaviour and state, a rendering layer owns
//! presentation and feeds events back through the handler chains it receives.

mod controller;
mod events;
mod handlers;
mod suggestion;
mod suggestion_list;

pub use controller::{
    AutocompleteController, AutocompleteOptions, InputProps, InputPropsOptions, RenderState,
    SuggestionItemOptions, SuggestionItemProps, render_attributes,
};
pub use events::{CallerHandler, EventOutcome, Handler, HandlerChain, InternalAction, UiEvent};
pub use handlers::{ClearSuggestions, Handlers};
pub use suggestion::{
    SUGGESTION_ID_PREFIX, Suggestion, suggestion_dom_id, suggestions_from_collection,
};
pub use suggestion_list::{ListState, SuggestionList};
