//! Attribute and handler bundles for the rendering layer
//!
//! Caller attributes override the defaults of the same name, except `value`,
//! which always reflects the controller. Caller handlers never replace the
//! controller's: each slot is a chain that runs the controller first.

use std::collections::BTreeMap;

use super::AutocompleteController;
use crate::autocomplete::events::{CallerHandler, HandlerChain, InternalAction, UiEvent};
use crate::autocomplete::suggestion::Suggestion;

/// Caller extras for the input bundle
#[derive(Clone, Default)]
pub struct InputPropsOptions {
    pub attributes: BTreeMap<String, String>,
    pub on_key_down: Option<CallerHandler>,
    pub on_blur: Option<CallerHandler>,
}

/// Caller extras for a suggestion row bundle
#[derive(Clone, Default)]
pub struct SuggestionItemOptions {
    pub attributes: BTreeMap<String, String>,
    pub on_pointer_enter: Option<CallerHandler>,
    pub on_pointer_leave: Option<CallerHandler>,
    pub on_pointer_down: Option<CallerHandler>,
    pub on_pointer_up: Option<CallerHandler>,
    pub on_touch_start: Option<CallerHandler>,
    pub on_touch_end: Option<CallerHandler>,
    pub on_click: Option<CallerHandler>,
}

#[derive(Debug, Clone)]
pub struct InputProps {
    pub input_type: &'static str,
    pub autocomplete: &'static str,
    pub role: &'static str,
    pub aria_autocomplete: &'static str,
    pub aria_expanded: bool,
    pub aria_activedescendant: Option<String>,
    pub disabled: bool,
    pub value: String,
    pub extra_attributes: BTreeMap<String, String>,
    pub on_key_down: HandlerChain,
    pub on_blur: HandlerChain,
    pub on_change: HandlerChain,
}

impl InputProps {
    /// Flattened attributes in a stable order
    pub fn attributes(&self) -> Vec<(String, String)> {
        let mut attributes = vec![
            attr("type", self.input_type),
            attr("autocomplete", self.autocomplete),
            attr("role", self.role),
            attr("aria-autocomplete", self.aria_autocomplete),
            attr("aria-expanded", &self.aria_expanded.to_string()),
        ];
        if let Some(id) = &self.aria_activedescendant {
            attributes.push(attr("aria-activedescendant", id));
        }
        attributes.push(attr("disabled", &self.disabled.to_string()));

        merge_extra(&mut attributes, &self.extra_attributes);
        attributes.retain(|(name, _)| name != "value");
        attributes.push(attr("value", &self.value));
        attributes
    }

    /// Chain responsible for `event`, if the input listens to it
    pub fn handler_for(&self, event: &UiEvent) -> Option<&HandlerChain> {
        match event {
            UiEvent::KeyDown(_) => Some(&self.on_key_down),
            UiEvent::Blur => Some(&self.on_blur),
            UiEvent::Change(_) => Some(&self.on_change),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SuggestionItemProps {
    pub key: String,
    pub id: String,
    pub role: &'static str,
    pub aria_selected: bool,
    pub extra_attributes: BTreeMap<String, String>,
    pub on_pointer_enter: HandlerChain,
    pub on_pointer_leave: HandlerChain,
    pub on_pointer_down: HandlerChain,
    pub on_pointer_up: HandlerChain,
    pub on_touch_start: HandlerChain,
    pub on_touch_end: HandlerChain,
    pub on_click: HandlerChain,
}

impl SuggestionItemProps {
    pub fn attributes(&self) -> Vec<(String, String)> {
        let mut attributes = vec![
            attr("id", &self.id),
            attr("role", self.role),
            attr("aria-selected", &self.aria_selected.to_string()),
        ];
        merge_extra(&mut attributes, &self.extra_attributes);
        attributes
    }

    pub fn handler_for(&self, event: &UiEvent) -> Option<&HandlerChain> {
        match event {
            UiEvent::PointerEnter => Some(&self.on_pointer_enter),
            UiEvent::PointerLeave => Some(&self.on_pointer_leave),
            UiEvent::PointerDown => Some(&self.on_pointer_down),
            UiEvent::PointerUp => Some(&self.on_pointer_up),
            UiEvent::TouchStart => Some(&self.on_touch_start),
            UiEvent::TouchEnd => Some(&self.on_touch_end),
            UiEvent::Click => Some(&self.on_click),
            _ => None,
        }
    }
}

/// Render attributes as `name="value"` pairs separated by spaces
pub fn render_attributes(attributes: &[(String, String)]) -> String {
    attributes
        .iter()
        .map(|(name, value)| format!("{}=\"{}\"", name, value))
        .collect::<Vec<_>>()
        .join(" ")
}

impl AutocompleteController {
    /// Build the input bundle for the current state
    pub fn input_props(&self, options: InputPropsOptions) -> InputProps {
        InputProps {
            input_type: "text",
            autocomplete: "off",
            role: "combobox",
            aria_autocomplete: "list",
            aria_expanded: self.is_expanded(),
            aria_activedescendant: self.suggestions.active().map(Suggestion::dom_id),
            disabled: !self.ready,
            value: self.value.clone(),
            extra_attributes: options.attributes,
            on_key_down: HandlerChain::internal(InternalAction::InputKeyDown)
                .then(options.on_key_down),
            on_blur: HandlerChain::internal(InternalAction::InputBlur).then(options.on_blur),
            on_change: HandlerChain::internal(InternalAction::InputChange),
        }
    }

    /// Build the bundle for one suggestion row
    pub fn suggestion_item_props(
        &self,
        suggestion: &Suggestion,
        options: SuggestionItemOptions,
    ) -> SuggestionItemProps {
        SuggestionItemProps {
            key: suggestion.place_id.clone(),
            id: suggestion.dom_id(),
            role: "option",
            aria_selected: suggestion.active,
            extra_attributes: options.attributes,
            on_pointer_enter: HandlerChain::internal(InternalAction::SuggestionHoverEnter(
                suggestion.index,
            ))
            .then(options.on_pointer_enter),
            on_pointer_leave: HandlerChain::internal(InternalAction::SuggestionHoverLeave)
                .then(options.on_pointer_leave),
            on_pointer_down: HandlerChain::internal(InternalAction::SuggestionPointerDown)
                .then(options.on_pointer_down),
            on_pointer_up: HandlerChain::internal(InternalAction::SuggestionPointerUp)
                .then(options.on_pointer_up),
            on_touch_start: HandlerChain::internal(InternalAction::SuggestionTouchStart)
                .then(options.on_touch_start),
            on_touch_end: HandlerChain::internal(InternalAction::SuggestionTouchEnd)
                .then(options.on_touch_end),
            on_click: HandlerChain::internal(InternalAction::SuggestionClick(suggestion.clone()))
                .then(options.on_click),
        }
    }
}

fn attr(name: &str, value: &str) -> (String, String) {
    (name.to_string(), value.to_string())
}

fn merge_extra(attributes: &mut Vec<(String, String)>, extra: &BTreeMap<String, String>) {
    for (name, value) in extra {
        match attributes.iter_mut().find(|(existing, _)| existing == name) {
            Some(slot) => slot.1 = value.clone(),
            None => attributes.push((name.clone(), value.clone())),
        }
    }
}

#[cfg(test)]
#[path = "props_tests.rs"]
mod props_tests;
